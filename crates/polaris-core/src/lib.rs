//! Core engine for Polaris pipeline validation.
//!
//! This crate provides:
//! - Cycle detection for user-defined pipeline graphs
//! - Typed errors for malformed pipelines
//!
//! # Example
//!
//! ```
//! use polaris_core::{Edge, GraphValidator, Node};
//!
//! let nodes = vec![Node::new("1"), Node::new("2"), Node::new("3")];
//! let edges = vec![Edge::new("1", "2"), Edge::new("2", "3")];
//!
//! let result = GraphValidator::validate(&nodes, &edges).unwrap();
//! assert_eq!(result.node_count, 3);
//! assert_eq!(result.edge_count, 2);
//! assert!(result.is_dag);
//! ```

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{Edge, GraphValidator, Node, Pipeline, PipelineGraph, Validation};
