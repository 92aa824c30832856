//! Pipeline graph validation.
//!
//! This module provides:
//! - Wire-level node, edge and pipeline types
//! - An indexed, request-scoped graph with input checks
//! - Iterative cycle detection and dependency ordering

mod pipeline;
mod traversal;
mod types;
mod validator;

pub use pipeline::PipelineGraph;
pub use types::{Edge, Node, Pipeline, Validation};
pub use validator::GraphValidator;
