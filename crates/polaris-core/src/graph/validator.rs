//! DAG validation entry point.

use super::pipeline::PipelineGraph;
use super::types::{Edge, Node, Pipeline, Validation};
use crate::error::Result;

/// Stateless validator for user-defined pipeline graphs.
///
/// Every call builds its own indexed graph and traversal state, so a single
/// validator can serve any number of concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphValidator;

impl GraphValidator {
    /// Validate `nodes` and `edges`, returning counts and the DAG verdict.
    ///
    /// Fails with [`crate::Error::DuplicateNode`] or
    /// [`crate::Error::UnknownNodeReference`] on malformed input. A cycle is
    /// not an error: it yields `is_dag == false`.
    pub fn validate(nodes: &[Node], edges: &[Edge]) -> Result<Validation> {
        let graph = PipelineGraph::build(nodes, edges)?;
        let is_dag = graph.is_dag();

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            is_dag,
            "Validated pipeline graph"
        );

        Ok(Validation {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            is_dag,
        })
    }

    /// Validate a whole [`Pipeline`].
    pub fn validate_pipeline(pipeline: &Pipeline) -> Result<Validation> {
        Self::validate(&pipeline.nodes, &pipeline.edges)
    }
}
