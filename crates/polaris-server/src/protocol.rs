//! JSON message types for the pipeline endpoints.

use polaris_core::{Error as CoreError, Validation};
use serde::{Deserialize, Serialize};

/// Body of `POST /pipelines/parse`.
///
/// Same shape as the node editor's store: only `nodes[].id` and
/// `edges[].source`/`edges[].target` are read.
pub type PipelineRequest = polaris_core::Pipeline;

/// Successful response of `POST /pipelines/parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
}

impl From<Validation> for PipelineSummary {
    fn from(v: Validation) -> Self {
        Self {
            num_nodes: v.node_count,
            num_edges: v.edge_count,
            is_dag: v.is_dag,
        }
    }
}

/// Error envelope: `{"error": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Structured description of a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Error kind: `DuplicateNode`, `UnknownNodeReference` or `Internal`.
    pub kind: String,
    /// Human-readable message.
    pub message: String,
    /// Offending node id (`DuplicateNode`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_position: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// Offending edge (`UnknownNodeReference`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// The identifier that is not in the node list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<String>,
}

impl ErrorDetail {
    /// Detail with only a kind and a message.
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            node: None,
            first_position: None,
            position: None,
            edge_index: None,
            source: None,
            target: None,
            missing: None,
        }
    }
}

impl From<&CoreError> for ErrorDetail {
    fn from(err: &CoreError) -> Self {
        let base = Self::new(err.kind(), err.to_string());
        match err {
            CoreError::DuplicateNode {
                node,
                first_position,
                position,
            } => Self {
                node: Some(node.clone()),
                first_position: Some(*first_position),
                position: Some(*position),
                ..base
            },
            CoreError::UnknownNodeReference {
                edge_index,
                edge,
                missing,
            } => Self {
                edge_index: Some(*edge_index),
                source: Some(edge.source.clone()),
                target: Some(edge.target.clone()),
                missing: Some(missing.clone()),
                ..base
            },
            CoreError::CyclicDependency(_) => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_field_names() {
        let summary = PipelineSummary::from(Validation {
            node_count: 3,
            edge_count: 2,
            is_dag: true,
        });
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"num_nodes": 3, "num_edges": 2, "is_dag": true})
        );
    }

    #[test]
    fn test_unknown_reference_detail() {
        let err = CoreError::UnknownNodeReference {
            edge_index: 0,
            edge: polaris_core::Edge::new("1", "3"),
            missing: "3".to_string(),
        };
        let json = serde_json::to_value(ErrorBody {
            error: ErrorDetail::from(&err),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": {
                    "kind": "UnknownNodeReference",
                    "message": "edge 0 (1 -> 3) references unknown node '3'",
                    "edge_index": 0,
                    "source": "1",
                    "target": "3",
                    "missing": "3"
                }
            })
        );
    }

    #[test]
    fn test_duplicate_node_detail() {
        let err = CoreError::DuplicateNode {
            node: "a".to_string(),
            first_position: 0,
            position: 1,
        };
        let detail = ErrorDetail::from(&err);
        assert_eq!(detail.kind, "DuplicateNode");
        assert_eq!(detail.node.as_deref(), Some("a"));
        assert_eq!(detail.position, Some(1));
        assert!(detail.edge_index.is_none());
    }
}
