//! Types for pipeline graphs.

use serde::{Deserialize, Serialize};

/// A pipeline node, identified by an opaque string.
///
/// Node editors send much richer objects (position, type, data); only the
/// identifier matters here and every other field is ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A directed edge: `source` must complete before `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// A pipeline as submitted by a caller: nodes plus edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Pipeline {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }
}

/// Outcome of validating a well-formed pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of edges, duplicates included.
    pub edge_count: usize,
    /// True iff the graph has no directed cycle.
    pub is_dag: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_ignores_editor_fields() {
        let json = r#"{
            "nodes": [
                {"id": "customInput-1", "type": "customInput", "position": {"x": 10, "y": 20}},
                {"id": "llm-1", "data": {"label": "LLM"}}
            ],
            "edges": [
                {"id": "e1", "source": "customInput-1", "target": "llm-1", "sourceHandle": "out"}
            ]
        }"#;
        let pipeline: Pipeline = serde_json::from_str(json).unwrap();
        assert_eq!(pipeline.nodes, vec![Node::new("customInput-1"), Node::new("llm-1")]);
        assert_eq!(pipeline.edges, vec![Edge::new("customInput-1", "llm-1")]);
    }

    #[test]
    fn test_missing_edges_is_rejected() {
        let result: Result<Pipeline, _> = serde_json::from_str(r#"{"nodes": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(Edge::new("a", "b").to_string(), "a -> b");
    }
}
