//! Error types for polaris-core.

use thiserror::Error;

use crate::graph::Edge;

/// Result type for polaris-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating a pipeline graph.
///
/// A cycle is not an error for [`crate::GraphValidator::validate`]; it is a
/// successful verdict with `is_dag == false`. Only malformed input is
/// reported here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The same node identifier appears more than once in the node list.
    #[error("duplicate node '{node}' at position {position} (first declared at position {first_position})")]
    DuplicateNode {
        node: String,
        first_position: usize,
        position: usize,
    },

    /// An edge points at an identifier that is not in the node list.
    #[error("edge {edge_index} ({edge}) references unknown node '{missing}'")]
    UnknownNodeReference {
        edge_index: usize,
        edge: Edge,
        missing: String,
    },

    /// A dependency order was requested for a graph that contains a cycle.
    #[error("cyclic dependency detected: {0}")]
    CyclicDependency(String),
}

impl Error {
    /// Stable name of the error kind, used on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::DuplicateNode { .. } => "DuplicateNode",
            Error::UnknownNodeReference { .. } => "UnknownNodeReference",
            Error::CyclicDependency(_) => "CyclicDependency",
        }
    }

    /// Whether the error was caused by the caller's input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::DuplicateNode { .. } | Error::UnknownNodeReference { .. }
        )
    }

    /// Short recovery hint for people fixing the pipeline by hand.
    pub fn hint(&self) -> &'static str {
        match self {
            Error::DuplicateNode { .. } => "give every node a unique id",
            Error::UnknownNodeReference { .. } => {
                "add the missing node or remove the edge that points at it"
            }
            Error::CyclicDependency(_) => "remove one edge of the cycle",
        }
    }

    /// Format the error followed by its recovery hint.
    pub fn with_hint(&self) -> String {
        format!("{self}\n  hint: {}", self.hint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_reference_message() {
        let err = Error::UnknownNodeReference {
            edge_index: 0,
            edge: Edge::new("1", "3"),
            missing: "3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "edge 0 (1 -> 3) references unknown node '3'"
        );
        assert_eq!(err.kind(), "UnknownNodeReference");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_hint_is_appended() {
        let err = Error::DuplicateNode {
            node: "a".to_string(),
            first_position: 0,
            position: 2,
        };
        let text = err.with_hint();
        assert!(text.starts_with("duplicate node 'a' at position 2"));
        assert!(text.ends_with("hint: give every node a unique id"));
    }

    #[test]
    fn test_cyclic_dependency_is_not_input_error() {
        let err = Error::CyclicDependency("a -> a".to_string());
        assert!(!err.is_input_error());
        assert_eq!(err.kind(), "CyclicDependency");
    }
}
