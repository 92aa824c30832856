//! Request-scoped indexed graph.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use super::traversal::{self, Walk};
use super::types::{Edge, Node};
use crate::error::{Error, Result};

/// A pipeline graph with node identifiers mapped to dense indices.
///
/// Borrows identifiers from the caller's input and lives for a single
/// validation call.
#[derive(Debug)]
pub struct PipelineGraph<'a> {
    /// Node identifiers by dense index, in input order.
    ids: Vec<&'a str>,
    /// Successor indices per node, in edge input order.
    successors: Vec<Vec<usize>>,
    edge_count: usize,
}

impl<'a> PipelineGraph<'a> {
    /// Build the graph, rejecting duplicate nodes and dangling edges.
    pub fn build(nodes: &'a [Node], edges: &'a [Edge]) -> Result<Self> {
        let mut index: FxHashMap<&'a str, usize> = FxHashMap::default();
        index.reserve(nodes.len());
        let mut ids = Vec::with_capacity(nodes.len());

        for (position, node) in nodes.iter().enumerate() {
            match index.entry(node.id.as_str()) {
                Entry::Occupied(first) => {
                    return Err(Error::DuplicateNode {
                        node: node.id.clone(),
                        first_position: *first.get(),
                        position,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(position);
                    ids.push(node.id.as_str());
                }
            }
        }

        let mut successors = vec![Vec::new(); ids.len()];
        for (edge_index, edge) in edges.iter().enumerate() {
            let resolve = |id: &str| {
                index
                    .get(id)
                    .copied()
                    .ok_or_else(|| Error::UnknownNodeReference {
                        edge_index,
                        edge: edge.clone(),
                        missing: id.to_string(),
                    })
            };
            let from = resolve(&edge.source)?;
            let to = resolve(&edge.target)?;
            successors[from].push(to);
        }

        Ok(Self {
            ids,
            successors,
            edge_count: edges.len(),
        })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Identifier of the node at `index`.
    pub fn node_id(&self, index: usize) -> Option<&'a str> {
        self.ids.get(index).copied()
    }

    /// Successor indices of the node at `index`, in edge input order.
    pub fn successors(&self, index: usize) -> &[usize] {
        self.successors.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the graph has no directed cycle.
    pub fn is_dag(&self) -> bool {
        matches!(traversal::walk(&self.successors), Walk::Acyclic { .. })
    }

    /// The first cycle met by the depth-first walk, if any.
    ///
    /// The path starts at the node the back-edge points to and ends at the
    /// node that owns the back-edge; following the path and then the
    /// back-edge returns to the start. A self-loop yields a single node.
    pub fn find_cycle(&self) -> Option<Vec<&'a str>> {
        match traversal::walk(&self.successors) {
            Walk::Acyclic { .. } => None,
            Walk::Cycle { path } => Some(path.into_iter().map(|i| self.ids[i]).collect()),
        }
    }

    /// Node identifiers ordered so every edge's source precedes its target.
    pub fn topological_order(&self) -> Result<Vec<&'a str>> {
        match traversal::walk(&self.successors) {
            Walk::Acyclic { finish_order } => {
                Ok(finish_order.into_iter().rev().map(|i| self.ids[i]).collect())
            }
            Walk::Cycle { path } => {
                let names: Vec<&str> = path.iter().map(|&i| self.ids[i]).collect();
                Err(Error::CyclicDependency(format!(
                    "{} -> {}",
                    names.join(" -> "),
                    names[0]
                )))
            }
        }
    }
}
