//! Iterative three-color depth-first search.
//!
//! Roots are taken in node order and successors in adjacency order, so the
//! walk is fully deterministic. The explicit frame stack doubles as the
//! active path: a node is `InProgress` exactly while it has a frame on the
//! stack.

/// Per-node traversal marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Marker {
    Unvisited,
    InProgress,
    Done,
}

/// One level of the simulated call stack.
#[derive(Debug)]
struct Frame {
    node: usize,
    /// Position of the next successor to look at.
    next: usize,
}

/// Result of walking the whole graph.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Walk {
    /// No back-edge was found. Nodes are listed in the order they were
    /// marked done (every node after all of its successors).
    Acyclic { finish_order: Vec<usize> },
    /// The first back-edge closed this path, listed from the back-edge
    /// target down to the node that owns the back-edge.
    Cycle { path: Vec<usize> },
}

/// Walk every node of the graph described by `successors`, stopping at the
/// first back-edge.
pub(crate) fn walk(successors: &[Vec<usize>]) -> Walk {
    let mut markers = vec![Marker::Unvisited; successors.len()];
    let mut finish_order = Vec::with_capacity(successors.len());
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..successors.len() {
        if markers[root] != Marker::Unvisited {
            continue;
        }
        markers[root] = Marker::InProgress;
        stack.push(Frame { node: root, next: 0 });

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            match successors[node].get(frame.next) {
                Some(&succ) => {
                    frame.next += 1;
                    match markers[succ] {
                        Marker::Unvisited => {
                            markers[succ] = Marker::InProgress;
                            stack.push(Frame { node: succ, next: 0 });
                        }
                        Marker::InProgress => {
                            let path = stack
                                .iter()
                                .map(|f| f.node)
                                .skip_while(|&n| n != succ)
                                .collect();
                            return Walk::Cycle { path };
                        }
                        Marker::Done => {}
                    }
                }
                None => {
                    markers[node] = Marker::Done;
                    finish_order.push(node);
                    stack.pop();
                }
            }
        }
    }

    Walk::Acyclic { finish_order }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacency(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
        let mut succ = vec![Vec::new(); n];
        for &(a, b) in edges {
            succ[a].push(b);
        }
        succ
    }

    #[test]
    fn test_empty_graph() {
        assert_eq!(
            walk(&[]),
            Walk::Acyclic {
                finish_order: vec![]
            }
        );
    }

    #[test]
    fn test_finish_order_is_postorder() {
        // 0 -> 1 -> 2, 0 -> 3
        let succ = adjacency(4, &[(0, 1), (1, 2), (0, 3)]);
        assert_eq!(
            walk(&succ),
            Walk::Acyclic {
                finish_order: vec![2, 1, 3, 0]
            }
        );
    }

    #[test]
    fn test_self_loop_path() {
        let succ = adjacency(2, &[(0, 1), (1, 1)]);
        assert_eq!(walk(&succ), Walk::Cycle { path: vec![1] });
    }

    #[test]
    fn test_cycle_path_excludes_prefix() {
        // 0 -> 1 -> 2 -> 3 -> 1
        let succ = adjacency(4, &[(0, 1), (1, 2), (2, 3), (3, 1)]);
        assert_eq!(walk(&succ), Walk::Cycle { path: vec![1, 2, 3] });
    }

    #[test]
    fn test_done_nodes_are_not_back_edges() {
        // Diamond: both branches reach 3, which is done by the time the
        // second branch gets there.
        let succ = adjacency(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert!(matches!(walk(&succ), Walk::Acyclic { .. }));
    }

    #[test]
    fn test_successor_order_decides_first_cycle() {
        // Two cycles through 0; the edge listed first wins.
        let succ = adjacency(3, &[(0, 2), (0, 1), (1, 0), (2, 0)]);
        assert_eq!(walk(&succ), Walk::Cycle { path: vec![0, 2] });
    }

    #[test]
    fn test_cycle_in_later_component() {
        let succ = adjacency(5, &[(0, 1), (3, 4), (4, 3)]);
        assert_eq!(walk(&succ), Walk::Cycle { path: vec![3, 4] });
    }
}
