/*!
# Graph Analyzers

This module provides the structural analyzers built on top of the graph model in
[`ops`](crate::ops).
All analyzers are re-exported at the top level of this module, so you can simply do:
```rust
use graphprops::algo::*;
```
and gain access to traversal, connectivity, Eulerian, Hamiltonian and tree analysis.

Every `analyze_*` / `find_*` entry point validates the graph first and returns
[`InvalidGraphError`] if it is malformed. The remaining helpers (e.g. [`Traversal`]) assume a
well-formed graph.
*/

mod connectivity;
mod cuts;
mod eulerian;
mod hamiltonian;
mod subgraph;
mod traversal;
mod tree;

use crate::{error::Result, prelude::*};

pub use connectivity::*;
pub use cuts::*;
pub use eulerian::*;
pub use hamiltonian::*;
pub use subgraph::*;
pub use traversal::*;
pub use tree::*;

#[cfg(test)]
mod test {
    use super::*;

    /// Adjacency lists taken as given, so each invariant can be broken on purpose
    struct RawLists {
        nbs: Vec<Vec<Node>>,
        reported_edges: NumEdges,
    }

    impl RawLists {
        fn new(nbs: Vec<Vec<Node>>, reported_edges: NumEdges) -> Self {
            Self {
                nbs,
                reported_edges,
            }
        }
    }

    impl GraphNodeOrder for RawLists {
        fn number_of_nodes(&self) -> NumNodes {
            self.nbs.len() as NumNodes
        }
    }

    impl GraphEdgeOrder for RawLists {
        fn number_of_edges(&self) -> NumEdges {
            self.reported_edges
        }
    }

    impl AdjacencyList for RawLists {
        fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
            self.nbs[u as usize].iter().copied()
        }

        fn degree_of(&self, u: Node) -> NumNodes {
            self.nbs[u as usize].len() as NumNodes
        }
    }

    impl AdjacencyTest for RawLists {
        fn has_edge(&self, u: Node, v: Node) -> bool {
            self.nbs[u as usize].contains(&v)
        }
    }

    /// Asserts that validation and every analyzer reject `graph` with `expected`
    fn assert_rejected(graph: &RawLists, expected: InvalidGraphError) {
        assert_eq!(graph.validate_graph(), Err(expected));

        assert_eq!(graph.analyze_connectivity().err(), Some(expected));
        assert_eq!(graph.analyze_eulerian().err(), Some(expected));
        assert_eq!(graph.find_eulerian_path().err(), Some(expected));
        assert_eq!(graph.analyze_hamiltonian().err(), Some(expected));
        assert_eq!(graph.find_hamiltonian_path().err(), Some(expected));
        assert_eq!(graph.find_hamiltonian_path_bounded(0).err(), Some(expected));
        assert_eq!(graph.analyze_tree().err(), Some(expected));
        assert_eq!(graph.find_cycle().err(), Some(expected));
    }

    #[test]
    fn self_loop() {
        let graph = RawLists::new(vec![vec![1], vec![0, 1]], 1);
        assert_rejected(&graph, InvalidGraphError::SelfLoop { node: 1 });
    }

    #[test]
    fn unknown_vertex() {
        let graph = RawLists::new(vec![vec![1, 5], vec![0]], 1);
        assert_rejected(
            &graph,
            InvalidGraphError::UnknownVertex {
                edge: Edge(0, 5),
                vertex: 5,
                num_nodes: 2,
            },
        );
    }

    #[test]
    fn parallel_edge() {
        let graph = RawLists::new(vec![vec![1, 1], vec![0, 0]], 1);
        assert_rejected(&graph, InvalidGraphError::ParallelEdge { edge: Edge(0, 1) });
    }

    #[test]
    fn asymmetric_edge() {
        let graph = RawLists::new(vec![vec![1], vec![]], 1);
        assert_rejected(&graph, InvalidGraphError::AsymmetricEdge { edge: Edge(0, 1) });
    }

    #[test]
    fn edge_count_mismatch() {
        let graph = RawLists::new(vec![vec![1], vec![0]], 3);
        assert_rejected(
            &graph,
            InvalidGraphError::EdgeCountMismatch {
                reported: 3,
                stored: 1,
            },
        );
    }

    #[test]
    fn well_formed_lists_pass() {
        let graph = RawLists::new(vec![vec![1, 2], vec![0], vec![0]], 2);
        assert_eq!(graph.validate_graph(), Ok(()));
        assert!(graph.analyze_tree().unwrap().is_tree);
    }
}
