/*!
# Errors

Every analyzer validates its input before doing any work. A graph that violates the
simple-undirected-graph invariants is rejected with an [`InvalidGraphError`] and no partial
result is produced. Failing to find a path or cycle is never an error; it is reported through
the returned report or an `Option`.
*/

use thiserror::Error;

use crate::prelude::*;

/// Reasons a graph is rejected by the analyzers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidGraphError {
    #[error("edge {edge} references vertex {vertex}, but the graph only has {num_nodes} vertices")]
    UnknownVertex {
        edge: Edge,
        vertex: Node,
        num_nodes: NumNodes,
    },

    #[error("self-loop at vertex {node}")]
    SelfLoop { node: Node },

    #[error("edge {edge} is stored more than once")]
    ParallelEdge { edge: Edge },

    #[error("edge {edge} is only stored at one of its endpoints")]
    AsymmetricEdge { edge: Edge },

    #[error("graph reports {reported} edges but stores {stored}")]
    EdgeCountMismatch { reported: NumEdges, stored: NumEdges },
}

/// Result type used by all analyzers
pub type Result<T, E = InvalidGraphError> = std::result::Result<T, E>;
