/*!
# Graph Model

The traits in this module form the read-only graph abstraction every analyzer consumes, plus the
editing operations a graph owner (e.g. an interactive editor) uses to build one.

Analyzers never trust an implementation blindly: [`GraphValidation::validate_graph`] checks the
simple-undirected-graph invariants at the start of each analysis.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::{error::*, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all vertices `0..n`.
    /// In contrast to self.vertices(), the range returned does not borrow self.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V in ascending order.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        node_bitset(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the neighbors of `u` in ascending order, regardless of how the
    /// representation stores them.
    /// ** Panics if `u >= n` **
    fn ordered_neighbors_of(&self, u: Node) -> Vec<Node> {
        let mut nbs = self.neighbors_of(u).collect_vec();
        nbs.sort_unstable();
        nbs
    }

    /// Returns *true* if `u` has no neighbors
    /// ** Panics if `u >= n` **
    fn is_singleton(&self, u: Node) -> bool {
        self.degree_of(u) == 0
    }

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the minimum degree in the graph (`0` for the empty graph)
    fn min_degree(&self) -> NumNodes {
        self.degrees().min().unwrap_or(0)
    }

    /// Returns an iterator over all vertices of odd degree in ascending order
    fn vertices_with_odd_degree(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) % 2 == 1)
    }

    /// Returns an iterator over all vertices with degree one
    fn vertices_with_degree_one(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) == 1)
    }

    /// Returns an iterator over edges incident to a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        let mut edges = self.edges(only_normalized).collect_vec();
        edges.sort_unstable();
        edges
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde {u,v} exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if every pair of consecutive nodes is connected by an edge
    fn is_walk(&self, nodes: &[Node]) -> bool {
        nodes.iter().tuple_windows().all(|(&u, &v)| self.has_edge(u, v))
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge *{u,v}* to the graph.
    /// ** Panics if `u >= n || v >= n`, `u == v` or the edge was already present **
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(!self.try_add_edge(u, v))
    }

    /// Adds the edge `{u, v}` to the graph.
    /// Returns *true* exactly if the edge was present previously, in which case nothing is
    /// stored: parallel edges are merged.
    /// ** Panics if `u >= n || v >= n` or `u == v` **
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }

    /// Removes the edge *{u,v}* from the graph.
    /// ** Panics if the edge is not present or u, v >= n **
    fn remove_edge(&mut self, u: Node, v: Node) {
        assert!(self.try_remove_edge(u, v));
    }

    /// Removes the edge *{u,v}* from the graph.
    /// If the edge was removed, returns *true* and *false* otherwise.
    /// ** Panics if u, v >= n **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool;

    /// Removes all edges incident to `u`
    /// ** Panics if `u >= n` **
    fn remove_edges_at_node(&mut self, u: Node);
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over Edges.
    /// ** Panics on invalid edges or duplicates **
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;

    /// Create a graph from a number of nodes and an iterator over Edges supplied by an
    /// untrusted source. Duplicate edges (in either orientation) are merged; self-loops and
    /// endpoints outside of `0..n` are rejected.
    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self>;
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }

    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self> {
        let mut graph = Self::new(n);
        for edge in edges {
            let edge: Edge = edge.into();
            let Edge(u, v) = edge;
            if let Some(vertex) = [u, v].into_iter().find(|&x| x >= n) {
                return Err(InvalidGraphError::UnknownVertex {
                    edge,
                    vertex,
                    num_nodes: n,
                });
            }

            if edge.is_loop() {
                return Err(InvalidGraphError::SelfLoop { node: u });
            }

            graph.try_add_edge(u, v);
        }
        Ok(graph)
    }
}

/// Checks that a graph is a simple undirected graph
pub trait GraphValidation: AdjacencyList + AdjacencyTest + GraphEdgeOrder {
    /// Returns an error describing the first violated invariant, scanning vertices and their
    /// neighbors in ascending order:
    /// - every neighbor is a vertex of the graph,
    /// - no vertex is its own neighbor,
    /// - no neighbor is stored twice,
    /// - every edge is stored at both endpoints,
    /// - the reported number of edges matches the stored ones.
    fn validate_graph(&self) -> Result<()> {
        let n = self.number_of_nodes();
        let mut stored_records: u64 = 0;

        for u in self.vertices() {
            let nbs = self.ordered_neighbors_of(u);

            for (i, &v) in nbs.iter().enumerate() {
                if v >= n {
                    return Err(InvalidGraphError::UnknownVertex {
                        edge: Edge(u, v),
                        vertex: v,
                        num_nodes: n,
                    });
                }

                if v == u {
                    return Err(InvalidGraphError::SelfLoop { node: u });
                }

                if i > 0 && nbs[i - 1] == v {
                    return Err(InvalidGraphError::ParallelEdge {
                        edge: Edge(u, v).normalized(),
                    });
                }

                if !self.has_edge(v, u) {
                    return Err(InvalidGraphError::AsymmetricEdge { edge: Edge(u, v) });
                }
            }

            stored_records += nbs.len() as u64;
        }

        let stored = (stored_records / 2) as NumEdges;
        if stored != self.number_of_edges() {
            return Err(InvalidGraphError::EdgeCountMismatch {
                reported: self.number_of_edges(),
                stored,
            });
        }

        Ok(())
    }
}

impl<G> GraphValidation for G where G: AdjacencyList + AdjacencyTest + GraphEdgeOrder {}

/// Everything an analyzer needs to read from a graph snapshot
pub trait StaticGraph: AdjacencyList + AdjacencyTest + GraphEdgeOrder {}

impl<G> StaticGraph for G where G: AdjacencyList + AdjacencyTest + GraphEdgeOrder {}
