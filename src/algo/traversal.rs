/*!
Graph traversal iterators.

This module provides breadth-first and depth-first search iterators, optionally reporting the
predecessor of each node in the implied BFS tree, and a [`Traversal`] trait exposing them
directly as methods on graphs. Components and cycle witnesses are built on top of them.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Abstraction for items yielded by a traversal iterator.
///
/// Two implementations are provided:
/// - [`Node`]: stores only the node (no predecessor information).
/// - [`PredecessorOfNode`]: stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// Internally, the absence of a predecessor is encoded by
/// setting both tuple entries to the same node value.
pub type PredecessorOfNode = (Node, Node);
impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// The frontier of a traversal. A queue yields **BFS**, a stack yields **DFS**.
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// A node is marked visited as soon as it is pushed onto the frontier, so every node is yielded
/// at most once. Neighbors are pushed in the order the graph reports them.
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

/// A BFS traversal iterator that records predecessor information.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        for v in self.graph.neighbors_of(u) {
            if !self.visited.put(v as usize) {
                self.sequencer.push(I::new_with_predecessor(u, v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.count_ones(..) + self.sequencer.cardinality()),
        )
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.insert(start as usize);
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            _item: PhantomData,
        }
    }

    /// Creates a traversal iterator that yields nothing until
    /// [`TraversalSearch::try_restart_at_unvisited`] is called.
    pub fn new_idle(graph: &'a G) -> Self {
        let mut sequencer = S::init(I::new_without_predecessor(0));
        sequencer.pop();
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            sequencer,
            _item: PhantomData,
        }
    }

    /// Tries to restart the search at the smallest yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        match self.visited.zeroes().next() {
            None => false,
            Some(x) => {
                self.visited.insert(x);
                self.sequencer.push(I::new_without_predecessor(x as Node));
                true
            }
        }
    }
}

/// Traversal algorithms exposed directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator visiting nodes in BFS order starting at `start`.
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator visiting nodes in DFS order starting at `start`.
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns an iterator over `(predecessor, node)` pairs in BFS order.
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }
}

impl<G: AdjacencyList> Traversal for G {}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn bfs_order() {
        let graph = AdjArrayUndir::from_edges(6, [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]);

        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3, 4]);
        assert_eq!(graph.bfs(4).collect_vec(), vec![4, 3, 1, 2, 0]);
        assert_eq!(graph.bfs(5).collect_vec(), vec![5]);
    }

    #[test]
    fn dfs_order() {
        let graph = AdjArrayUndir::from_edges(6, [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]);

        // stack-based: the largest neighbor is explored first
        assert_eq!(graph.dfs(0).collect_vec(), vec![0, 2, 3, 4, 1]);
    }

    #[test]
    fn predecessors() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (1, 3)]);

        let pairs = graph.bfs_with_predecessor(0).collect_vec();
        assert_eq!(pairs, vec![(0, 0), (0, 1), (1, 2), (1, 3)]);
        assert_eq!(pairs[0].predecessor(), None);
        assert_eq!(pairs[2].predecessor(), Some(1));
    }

    #[test]
    fn restart() {
        let graph = AdjArrayUndir::from_edges(5, [(0, 1), (3, 4)]);

        let mut bfs = graph.bfs(0);
        assert_eq!(bfs.by_ref().collect_vec(), vec![0, 1]);
        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![2]);
        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![3, 4]);
        assert!(!bfs.try_restart_at_unvisited());
        assert_eq!(bfs.next(), None);
    }

    #[test]
    fn idle_on_empty_graph() {
        let graph = AdjArrayUndir::new(0);
        let mut bfs = BFS::new_idle(&graph);
        assert_eq!(bfs.next(), None);
        assert!(!bfs.try_restart_at_unvisited());
    }
}
