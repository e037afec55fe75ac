/*!
# Substructure Generators

Methods to add common motifs (paths, cycles, cliques, stars) to an already existing graph.

```rust
use graphprops::{prelude::*, gens::*};

let mut g = AdjArrayUndir::new(6);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);
g.connect_star(5, [0, 4]);

assert_eq!(
    g.ordered_edges(true),
    vec![Edge(0, 1), Edge(0, 5), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4), Edge(4, 5)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional substructures inside an already existing graph.
///
/// All methods panic if one of the edges to be added is already present or would be a loop.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a simple path.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a cycle: consecutive nodes are connected and the last node
    /// is connected back to the first. Fewer than 3 nodes are connected by a path.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a clique.
    fn connect_clique(&mut self, nodes: &[Node]);

    /// Connects `center` to each of the given leaves.
    fn connect_star<L>(&mut self, center: Node, leaves: L)
    where
        L: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes_in_cycle.into_iter().collect_vec();
        self.connect_path(nodes.iter().copied());

        if nodes.len() >= 3 {
            self.add_edge(nodes[nodes.len() - 1], nodes[0]);
        }
    }

    fn connect_clique(&mut self, nodes: &[Node]) {
        for (&u, &v) in nodes.iter().tuple_combinations() {
            self.add_edge(u, v);
        }
    }

    fn connect_star<L>(&mut self, center: Node, leaves: L)
    where
        L: IntoIterator<Item = Node>,
    {
        for v in leaves {
            self.add_edge(center, v);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_connect_path() {
        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_path([]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_path([1]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_path([0, 3, 1, 4]);
            assert_eq!(
                g.ordered_edges(true),
                vec![Edge(0, 3), Edge(1, 3), Edge(1, 4)]
            );
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_cycle([2, 1]);
            assert_eq!(g.number_of_edges(), 1);
        }

        {
            let mut g = AdjMatrixUndir::new(6);
            g.connect_cycle([0, 3, 1, 4]);
            assert_eq!(
                g.ordered_edges(true),
                vec![Edge(0, 3), Edge(0, 4), Edge(1, 3), Edge(1, 4)]
            );
        }
    }

    #[test]
    fn test_connect_clique_and_star() {
        let mut g = AdjArrayUndir::new(6);
        g.connect_clique(&[1, 2, 4]);
        assert_eq!(g.number_of_edges(), 3);

        g.connect_star(0, [3, 5]);
        assert_eq!(g.number_of_edges(), 5);
        assert_eq!(g.degree_of(0), 2);

        let mut g = AdjArrayUndir::new(5);
        g.connect_clique(&[0, 1, 2, 3, 4]);
        assert_eq!(g.number_of_edges(), 10);
    }
}
