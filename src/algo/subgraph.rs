/*!
# Subgraph Algorithms

Extraction of vertex-induced subgraphs.
*/

use super::*;

/// A trait for creating subgraphs from a graph.
pub trait Subgraph: AdjacencyList + Sized {
    /// Creates a **vertex-induced subgraph** from the current graph, restricted to the nodes in
    /// `vertices`. Nodes are renumbered densely in ascending order.
    ///
    /// Returns the new graph together with a mapping of new node IDs to old ones,
    /// i.e. `mapping[new] == old`.
    fn vertex_induced(&self, vertices: &NodeBitSet) -> (Self, Vec<Node>)
    where
        Self: GraphFromScratch,
    {
        let mapping: Vec<Node> = vertices.ones().map(|u| u as Node).collect();

        let mut new_id_of = vec![INVALID_NODE; self.len()];
        for (new, &old) in mapping.iter().enumerate() {
            new_id_of[old as usize] = new as Node;
        }

        let new_id_of = &new_id_of;
        let graph = Self::from_edges(
            mapping.len() as NumNodes,
            mapping.iter().flat_map(|&u| {
                self.neighbors_of(u).filter_map(move |v| {
                    let e = Edge(new_id_of[u as usize], new_id_of[v as usize]);
                    (new_id_of[v as usize] != INVALID_NODE && e.is_normalized()).then_some(e)
                })
            }),
        );

        (graph, mapping)
    }

    /// Creates the subgraph without node `u`; all nodes above `u` are shifted down by one
    fn without_vertex(&self, u: Node) -> Self
    where
        Self: GraphFromScratch,
    {
        let mut keep = self.vertex_bitset_unset();
        keep.insert_range(..);
        keep.set(u as usize, false);
        self.vertex_induced(&keep).0
    }
}

impl<G: AdjacencyList> Subgraph for G {}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn induced_on_path() {
        let graph = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);

        let mut vertices = graph.vertex_bitset_unset();
        for u in [1, 2, 4] {
            vertices.insert(u);
        }

        let (sub, mapping) = graph.vertex_induced(&vertices);
        assert_eq!(mapping, vec![1, 2, 4]);
        assert_eq!(sub.number_of_nodes(), 3);
        assert_eq!(sub.ordered_edges(true), vec![Edge(0, 1)]);
    }

    #[test]
    fn remove_center() {
        let graph = AdjMatrixUndir::from_edges(4, [(0, 1), (0, 2), (0, 3), (2, 3)]);
        let sub = graph.without_vertex(0);

        assert_eq!(sub.number_of_nodes(), 3);
        assert_eq!(sub.edges(true).collect_vec(), vec![Edge(1, 2)]);
    }
}
