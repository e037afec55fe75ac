use crate::testing::test_graph_ops;

use super::*;

/// An undirected simple graph representation
#[derive(Clone, Debug)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Representation using an Adjacency-Matrix
pub type AdjMatrixUndir = UndirectedGraph<BitNeighborhood>;

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }

    // Neighborhoods are kept sorted
    fn ordered_neighbors_of(&self, u: Node) -> Vec<Node> {
        self.nbs[u as usize].neighbors().collect()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        assert_ne!(u, v, "self-loops are not supported");
        assert!(v < self.number_of_nodes());

        if !self.nbs[u as usize].try_add_neighbor(v) {
            assert!(!self.nbs[v as usize].try_add_neighbor(u));
            self.num_edges += 1;
            false
        } else {
            true
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.nbs[u as usize].try_remove_neighbor(v) {
            assert!(self.nbs[v as usize].try_remove_neighbor(u));
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }

    fn remove_edges_at_node(&mut self, u: Node) {
        let n = self.number_of_nodes();
        let nbs = std::mem::replace(&mut self.nbs[u as usize], Nbs::new(n));
        for v in nbs.neighbors() {
            assert!(self.nbs[v as usize].try_remove_neighbor(u));
        }
        self.num_edges -= nbs.num_of_neighbors() as NumEdges;
    }
}

test_graph_ops!(
    test_adj_array_undir,
    AdjArrayUndir,
    (GraphNew, AdjacencyList, GraphEdgeEditing, GraphValidation)
);

test_graph_ops!(
    test_adj_matrix_undir,
    AdjMatrixUndir,
    (GraphNew, AdjacencyList, GraphEdgeEditing, GraphValidation)
);

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;
    use crate::gens::GeneratorSubstructures;

    fn isolate_center_of_star<G>()
    where
        G: GraphNew + GraphEdgeEditing + GraphValidation,
    {
        let mut graph = G::new(6);
        graph.connect_star(0, 1..5);
        graph.add_edge(4, 5);

        graph.remove_edges_at_node(0);
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.degrees().collect_vec(), vec![0, 0, 0, 0, 1, 1]);
        assert!(graph.has_edge(4, 5));
        assert_eq!(graph.validate_graph(), Ok(()));

        // the cleared vertex can take new edges
        graph.add_edge(0, 5);
        assert_eq!(graph.ordered_neighbors_of(5), vec![0, 4]);
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn remove_edges_at_node() {
        isolate_center_of_star::<AdjArrayUndir>();
        isolate_center_of_star::<AdjMatrixUndir>();
    }
}
