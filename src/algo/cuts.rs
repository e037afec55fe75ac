use super::*;

/// Cut vertices and cut edges of an undirected graph
pub trait CutStructures: AdjacencyList + Sized {
    /// Returns all articulation points in ascending order.
    /// A vertex is an articulation point if removing it increases the number of components.
    fn articulation_points(&self) -> Vec<Node> {
        CutSearch::new(self).compute().articulation_points
    }

    /// Returns all bridges, normalized and in ascending order.
    /// An edge is a bridge if removing it increases the number of components.
    fn bridges(&self) -> Vec<Edge> {
        CutSearch::new(self).compute().bridges
    }
}

impl<G: AdjacencyList> CutStructures for G {}

/// Articulation points and bridges found by a [`CutSearch`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cuts {
    pub articulation_points: Vec<Node>,
    pub bridges: Vec<Edge>,
}

/// Computes articulation points and bridges in a single depth-first search per component using
/// discovery times and low links.
///
/// The search is iterative: every simulated recursive call is an explicit [`StackFrame`], so
/// long paths do not overflow the call stack. Neighbors are explored in ascending order.
pub struct CutSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    nodes_info: Vec<NodeInfo>,
    time: Node,
    is_articulation_point: NodeBitSet,
    bridges: Vec<Edge>,
    call_stack: Vec<StackFrame>,
}

impl<'a, G> CutSearch<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            nodes_info: vec![NodeInfo::default(); graph.len()],
            time: 0,
            is_articulation_point: graph.vertex_bitset_unset(),
            bridges: Vec::new(),
            call_stack: Vec::with_capacity(32),
        }
    }

    pub fn compute(mut self) -> Cuts {
        for root in self.graph.vertices_range() {
            if self.nodes_info[root as usize].is_visited() || self.graph.is_singleton(root) {
                continue;
            }

            let tree_children = self.search_from(root);
            if tree_children > 1 {
                self.is_articulation_point.insert(root as usize);
            }
        }

        self.bridges.sort_unstable();
        Cuts {
            articulation_points: self
                .is_articulation_point
                .ones()
                .map(|u| u as Node)
                .collect(),
            bridges: self.bridges,
        }
    }

    fn push_node(&mut self, node: Node, parent: Option<Node>) {
        self.time += 1;
        self.nodes_info[node as usize] = NodeInfo {
            discovery: self.time,
            low: self.time,
        };

        self.call_stack.push(StackFrame {
            node,
            parent: parent.and_then(OptionalNode::new),
            neighbors: self.graph.ordered_neighbors_of(node),
            next: 0,
        });
    }

    /// Runs the search on the component of `root` and returns the number of tree children of
    /// `root`. The root is an articulation point iff it has more than one.
    fn search_from(&mut self, root: Node) -> usize {
        let mut root_children = 0;
        self.push_node(root, None);

        'recurse: while let Some(frame) = self.call_stack.last_mut() {
            let u = frame.node;

            while frame.next < frame.neighbors.len() {
                let v = frame.neighbors[frame.next];
                frame.next += 1;

                if !self.nodes_info[v as usize].is_visited() {
                    if u == root {
                        root_children += 1;
                    }
                    self.push_node(v, Some(u));
                    continue 'recurse;
                }

                // the tree edge to the parent is no back edge; parallel edges do not exist
                if frame.parent.map(|p| p.get()) != Some(v) {
                    let v_disc = self.nodes_info[v as usize].discovery;
                    self.nodes_info[u as usize].update_low(v_disc);
                }
            }

            let frame = self.call_stack.pop();
            let Some(parent) = frame.and_then(|f| f.parent).map(|p| p.get()) else {
                continue;
            };

            let info_u = self.nodes_info[u as usize];
            self.nodes_info[parent as usize].update_low(info_u.low);

            let info_parent = self.nodes_info[parent as usize];
            if info_u.low > info_parent.discovery {
                self.bridges.push(Edge(parent, u).normalized());
            }
            if parent != root && info_u.low >= info_parent.discovery {
                self.is_articulation_point.insert(parent as usize);
            }
        }

        root_children
    }
}

#[derive(Debug, Clone)]
struct StackFrame {
    node: Node,
    parent: Option<OptionalNode>,
    neighbors: Vec<Node>,
    next: usize,
}

/// Discovery time `0` marks unvisited nodes
#[derive(Debug, Clone, Copy, Default)]
struct NodeInfo {
    discovery: Node,
    low: Node,
}

impl NodeInfo {
    fn is_visited(&self) -> bool {
        self.discovery > 0
    }

    fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::{GeneratorSubstructures, RandomGraph};

    #[test]
    fn cuts_in_path() {
        for n in [1, 2, 5, 10, 15] {
            let mut graph = AdjArrayUndir::new(n);
            graph.connect_path(0..n);

            assert_eq!(graph.bridges(), graph.ordered_edges(true));
            assert_eq!(
                graph.articulation_points(),
                (1..n.saturating_sub(1)).collect_vec()
            );
        }
    }

    #[test]
    fn cuts_in_example() {
        let mut graph = AdjArrayUndir::new(6);
        graph.add_edges([(0, 1), (0, 2), (2, 1), (1, 3), (3, 4), (4, 5), (5, 3)]);

        assert_eq!(graph.bridges(), vec![Edge(1, 3)]);
        assert_eq!(graph.articulation_points(), vec![1, 3]);
    }

    #[test]
    fn star_center_is_cut_vertex() {
        let mut graph = AdjMatrixUndir::new(5);
        graph.connect_star(0, 1..5);

        let cuts = CutSearch::new(&graph).compute();
        assert_eq!(cuts.articulation_points, vec![0]);
        assert_eq!(cuts.bridges.len(), 4);
    }

    #[test]
    fn cycle_and_clique_have_no_cuts() {
        let mut graph = AdjArrayUndir::new(10);
        graph.connect_cycle(0..5);
        graph.connect_clique(&(5..10).collect_vec());

        let cuts = CutSearch::new(&graph).compute();
        assert_eq!(cuts, Cuts::default());
    }

    #[test]
    fn long_path() {
        let n = 20_000;
        let mut graph = AdjArrayUndir::new(n);
        graph.connect_path(0..n);

        assert_eq!(graph.articulation_points().len(), n as usize - 2);
        assert_eq!(graph.bridges().len(), n as usize - 1);
    }

    /// Removes a vertex/edge and counts components the slow way
    #[test]
    fn cuts_match_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..50 {
            let n = 12;
            let graph = AdjArrayUndir::gnp(rng, n, 0.2);
            let components = graph.connected_components().count();
            let cuts = CutSearch::new(&graph).compute();

            for u in graph.vertices_range() {
                let mut without = graph.clone();
                without.remove_edges_at_node(u);
                // `u` becomes isolated and forms its own component
                let expected = without.connected_components().count() - 1 > components;
                assert_eq!(cuts.articulation_points.contains(&u), expected, "vertex {u}");
            }

            for edge in graph.ordered_edges(true) {
                let mut without = graph.clone();
                without.remove_edge(edge.0, edge.1);
                let expected = without.connected_components().count() > components;
                assert_eq!(cuts.bridges.contains(&edge), expected, "edge {edge}");
            }
        }
    }
}
