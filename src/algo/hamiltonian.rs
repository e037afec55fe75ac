/*!
# Hamiltonian Paths

Deciding whether a graph has a Hamiltonian path or cycle is NP-complete. This module offers two
cheap sufficient conditions (Dirac and Ore) and an exhaustive search that is only attempted for
small graphs, see [`HamiltonianSearch`].
*/

use itertools::Itertools;
use tracing::{debug, trace};

use super::*;

/// Graphs with more vertices are rejected by [`Hamiltonian::find_hamiltonian_path`]
pub const DEFAULT_MAX_SEARCH_VERTICES: NumNodes = 8;

pub trait Hamiltonian: StaticGraph + Sized {
    /// Validates the graph and evaluates Dirac's and Ore's conditions.
    /// Both are always evaluated, even if the first one already holds.
    fn analyze_hamiltonian(&self) -> Result<HamiltonianReport> {
        self.validate_graph()?;

        let n = self.number_of_nodes();
        let min_degree = self.min_degree();

        let (dirac, ore, ore_violation) = if n < 3 {
            (false, false, None)
        } else {
            // min_degree >= n / 2 without rounding
            let dirac = 2 * min_degree as u64 >= n as u64;
            let ore_violation = self.first_ore_violation();
            (dirac, ore_violation.is_none(), ore_violation)
        };

        debug!(n, min_degree, dirac, ore, "hamiltonian conditions analyzed");

        Ok(HamiltonianReport::new(
            n,
            min_degree,
            dirac,
            ore,
            ore_violation,
        ))
    }

    /// Returns the lexicographically first pair `u < v` of non-adjacent vertices with
    /// `deg(u) + deg(v) < n`, if any
    fn first_ore_violation(&self) -> Option<(Node, Node)> {
        let n = self.number_of_nodes() as u64;
        self.vertices_range()
            .tuple_combinations()
            .find(|&(u, v)| {
                !self.has_edge(u, v) && (self.degree_of(u) as u64 + self.degree_of(v) as u64) < n
            })
    }

    /// Searches a Hamiltonian cycle, or a Hamiltonian path if no cycle exists, on graphs with at
    /// most [`DEFAULT_MAX_SEARCH_VERTICES`] vertices
    fn find_hamiltonian_path(&self) -> Result<HamiltonianWitness> {
        HamiltonianSearch::new(self).run()
    }

    /// Same as [`Hamiltonian::find_hamiltonian_path`] with a custom bound on the number of vertices
    fn find_hamiltonian_path_bounded(&self, max_vertices: NumNodes) -> Result<HamiltonianWitness> {
        HamiltonianSearch::new(self).max_vertices(max_vertices).run()
    }
}

impl<G: StaticGraph> Hamiltonian for G {}

/// Exhaustive search for Hamiltonian cycles and paths.
///
/// All orderings of the vertices are enumerated in lexicographic order. The first ordering that
/// is a closed walk is returned as a cycle; only if there is none, the first ordering that is a
/// walk is returned as a path. Two adjacent vertices thus form the cycle `[0, 1, 0]`.
///
/// As this takes factorial time, graphs with more than `max_vertices` vertices are not searched
/// at all and yield [`HamiltonianWitness::SearchBoundExceeded`].
///
/// # Example
/// ```rust
/// use graphprops::{prelude::*, algo::*};
///
/// let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
/// let witness = HamiltonianSearch::new(&graph).max_vertices(4).run().unwrap();
/// assert_eq!(witness, HamiltonianWitness::Path(vec![0, 1, 2, 3]));
/// ```
pub struct HamiltonianSearch<'a, G>
where
    G: StaticGraph,
{
    graph: &'a G,
    max_vertices: NumNodes,
}

impl<'a, G> HamiltonianSearch<'a, G>
where
    G: StaticGraph,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            max_vertices: DEFAULT_MAX_SEARCH_VERTICES,
        }
    }

    /// Graphs with more than `max_vertices` vertices are not searched
    pub fn set_max_vertices(&mut self, max_vertices: NumNodes) {
        self.max_vertices = max_vertices;
    }

    pub fn max_vertices(mut self, max_vertices: NumNodes) -> Self {
        self.set_max_vertices(max_vertices);
        self
    }

    /// Validates the graph and runs the search
    pub fn run(&self) -> Result<HamiltonianWitness> {
        self.graph.validate_graph()?;

        let n = self.graph.number_of_nodes();
        if n > self.max_vertices {
            debug!(n, max_vertices = self.max_vertices, "hamiltonian search bound exceeded");
            return Ok(HamiltonianWitness::SearchBoundExceeded {
                vertex_count: n,
                max_vertices: self.max_vertices,
            });
        }

        if n == 0 {
            return Ok(HamiltonianWitness::Path(Vec::new()));
        }

        let witness = if let Some(cycle) = self.find_cycle() {
            HamiltonianWitness::Cycle(cycle)
        } else if let Some(path) = self.find_path() {
            HamiltonianWitness::Path(path)
        } else {
            HamiltonianWitness::NotFound
        };

        debug!(
            n,
            found_cycle = witness.is_cycle(),
            found = witness.path().is_some(),
            "hamiltonian search finished"
        );

        Ok(witness)
    }

    fn orderings(&self) -> impl Iterator<Item = Vec<Node>> + '_ {
        self.graph
            .vertices_range()
            .permutations(self.graph.len())
    }

    /// A single vertex never closes a cycle since loops are no edges
    fn find_cycle(&self) -> Option<Vec<Node>> {
        trace!("searching hamiltonian cycle");
        let mut cycle = self.orderings().find(|order| {
            self.graph.is_walk(order)
                && order
                    .first()
                    .zip(order.last())
                    .is_some_and(|(&first, &last)| self.graph.has_edge(last, first))
        })?;

        cycle.push(cycle[0]);
        Some(cycle)
    }

    fn find_path(&self) -> Option<Vec<Node>> {
        trace!("searching hamiltonian path");
        self.orderings().find(|order| self.graph.is_walk(order))
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{
        gens::{GeneratorSubstructures, RandomGraph},
        testing::init_tracing,
    };

    /// Asserts that `cycle` is a closed walk visiting every vertex exactly once
    fn assert_hamiltonian_cycle<G: StaticGraph>(graph: &G, cycle: &[Node]) {
        assert_eq!(cycle.len(), graph.len() + 1);
        assert_eq!(cycle.first(), cycle.last());
        assert!(graph.is_walk(cycle));

        let mut inner = cycle[1..].to_vec();
        inner.sort_unstable();
        assert_eq!(inner, graph.vertices().collect_vec());
    }

    #[test]
    fn four_cycle() {
        init_tracing();

        let mut graph = AdjArrayUndir::new(4);
        graph.connect_cycle(0..4);

        let report = graph.analyze_hamiltonian().unwrap();
        assert_eq!(report.vertex_count, 4);
        assert_eq!(report.min_degree, 2);
        assert!(report.dirac_satisfied);
        assert!(report.ore_satisfied);
        assert!(report.guarantees_cycle());

        assert_eq!(
            graph.find_hamiltonian_path().unwrap(),
            HamiltonianWitness::Cycle(vec![0, 1, 2, 3, 0])
        );
    }

    #[test]
    fn complete_graph_on_five() {
        let mut graph = AdjMatrixUndir::new(5);
        graph.connect_clique(&[0, 1, 2, 3, 4]);

        let report = graph.analyze_hamiltonian().unwrap();
        assert_eq!(report.min_degree, 4);
        assert!(report.dirac_satisfied);
        assert!(report.ore_satisfied);
        assert_eq!(report.ore_violation, None);
        assert!(report.explanation.contains("degree >= 2.5"));

        let witness = graph.find_hamiltonian_path().unwrap();
        assert_eq!(witness, HamiltonianWitness::Cycle(vec![0, 1, 2, 3, 4, 0]));
    }

    #[test]
    fn star_has_no_path() {
        let mut graph = AdjArrayUndir::new(5);
        graph.connect_star(0, 1..5);

        let report = graph.analyze_hamiltonian().unwrap();
        assert!(!report.dirac_satisfied);
        assert!(!report.ore_satisfied);
        assert_eq!(report.ore_violation, Some((1, 2)));
        assert!(report.explanation.contains("1 and 2"));

        assert_eq!(
            graph.find_hamiltonian_path().unwrap(),
            HamiltonianWitness::NotFound
        );
    }

    #[test]
    fn two_disjoint_edges() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (2, 3)]);
        assert_eq!(
            graph.find_hamiltonian_path().unwrap(),
            HamiltonianWitness::NotFound
        );
    }

    #[test]
    fn path_without_cycle() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 2), (2, 1), (1, 3)]);
        assert_eq!(
            graph.find_hamiltonian_path().unwrap(),
            HamiltonianWitness::Path(vec![0, 2, 1, 3])
        );
    }

    #[test]
    fn small_graphs() {
        for n in 0..3 {
            let report = AdjArrayUndir::new(n).analyze_hamiltonian().unwrap();
            assert!(!report.dirac_satisfied);
            assert!(!report.ore_satisfied);
            assert!(!report.guarantees_cycle());
        }

        assert_eq!(
            AdjArrayUndir::new(0).find_hamiltonian_path().unwrap(),
            HamiltonianWitness::Path(vec![])
        );
        assert_eq!(
            AdjArrayUndir::new(1).find_hamiltonian_path().unwrap(),
            HamiltonianWitness::Path(vec![0])
        );

        // the wraparound pair of two adjacent vertices is their edge
        let single_edge = AdjArrayUndir::from_edges(2, [(0, 1)]);
        let witness = single_edge.find_hamiltonian_path().unwrap();
        assert_eq!(witness, HamiltonianWitness::Cycle(vec![0, 1, 0]));
        assert_hamiltonian_cycle(&single_edge, witness.path().unwrap());

        assert_eq!(
            AdjArrayUndir::new(2).find_hamiltonian_path().unwrap(),
            HamiltonianWitness::NotFound
        );
    }

    #[test]
    fn search_bound() {
        let mut graph = AdjArrayUndir::new(9);
        graph.connect_cycle(0..9);

        assert_eq!(
            graph.find_hamiltonian_path().unwrap(),
            HamiltonianWitness::SearchBoundExceeded {
                vertex_count: 9,
                max_vertices: 8
            }
        );

        let witness = graph.find_hamiltonian_path_bounded(9).unwrap();
        assert_eq!(witness.path(), Some(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 0][..]));

        let mut search = HamiltonianSearch::new(&graph);
        search.set_max_vertices(3);
        assert!(matches!(
            search.run().unwrap(),
            HamiltonianWitness::SearchBoundExceeded { max_vertices: 3, .. }
        ));
    }

    #[test]
    fn random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);

        for i in 0..100 {
            let n = 3 + i % 5;
            let graph = AdjArrayUndir::gnp(rng, n, 0.6);
            let report = graph.analyze_hamiltonian().unwrap();
            let witness = graph.find_hamiltonian_path().unwrap();

            if report.guarantees_cycle() {
                assert!(witness.is_cycle());
            }

            match witness {
                HamiltonianWitness::Cycle(cycle) => assert_hamiltonian_cycle(&graph, &cycle),
                HamiltonianWitness::Path(path) => {
                    assert_eq!(path.len(), n as usize);
                    assert!(graph.is_walk(&path));
                    assert!(path.iter().all_unique());
                }
                HamiltonianWitness::NotFound => assert!(!graph.is_connected() || n > 3),
                HamiltonianWitness::SearchBoundExceeded { .. } => unreachable!(),
            }
        }
    }
}
