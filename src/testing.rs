/// Installs a `tracing` subscriber for tests; honors `RUST_LOG` and is a no-op when called twice
#[cfg(test)]
pub(crate) fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Every graph representation should pass the same suite of structural tests
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of at most `m_ub` random normalized loop-free edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub).filter_map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    (u != v).then(|| Edge(u, v).normalized())
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            /// Dense reference adjacency matrix
            fn reference_matrix(n: NumNodes, edges: &[Edge]) -> Vec<Vec<bool>> {
                let mut matrix = vec![vec![false; n as usize]; n as usize];
                for &Edge(u, v) in edges {
                    matrix[u as usize][v as usize] = true;
                    matrix[v as usize][u as usize] = true;
                }
                matrix
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.is_empty(), n == 0);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert_eq!(graph.min_degree(), 0);
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let matrix = reference_matrix(n, &edges);

                        // insert every edge twice and reversed; duplicates must be merged
                        let graph = <$graph>::try_from_edges(
                            n,
                            edges.iter().map(|e| e.reverse()).chain(edges.iter().copied()),
                        )
                        .unwrap();

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(edges, graph.ordered_edges(true));

                        for u in 0..n {
                            let expected = (0..n)
                                .filter(|&v| matrix[u as usize][v as usize])
                                .collect_vec();
                            assert_eq!(graph.neighbors_of(u).collect_vec(), expected);
                            assert_eq!(graph.ordered_neighbors_of(u), expected);
                            assert_eq!(graph.degree_of(u), expected.len() as NumNodes);

                            for v in 0..n {
                                assert_eq!(graph.has_edge(u, v), matrix[u as usize][v as usize]);
                            }
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut graph = <$graph>::new(n);
                        let mut matrix = reference_matrix(n, &[]);

                        for &Edge(u, v) in &edges {
                            assert!(!graph.try_add_edge(v, u));
                            assert!(graph.try_add_edge(u, v));
                            matrix[u as usize][v as usize] = true;
                            matrix[v as usize][u as usize] = true;
                        }

                        let rng = &mut Pcg64Mcg::seed_from_u64(4);

                        let mut m = graph.number_of_edges();
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            if matrix[u as usize][v as usize] {
                                matrix[u as usize][v as usize] = false;
                                matrix[v as usize][u as usize] = false;
                                assert!(graph.try_remove_edge(u, v));
                                assert!(!graph.has_edge(v, u));
                                m -= 1;
                            } else {
                                assert!(!graph.try_remove_edge(u, v));
                            }

                            assert_eq!(m, graph.number_of_edges());
                        }

                        for u in 0..n {
                            m -= graph.degree_of(u);
                            graph.remove_edges_at_node(u);
                            assert_eq!(graph.degree_of(u), 0);
                            assert_eq!(m, graph.number_of_edges());
                        }
                        assert!(graph.is_singleton_graph());
                    }
                }
            }
        }
    };
    ($graph:ident: GraphValidation) => {
        #[test]
        fn test_graph_validation() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [1 as NumNodes, 10, 30] {
                let edges = random_edges(rng, n, n * 3);
                let graph = <$graph>::from_edges(n, edges.iter());
                assert_eq!(graph.validate_graph(), Ok(()));
            }

            assert_eq!(
                <$graph>::try_from_edges(3, [(0, 1), (1, 3)]).map(|g| g.number_of_edges()),
                Err(InvalidGraphError::UnknownVertex { edge: Edge(1, 3), vertex: 3, num_nodes: 3 })
            );
            assert_eq!(
                <$graph>::try_from_edges(3, [(0, 1), (2, 2)]).map(|g| g.number_of_edges()),
                Err(InvalidGraphError::SelfLoop { node: 2 })
            );
        }
    };
}

pub(crate) use test_graph_ops;
