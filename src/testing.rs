/// Runs the shared battery of graph tests against a concrete graph type with `usize` nodes.
///
/// Usage: `test_graph_ops!(module_name, GraphType<usize>, undirected, (Trait, ...));`
macro_rules! test_graph_ops {
    (@GraphNew $graph:ty, $undirected:literal) => {
        #[test]
        fn graph_new() {
            let graph = <$graph>::new();
            assert!(graph.is_empty());
            assert!(graph.is_singleton_graph());

            for n in 1..50 {
                let mut graph = <$graph>::with_capacity(n, 0);
                graph.insert_nodes(0..n);
                // repeated insertion is a no-op
                assert!(!graph.insert_node(0));

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.vertices().copied().sorted().collect_vec(), (0..n).collect_vec());
                assert!(graph.vertices().all(|u| graph.is_isolated(u)));
            }
        }
    };
    (@AdjacencyList $graph:ty, $undirected:literal) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub);
                        let adj_matrix = adjacency_matrix(n, &edges, $undirected);

                        let graph = <$graph>::from_nodes_and_edges(0..n, edges.clone());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len());
                        assert_eq!(
                            graph.edges().map(|e| sorted_endpoints(e, $undirected)).sorted().collect_vec(),
                            edges
                        );

                        for u in 0..n {
                            let expected = (0..n).filter(|&v| adj_matrix[u][v]).collect_vec();
                            assert_eq!(graph.neighbors_of(&u).copied().sorted().collect_vec(), expected);
                            assert_eq!(graph.degree_of(&u), expected.len());

                            for v in 0..n {
                                assert_eq!(graph.has_edge(&u, &v), adj_matrix[u][v]);
                            }

                            if $undirected {
                                assert_eq!(
                                    graph.in_neighbors_of(&u).copied().sorted().collect_vec(),
                                    expected
                                );
                            }
                        }

                        // unknown nodes have empty neighborhoods
                        assert_eq!(graph.neighbors_of(&n).count(), 0);
                        assert_eq!(graph.degree_of(&n), 0);
                    }
                }
            }
        }
    };
    (@DirectedAdjacencyList $graph:ty, $undirected:literal) => {
        #[test]
        fn test_directed_adjacency_list() {
            assert!(!$undirected);

            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub);
                        let adj_matrix = adjacency_matrix(n, &edges, false);

                        let graph = <$graph>::from_nodes_and_edges(0..n, edges);

                        for u in 0..n {
                            let expected = (0..n).filter(|&v| adj_matrix[v][u]).collect_vec();
                            assert_eq!(
                                graph.in_neighbors_of(&u).copied().sorted().collect_vec(),
                                expected
                            );
                            assert_eq!(graph.in_degree_of(&u), expected.len());
                            assert_eq!(
                                graph.total_degree_of(&u),
                                graph.out_degree_of(&u) + expected.len()
                            );
                        }

                        assert!(graph.sources().all(|u| (0..n).all(|v| !adj_matrix[v][*u])));
                        assert!(graph.sinks().all(|u| (0..n).all(|v| !adj_matrix[*u][v])));
                    }
                }
            }
        }
    };
    (@GraphEdgeEditing $graph:ty, $undirected:literal) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub);
                        let mut adj_matrix = adjacency_matrix(n, &edges, $undirected);

                        let mut graph = <$graph>::new();
                        graph.insert_nodes(0..n);

                        for &(u, v) in &edges {
                            assert!(graph.insert_edge(u, v));
                            assert!(!graph.insert_edge(u, v));
                            if $undirected {
                                assert!(!graph.insert_edge(v, u));
                            }
                        }

                        let rng = &mut Pcg64Mcg::seed_from_u64(4);

                        let mut m = graph.number_of_edges();
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            let present = adj_matrix[u][v];
                            assert_eq!(graph.remove_edge(&u, &v), present);

                            if present {
                                adj_matrix[u][v] = false;
                                if $undirected {
                                    adj_matrix[v][u] = false;
                                }
                                m -= 1;
                            }

                            assert_eq!(m, graph.number_of_edges());
                        }

                        for u in 0..n {
                            let degree = graph.degree_of(&u);
                            let removed = graph.remove_edges_at_node(&u);
                            assert!(removed >= degree);
                            m -= removed;
                            assert_eq!(m, graph.number_of_edges());
                        }

                        assert!(graph.is_singleton_graph());
                        assert_eq!(graph.number_of_nodes(), n);
                    }
                }
            }
        }
    };
    (@GraphRemoval $graph:ty, $undirected:literal) => {
        #[test]
        fn test_graph_removal() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [10 as NumNodes, 20, 50] {
                for _ in 0..10 {
                    let edges = random_edges(rng, n, 4 * n);
                    let mut graph = <$graph>::from_nodes_and_edges(0..n, edges.clone());

                    let removed = (0..n).filter(|_| rng.random_bool(0.3)).collect_vec();
                    graph.remove_nodes(removed.iter());

                    for u in &removed {
                        assert!(!graph.contains_node(u));
                        assert!(!graph.remove_node(u));
                    }

                    let remaining = edges
                        .iter()
                        .filter(|(u, v)| !removed.contains(u) && !removed.contains(v))
                        .copied()
                        .collect_vec();

                    assert_eq!(graph.number_of_nodes(), n - removed.len());
                    assert_eq!(
                        graph.edges().map(|e| sorted_endpoints(e, $undirected)).sorted().collect_vec(),
                        remaining
                    );

                    for u in graph.vertices() {
                        assert!(graph.neighbors_of(u).all(|v| graph.contains_node(v)));
                        assert!(graph.in_neighbors_of(u).all(|v| graph.contains_node(v)));
                    }
                }
            }
        }
    };
    ($env:ident, $graph:ty, $undirected:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{edge::*, node::*, ops::*, repr::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a sorted list of at most `m_ub` distinct random edges for nodes `0..n`.
            /// Undirected edges are normalized to `(min, max)`.
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<(NumNodes, NumNodes)> {
                (0..m_ub)
                    .map(|_| {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);

                        if $undirected {
                            (u.min(v), u.max(v))
                        } else {
                            (u, v)
                        }
                    })
                    .sorted_unstable()
                    .dedup()
                    .collect_vec()
            }

            fn adjacency_matrix(n: NumNodes, edges: &[(NumNodes, NumNodes)], undirected: bool) -> Vec<Vec<bool>> {
                let mut matrix = vec![vec![false; n]; n];
                for &(u, v) in edges {
                    matrix[u][v] = true;
                    if undirected {
                        matrix[v][u] = true;
                    }
                }
                matrix
            }

            fn sorted_endpoints<E: EdgePair<NumNodes>>(edge: &E, undirected: bool) -> (NumNodes, NumNodes) {
                let (&u, &v) = edge.endpoints();
                if undirected {
                    (u.min(v), u.max(v))
                } else {
                    (u, v)
                }
            }

            $(
                test_graph_ops!(@$trait $graph, $undirected);
            )*
        }
    };
}

pub(crate) use test_graph_ops;
