/// Every representation should conform to the `ops` traits against a reference model
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, Edge, Node, NumNodes, Weight};
            use fxhash::FxHashMap;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates `m` random weighted edges for nodes `0..n`. Duplicate `(u, v)` pairs
            /// are kept so overwrite semantics get exercised.
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: usize) -> Vec<Edge> {
                (0..m)
                    .map(|_| {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        let w: Weight = rng.random_range(1..100);
                        Edge(u, v, w)
                    })
                    .collect_vec()
            }

            #[test]
            fn graph_new() {
                for n in 1..50 {
                    let graph = <$graph>::new(n);

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);

                    assert_eq!(graph.vertices_range().len(), n as usize);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                }
            }

            #[test]
            fn add_node_grows_graph() {
                let mut graph = <$graph>::new(0);
                assert!(graph.is_empty());

                for i in 0..10 {
                    let u = graph.add_node();
                    assert_eq!(u, i);
                    assert_eq!(graph.degree_of(u), 0);
                }

                assert_eq!(graph.number_of_nodes(), 10);
                assert_eq!(graph.number_of_edges(), 0);
            }

            #[test]
            fn set_edge_matches_reference_model() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as NumNodes, 20, 50] {
                    for m in [n * 2, n * 5, n * 10] {
                        let mut graph = <$graph>::new(n);
                        let mut model: Vec<FxHashMap<Node, Weight>> =
                            vec![FxHashMap::default(); n as usize];

                        for Edge(u, v, w) in random_edges(rng, n, m as usize) {
                            assert_eq!(graph.set_edge(u, v, w), model[u as usize].insert(v, w));
                        }

                        let m_distinct: usize = model.iter().map(|nbs| nbs.len()).sum();
                        assert_eq!(graph.number_of_edges() as usize, m_distinct);

                        for u in 0..n {
                            assert_eq!(graph.degree_of(u) as usize, model[u as usize].len());

                            for v in 0..n {
                                assert_eq!(
                                    graph.weight_of(u, v),
                                    model[u as usize].get(&v).copied()
                                );
                                assert_eq!(
                                    graph.has_edge(u, v),
                                    model[u as usize].contains_key(&v)
                                );
                            }

                            assert_eq!(
                                graph.neighbors_of(u).sorted().collect_vec(),
                                model[u as usize]
                                    .iter()
                                    .map(|(&v, &w)| (v, w))
                                    .sorted()
                                    .collect_vec()
                            );
                        }
                    }
                }
            }

            #[test]
            fn from_edges_conformance() {
                let rng = &mut Pcg64Mcg::seed_from_u64(7);

                for n in [5 as NumNodes, 25] {
                    let edges = random_edges(rng, n, (n * 4) as usize);
                    let graph = <$graph>::from_edges(n, edges.iter());

                    let mut model: Vec<FxHashMap<Node, Weight>> =
                        vec![FxHashMap::default(); n as usize];
                    for &Edge(u, v, w) in &edges {
                        model[u as usize].insert(v, w);
                    }

                    let mut expected = model
                        .iter()
                        .enumerate()
                        .flat_map(|(u, nbs)| {
                            nbs.iter().map(move |(&v, &w)| Edge(u as Node, v, w))
                        })
                        .collect_vec();
                    expected.sort_unstable();

                    assert_eq!(graph.edges().sorted().collect_vec(), expected);
                    assert_eq!(
                        graph.total_weight(),
                        expected.iter().map(|e| e.weight()).sum::<Weight>()
                    );
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
