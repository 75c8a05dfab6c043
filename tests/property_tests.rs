use std::sync::Arc;

use proptest::prelude::*;
use sapgraph::{
    Digraph, Sap, SapConfig, SapResult,
    bench_utils::{HierarchyShape, generate_hierarchy},
    bfs::{bfs_distances, brute_force_sap},
};

/// Arbitrary graphs, including cycles and self loops, with two vertex sets.
fn graph_and_sets() -> impl Strategy<Value = (Digraph, Vec<usize>, Vec<usize>)> {
    (2usize..40).prop_flat_map(|n| {
        (
            prop::collection::vec((0..n, 0..n), 0..n * 2),
            prop::collection::vec(0..n, 1..4),
            prop::collection::vec(0..n, 1..4),
        )
            .prop_map(move |(edges, a, b)| {
                (Digraph::from_edges(n, &edges).expect("edges in range"), a, b)
            })
    })
}

fn assert_valid_witness(graph: &Digraph, a: &[usize], b: &[usize], result: SapResult) {
    if let SapResult::Found { length, ancestor } = result {
        let from_a = bfs_distances(graph, a);
        let from_b = bfs_distances(graph, b);
        let total = from_a[ancestor].zip(from_b[ancestor]).map(|(x, y)| x + y);
        assert_eq!(total, Some(length), "ancestor {ancestor} is not a witness");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_matches_brute_force((graph, a, b) in graph_and_sets()) {
        let expected = brute_force_sap(&graph, &a, &b);
        let sap = Sap::new(graph.clone());
        let actual = sap.query(a.iter().copied(), b.iter().copied()).unwrap();
        prop_assert_eq!(actual.length(), expected.length());
        assert_valid_witness(&graph, &a, &b, actual);
    }

    #[test]
    fn prop_symmetric_lengths((graph, a, b) in graph_and_sets()) {
        let uncached = SapConfig::default().with_cache_capacity(0);
        let sap = Sap::with_config(Arc::new(graph), &uncached);
        let forward = sap.query(a.iter().copied(), b.iter().copied()).unwrap();
        let backward = sap.query(b.iter().copied(), a.iter().copied()).unwrap();
        prop_assert_eq!(forward.length(), backward.length());
    }

    #[test]
    fn prop_self_distance_zero(n in 1usize..64, seed in any::<u64>(), pick in any::<prop::sample::Index>()) {
        let graph = generate_hierarchy(HierarchyShape::RandomDag { max_parents: 3 }, n, seed);
        let v = pick.index(n);
        let sap = Sap::new(graph);
        prop_assert_eq!(sap.length(v, v).unwrap(), Some(0));
        prop_assert_eq!(sap.ancestor(v, v).unwrap(), Some(v));
    }

    #[test]
    fn prop_rooted_hierarchy_always_connected(
        n in 2usize..80,
        seed in any::<u64>(),
        pairs in prop::collection::vec((any::<prop::sample::Index>(), any::<prop::sample::Index>()), 1..20),
    ) {
        let graph = generate_hierarchy(HierarchyShape::RandomDag { max_parents: 3 }, n, seed);
        let sap = Sap::with_config(Arc::new(graph.clone()), &SapConfig::default().with_cache_capacity(4));
        for (x, y) in pairs {
            let (v, w) = (x.index(n), y.index(n));
            let result = sap.query([v], [w]).unwrap();
            prop_assert!(result.is_found());
            prop_assert_eq!(result.length(), brute_force_sap(&graph, &[v], &[w]).length());
            assert_valid_witness(&graph, &[v], &[w], result);
        }
    }

    #[test]
    fn prop_cache_is_transparent(
        (graph, a, b) in graph_and_sets(),
        other in prop::collection::vec(0usize..2, 1..3),
    ) {
        let sap = Sap::new(graph);
        let before_other = sap.query(other.iter().copied(), b.iter().copied()).unwrap();
        let first = sap.query(a.iter().copied(), b.iter().copied()).unwrap();
        let repeat = sap.query(b.iter().copied(), a.iter().copied()).unwrap();
        prop_assert_eq!(first, repeat);
        let after_other = sap.query(other.iter().copied(), b.iter().copied()).unwrap();
        prop_assert_eq!(before_other, after_other);
    }
}
