use std::{fs::File, io::BufReader, sync::Arc, thread};

use sapgraph::{Digraph, Sap, SapConfig, SapError, SapResult, bfs::brute_force_sap};

fn diamond() -> Sap {
    Sap::new(Digraph::from_edges(4, &[(0, 2), (1, 2), (2, 3)]).expect("graph"))
}

fn digraph1() -> Sap {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/digraph1.txt");
    let file = File::open(path).expect("fixture");
    Sap::new(Digraph::from_reader(BufReader::new(file)).expect("digraph"))
}

#[test]
fn test_diamond_shared_parent() {
    let sap = diamond();
    assert_eq!(sap.length(0, 1).unwrap(), Some(2));
    assert_eq!(sap.ancestor(0, 1).unwrap(), Some(2));
}

#[test]
fn test_diamond_path_to_root() {
    let sap = diamond();
    assert_eq!(sap.length(0, 3).unwrap(), Some(2));
    assert_eq!(sap.ancestor(0, 3).unwrap(), Some(3));
}

#[test]
fn test_self_distance_is_zero() {
    let sap = digraph1();
    for v in 0..13 {
        assert_eq!(sap.length(v, v).unwrap(), Some(0));
        assert_eq!(sap.ancestor(v, v).unwrap(), Some(v));
    }
}

#[test]
fn test_digraph1_known_pairs() {
    let sap = digraph1();
    assert_eq!(sap.length(3, 11).unwrap(), Some(4));
    assert_eq!(sap.ancestor(3, 11).unwrap(), Some(1));
    assert_eq!(sap.length(9, 12).unwrap(), Some(3));
    assert_eq!(sap.ancestor(9, 12).unwrap(), Some(5));
    assert_eq!(sap.length(7, 2).unwrap(), Some(4));
    assert_eq!(sap.ancestor(7, 2).unwrap(), Some(0));
}

#[test]
fn test_isolated_vertex_has_no_path() {
    let sap = digraph1();
    assert_eq!(sap.length(1, 6).unwrap(), None);
    assert_eq!(sap.ancestor(1, 6).unwrap(), None);
    assert_eq!(sap.query([1], [6]).unwrap().as_sentinel_pair(), (-1, -1));
}

#[test]
fn test_disconnected_roots_yield_no_path() {
    let sap = Sap::new(Digraph::from_edges(4, &[(0, 1), (2, 3)]).unwrap());
    assert_eq!(sap.query([1], [3]).unwrap(), SapResult::NoPath);
    assert_eq!(sap.query([0], [2]).unwrap(), SapResult::NoPath);
}

#[test]
fn test_set_queries_pick_best_members() {
    let sap = digraph1();
    assert_eq!(sap.length_between([3, 9], [12]).unwrap(), Some(3));
    assert_eq!(sap.ancestor_between([3, 9], [12]).unwrap(), Some(5));
    assert_eq!(sap.length_between([7, 4], [11]).unwrap(), Some(4));
    assert_eq!(sap.ancestor_between([7, 4], [11]).unwrap(), Some(1));
}

#[test]
fn test_overlapping_sets_have_zero_length() {
    let sap = digraph1();
    let result = sap.query([2, 8, 11], [11, 12]).unwrap();
    assert_eq!(
        result,
        SapResult::Found {
            length: 0,
            ancestor: 11
        }
    );
}

#[test]
fn test_duplicate_ids_collapse() {
    let sap = digraph1();
    assert_eq!(
        sap.query([9, 9, 9], [12, 12]).unwrap(),
        sap.query([9], [12]).unwrap()
    );
}

#[test]
fn test_queries_are_symmetric() {
    let sap = digraph1();
    for v in 0..13 {
        for w in 0..13 {
            assert_eq!(sap.length(v, w).unwrap(), sap.length(w, v).unwrap());
        }
    }
}

#[test]
fn test_out_of_range_vertex_is_invalid_input() {
    let sap = Sap::new(Digraph::from_edges(3, &[(0, 2), (1, 2)]).unwrap());
    let err = sap.length_between([5], [0]).unwrap_err();
    assert!(matches!(err, SapError::InvalidInput(_)), "{err:?}");
    assert!(sap.ancestor(0, 3).unwrap_err().is_invalid_input());
    assert_eq!(sap.cache_stats().misses, 0);
}

#[test]
fn test_invalid_id_rejected_even_with_empty_other_side() {
    let sap = diamond();
    let err = sap.query(Vec::new(), [9]).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_empty_set_short_circuits_to_no_path() {
    let sap = diamond();
    assert_eq!(sap.length_between(Vec::new(), [0]).unwrap(), None);
    assert_eq!(sap.ancestor_between([1], Vec::new()).unwrap(), None);
    let stats = sap.cache_stats();
    assert_eq!(stats.hits + stats.misses, 0);
}

#[test]
fn test_reversed_query_hits_cache() {
    let sap = digraph1();
    let first = sap.query([3, 7], [11]).unwrap();
    let second = sap.query([11], [7, 3]).unwrap();
    assert_eq!(first, second);
    let stats = sap.cache_stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 1);
}

#[test]
fn test_zero_capacity_recomputes_every_time() {
    let graph = Arc::new(Digraph::from_edges(4, &[(0, 2), (1, 2), (2, 3)]).unwrap());
    let sap = Sap::with_config(graph, &SapConfig::default().with_cache_capacity(0));
    for _ in 0..3 {
        assert_eq!(sap.length(0, 1).unwrap(), Some(2));
    }
    let stats = sap.cache_stats();
    assert_eq!(stats.misses, 3);
    assert_eq!(stats.hits, 0);
    assert_eq!(sap.cache_capacity(), 0);
}

#[test]
fn test_clear_cache_forces_recompute() {
    let sap = diamond();
    sap.length(0, 1).unwrap();
    sap.clear_cache();
    sap.length(0, 1).unwrap();
    assert_eq!(sap.cache_stats().misses, 2);
}

#[test]
fn test_workspace_reuse_does_not_leak_between_queries() {
    let sap = Sap::with_config(
        Arc::new(
            Digraph::from_edges(13, &[(7, 3), (8, 3), (3, 1), (4, 1), (5, 1), (9, 5), (10, 5), (11, 10), (12, 10), (1, 0), (2, 0)])
                .unwrap(),
        ),
        &SapConfig::default().with_cache_capacity(0),
    );
    let graph = sap.graph().clone();
    for v in 0..13 {
        for w in (0..13).rev() {
            assert_eq!(
                sap.query([v], [w]).unwrap().length(),
                brute_force_sap(&graph, &[v], &[w]).length(),
                "pair {v},{w}"
            );
        }
    }
}

#[test]
fn test_shared_across_threads() {
    let sap = Arc::new(digraph1());
    let graph = sap.graph().clone();
    let handles: Vec<_> = (0..4)
        .map(|offset| {
            let sap = Arc::clone(&sap);
            thread::spawn(move || {
                let mut lengths = Vec::new();
                for v in 0..13 {
                    lengths.push(((v + offset) % 13, v, sap.length((v + offset) % 13, v).unwrap()));
                }
                lengths
            })
        })
        .collect();
    for handle in handles {
        for (v, w, length) in handle.join().expect("thread") {
            assert_eq!(length, brute_force_sap(&graph, &[v], &[w]).length());
        }
    }
}
