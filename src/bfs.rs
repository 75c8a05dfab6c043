use std::collections::VecDeque;

use crate::{
    engine::SapResult,
    graph::{Digraph, VertexId},
};

/// Multi-source BFS following edges forward. `None` marks unreachable
/// vertices. Out-of-range seeds are ignored.
pub fn bfs_distances(graph: &Digraph, sources: &[VertexId]) -> Vec<Option<usize>> {
    let mut distance = vec![None; graph.vertex_count()];
    let mut queue = VecDeque::new();
    for &seed in sources {
        if graph.contains(seed) && distance[seed].is_none() {
            distance[seed] = Some(0);
            queue.push_back(seed);
        }
    }
    while let Some(node) = queue.pop_front() {
        let next_distance = distance[node].map_or(0, |d| d + 1);
        for &next in graph.neighbors(node) {
            if distance[next].is_none() {
                distance[next] = Some(next_distance);
                queue.push_back(next);
            }
        }
    }
    distance
}

/// Exhaustive shortest ancestral path: runs a full BFS from each side and
/// scans every vertex. Ties go to the smallest ancestor id.
pub fn brute_force_sap(graph: &Digraph, sources: &[VertexId], targets: &[VertexId]) -> SapResult {
    let from_sources = bfs_distances(graph, sources);
    let from_targets = bfs_distances(graph, targets);
    let mut best: Option<(usize, VertexId)> = None;
    for (v, (a, b)) in from_sources.iter().zip(from_targets.iter()).enumerate() {
        if let (Some(a), Some(b)) = (a, b) {
            let total = a + b;
            if best.is_none_or(|(length, _)| total < length) {
                best = Some((total, v));
            }
        }
    }
    match best {
        Some((length, ancestor)) => SapResult::Found { length, ancestor },
        None => SapResult::NoPath,
    }
}
