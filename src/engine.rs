//! Two-sided breadth-first search for shortest ancestral paths.
//!
//! Both frontiers walk edges forward (towards more general synsets). A vertex
//! that has been reached by both sides is a common ancestor; the search keeps
//! the one with the smallest combined distance and stops expanding vertices
//! that are already at least that far from their own seeds.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::graph::{Digraph, VertexId};

pub const NO_PATH_SENTINEL: i64 = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SapResult {
    Found { length: usize, ancestor: VertexId },
    NoPath,
}

impl SapResult {
    pub fn length(&self) -> Option<usize> {
        match self {
            SapResult::Found { length, .. } => Some(*length),
            SapResult::NoPath => None,
        }
    }

    pub fn ancestor(&self) -> Option<VertexId> {
        match self {
            SapResult::Found { ancestor, .. } => Some(*ancestor),
            SapResult::NoPath => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SapResult::Found { .. })
    }

    pub fn length_or_sentinel(&self) -> i64 {
        self.length().map_or(NO_PATH_SENTINEL, |l| l as i64)
    }

    pub fn ancestor_or_sentinel(&self) -> i64 {
        self.ancestor().map_or(NO_PATH_SENTINEL, |a| a as i64)
    }

    /// `(length, ancestor)` with `-1` in both slots when there is no path.
    pub fn as_sentinel_pair(&self) -> (i64, i64) {
        (self.length_or_sentinel(), self.ancestor_or_sentinel())
    }
}

#[derive(Debug, Clone)]
struct Side {
    marked: Vec<bool>,
    distance: Vec<usize>,
    touched: Vec<VertexId>,
    queue: VecDeque<VertexId>,
}

impl Side {
    fn new(vertex_count: usize) -> Self {
        Self {
            marked: vec![false; vertex_count],
            distance: vec![usize::MAX; vertex_count],
            touched: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    fn reset(&mut self) {
        for v in self.touched.drain(..) {
            self.marked[v] = false;
            self.distance[v] = usize::MAX;
        }
        self.queue.clear();
    }

    fn visit(&mut self, v: VertexId, distance: usize) {
        self.marked[v] = true;
        self.distance[v] = distance;
        self.touched.push(v);
        self.queue.push_back(v);
    }

    fn seed(&mut self, seeds: &[VertexId]) {
        for &v in seeds {
            if !self.marked[v] {
                self.visit(v, 0);
            }
        }
    }
}

/// Reusable scratch memory for [`shortest_ancestral_path`].
///
/// Sized once for a graph; each search clears only the cells the previous
/// search touched.
#[derive(Debug, Clone)]
pub struct SearchWorkspace {
    sources: Side,
    targets: Side,
}

impl SearchWorkspace {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            sources: Side::new(vertex_count),
            targets: Side::new(vertex_count),
        }
    }

    pub fn for_graph(graph: &Digraph) -> Self {
        Self::new(graph.vertex_count())
    }

    pub fn vertex_count(&self) -> usize {
        self.sources.marked.len()
    }

    /// Vertices marked by the most recent search, counting both sides.
    pub fn touched(&self) -> usize {
        self.sources.touched.len() + self.targets.touched.len()
    }

    fn reset(&mut self) {
        self.sources.reset();
        self.targets.reset();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Which {
    Sources,
    Targets,
}

#[derive(Clone, Copy, Debug)]
struct Best {
    length: usize,
    ancestor: Option<VertexId>,
}

/// Finds the shortest ancestral path between `sources` and `targets`.
///
/// Both slices must be non-empty and hold ids below the workspace's vertex
/// count; duplicates are harmless.
pub fn shortest_ancestral_path(
    graph: &Digraph,
    workspace: &mut SearchWorkspace,
    sources: &[VertexId],
    targets: &[VertexId],
) -> SapResult {
    debug_assert_eq!(workspace.vertex_count(), graph.vertex_count());
    workspace.reset();
    workspace.sources.seed(sources);
    workspace.targets.seed(targets);

    let mut best = Best {
        length: usize::MAX,
        ancestor: None,
    };
    let mut rounds = 0usize;
    while !workspace.sources.queue.is_empty() || !workspace.targets.queue.is_empty() {
        advance_layer(graph, workspace, Which::Sources, &mut best);
        advance_layer(graph, workspace, Which::Targets, &mut best);
        rounds += 1;
    }

    trace!(
        rounds,
        touched = workspace.touched(),
        best = ?best.ancestor,
        "sap.search.complete"
    );
    match best.ancestor {
        Some(ancestor) => SapResult::Found {
            length: best.length,
            ancestor,
        },
        None => SapResult::NoPath,
    }
}

fn advance_layer(
    graph: &Digraph,
    workspace: &mut SearchWorkspace,
    which: Which,
    best: &mut Best,
) {
    let (own, other) = match which {
        Which::Sources => (&mut workspace.sources, &workspace.targets),
        Which::Targets => (&mut workspace.targets, &workspace.sources),
    };
    let layer = own.queue.len();
    for _ in 0..layer {
        let Some(v) = own.queue.pop_front() else {
            break;
        };
        let own_distance = own.distance[v];
        if other.marked[v] {
            let combined = own_distance + other.distance[v];
            if combined < best.length {
                best.length = combined;
                best.ancestor = Some(v);
            }
        }
        if own_distance >= best.length {
            continue;
        }
        for &next in graph.neighbors(v) {
            if !own.marked[next] {
                own.visit(next, own_distance + 1);
            }
        }
    }
}
