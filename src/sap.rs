use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    cache::{CacheStats, QueryCache},
    config::SapConfig,
    engine::{SapResult, SearchWorkspace, shortest_ancestral_path},
    errors::SapError,
    graph::{Digraph, VertexId},
};

struct SearchState {
    workspace: SearchWorkspace,
    cache: QueryCache,
}

/// Shortest-ancestral-path queries over one immutable graph.
///
/// Inputs are validated without locking; the cache and the search workspace
/// share a single lock, so one `Sap` can be shared across threads and queries
/// run one at a time.
pub struct Sap {
    graph: Arc<Digraph>,
    state: Mutex<SearchState>,
}

impl Sap {
    pub fn new(graph: Digraph) -> Self {
        Self::with_config(Arc::new(graph), &SapConfig::default())
    }

    pub fn with_config(graph: Arc<Digraph>, config: &SapConfig) -> Self {
        let workspace = SearchWorkspace::for_graph(&graph);
        Self {
            graph,
            state: Mutex::new(SearchState {
                workspace,
                cache: QueryCache::new(config.cache_capacity),
            }),
        }
    }

    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    pub fn length(&self, v: VertexId, w: VertexId) -> Result<Option<usize>, SapError> {
        self.query([v], [w]).map(|result| result.length())
    }

    pub fn ancestor(&self, v: VertexId, w: VertexId) -> Result<Option<VertexId>, SapError> {
        self.query([v], [w]).map(|result| result.ancestor())
    }

    pub fn length_between<I, J>(&self, v: I, w: J) -> Result<Option<usize>, SapError>
    where
        I: IntoIterator<Item = VertexId>,
        J: IntoIterator<Item = VertexId>,
    {
        self.query(v, w).map(|result| result.length())
    }

    pub fn ancestor_between<I, J>(&self, v: I, w: J) -> Result<Option<VertexId>, SapError>
    where
        I: IntoIterator<Item = VertexId>,
        J: IntoIterator<Item = VertexId>,
    {
        self.query(v, w).map(|result| result.ancestor())
    }

    /// Length and ancestor in one call. An empty set on either side yields
    /// [`SapResult::NoPath`]; an out-of-range id is an error.
    pub fn query<I, J>(&self, v: I, w: J) -> Result<SapResult, SapError>
    where
        I: IntoIterator<Item = VertexId>,
        J: IntoIterator<Item = VertexId>,
    {
        let sources = self.collect_checked(v)?;
        let targets = self.collect_checked(w)?;
        if sources.is_empty() || targets.is_empty() {
            return Ok(SapResult::NoPath);
        }
        let mut guard = self.state.lock();
        let SearchState { workspace, cache } = &mut *guard;
        let graph = &self.graph;
        Ok(cache.get_or_compute(&sources, &targets, || {
            shortest_ancestral_path(graph, workspace, &sources, &targets)
        }))
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.state.lock().cache.stats()
    }

    pub fn cache_capacity(&self) -> usize {
        self.state.lock().cache.capacity()
    }

    pub fn clear_cache(&self) {
        self.state.lock().cache.clear();
    }

    fn collect_checked<I>(&self, ids: I) -> Result<Vec<VertexId>, SapError>
    where
        I: IntoIterator<Item = VertexId>,
    {
        let count = self.graph.vertex_count();
        let mut out = Vec::new();
        for id in ids {
            if id >= count {
                return Err(SapError::invalid_input(format!(
                    "vertex {id} outside range 0..{count}"
                )));
            }
            out.push(id);
        }
        Ok(out)
    }
}
