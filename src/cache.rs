use std::{convert::Infallible, fmt, num::NonZeroUsize};

use lru::LruCache;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{engine::SapResult, graph::VertexId};

pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Canonical form of an unordered pair of vertex sets.
///
/// Each set is sorted, deduplicated and written as `.`-terminated ids; the
/// two strings are ordered lexicographically and joined with `_`, so
/// `(A, B)` and `(B, A)` share a key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(String);

impl QueryKey {
    pub fn new(sources: &[VertexId], targets: &[VertexId]) -> Self {
        let left = encode_set(sources);
        let right = encode_set(targets);
        let (first, second) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        let mut key = String::with_capacity(first.len() + second.len() + 1);
        key.push_str(&first);
        key.push('_');
        key.push_str(&second);
        QueryKey(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn encode_set(ids: &[VertexId]) -> String {
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    let mut out = String::new();
    for id in sorted {
        out.push_str(&id.to_string());
        out.push('.');
    }
    out
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Bounded LRU map from [`QueryKey`] to [`SapResult`].
///
/// A capacity of zero disables caching: every lookup misses and nothing is
/// stored.
pub struct QueryCache {
    entries: Option<LruCache<QueryKey, SapResult>>,
    capacity: usize,
    stats: CacheStats,
}

impl QueryCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(LruCache::new),
            capacity,
            stats: CacheStats::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, |entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Checks membership without touching recency.
    pub fn contains(&self, sources: &[VertexId], targets: &[VertexId]) -> bool {
        let key = QueryKey::new(sources, targets);
        self.entries
            .as_ref()
            .is_some_and(|entries| entries.contains(&key))
    }

    /// Keys from most to least recently used.
    pub fn keys(&self) -> Vec<QueryKey> {
        self.entries
            .as_ref()
            .map(|entries| entries.iter().map(|(key, _)| key.clone()).collect())
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        if let Some(entries) = self.entries.as_mut() {
            entries.clear();
        }
    }

    pub fn get_or_compute<F>(
        &mut self,
        sources: &[VertexId],
        targets: &[VertexId],
        compute: F,
    ) -> SapResult
    where
        F: FnOnce() -> SapResult,
    {
        match self.try_get_or_compute(sources, targets, || Ok::<_, Infallible>(compute())) {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }

    /// Like [`QueryCache::get_or_compute`], but a failing computation is
    /// returned to the caller and nothing is stored.
    pub fn try_get_or_compute<F, E>(
        &mut self,
        sources: &[VertexId],
        targets: &[VertexId],
        compute: F,
    ) -> Result<SapResult, E>
    where
        F: FnOnce() -> Result<SapResult, E>,
    {
        let key = QueryKey::new(sources, targets);
        if let Some(entries) = self.entries.as_mut() {
            if let Some(result) = entries.get(&key) {
                self.stats.hits += 1;
                debug!(key = %key, "sap.cache.hit");
                return Ok(*result);
            }
        }
        self.stats.misses += 1;
        debug!(key = %key, "sap.cache.miss");
        let result = compute()?;
        if let Some(entries) = self.entries.as_mut() {
            if let Some((evicted, _)) = entries.push(key, result) {
                self.stats.evictions += 1;
                debug!(key = %evicted, "sap.cache.evict");
            }
        }
        Ok(result)
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCache")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("stats", &self.stats)
            .finish()
    }
}
