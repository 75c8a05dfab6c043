//! Shortest ancestral paths over single-rooted hypernym hierarchies.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod algo;
pub mod bench_utils;
pub mod bfs;
pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod engine;
pub mod errors;
pub mod graph;
pub mod outcast;
pub mod sap;
pub mod wordnet;

pub use crate::cache::{CacheStats, QueryCache, QueryKey};
pub use crate::config::SapConfig;
pub use crate::engine::{SapResult, SearchWorkspace, shortest_ancestral_path};
pub use crate::errors::SapError;
pub use crate::graph::{Digraph, DigraphBuilder, VertexId};
pub use crate::outcast::Outcast;
pub use crate::sap::Sap;
pub use crate::wordnet::WordNet;
