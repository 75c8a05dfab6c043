use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{cache::DEFAULT_CACHE_CAPACITY, errors::SapError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SapConfig {
    /// Maximum number of cached query results; zero disables caching.
    pub cache_capacity: usize,
}

impl Default for SapConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl SapConfig {
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn from_json_str(input: &str) -> Result<Self, SapError> {
        serde_json::from_str(input).map_err(|e| SapError::invalid_input(e.to_string()))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SapError> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }
}
