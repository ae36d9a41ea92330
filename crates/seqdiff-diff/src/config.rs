use serde::{Deserialize, Serialize};

use seqdiff_crypto::HashAlgorithm;

use crate::arena::DEFAULT_CHUNK_CAPACITY;
use crate::error::{DiffError, DiffResult};

/// Tuning knobs for the Myers engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Digest used to fingerprint elements.
    pub algorithm: HashAlgorithm,
    /// Compare fingerprints instead of elements during the path search.
    pub hash_optimization: bool,
    /// When fingerprints match, also compare the elements themselves.
    /// Guards against digest collisions at the cost of one element
    /// comparison per matched pair.
    pub confirm_matches: bool,
    /// Graph nodes per arena chunk.
    pub arena_chunk_capacity: usize,
    /// Upper bound on graph nodes for one diff call. Exceeding it fails the
    /// call with an out-of-memory error.
    pub max_nodes: Option<usize>,
    /// Combined element count at which fingerprinting moves to a worker
    /// pool. `None` keeps it on the calling thread.
    pub parallel_threshold: Option<usize>,
    /// Worker threads for parallel fingerprinting; 0 uses the available
    /// parallelism.
    pub workers: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::Sha256,
            hash_optimization: true,
            confirm_matches: false,
            arena_chunk_capacity: DEFAULT_CHUNK_CAPACITY,
            max_nodes: None,
            parallel_threshold: Some(4096),
            workers: 0,
        }
    }
}

impl DiffConfig {
    /// Compare elements directly, skipping fingerprinting entirely.
    pub fn plain() -> Self {
        Self {
            hash_optimization: false,
            ..Default::default()
        }
    }

    /// Parse a TOML document. Missing keys take their default values.
    pub fn from_toml_str(s: &str) -> DiffResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| DiffError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no diff call could honour.
    pub fn validate(&self) -> DiffResult<()> {
        if self.arena_chunk_capacity == 0 {
            return Err(DiffError::Config("arena_chunk_capacity must be positive".into()));
        }
        if self.max_nodes == Some(0) {
            return Err(DiffError::Config("max_nodes must be positive when set".into()));
        }
        Ok(())
    }

    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_hash_optimization(mut self, enabled: bool) -> Self {
        self.hash_optimization = enabled;
        self
    }

    pub fn with_confirm_matches(mut self, enabled: bool) -> Self {
        self.confirm_matches = enabled;
        self
    }

    pub fn with_arena_chunk_capacity(mut self, capacity: usize) -> Self {
        self.arena_chunk_capacity = capacity;
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: Option<usize>) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}
