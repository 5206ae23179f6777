use serde::{Deserialize, Serialize};

use super::defaults;

/// Similarity oracle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// L1 in-memory cache max entries.
    pub l1_cache_size: u64,
    /// Maximum external scoring calls in flight at once.
    pub max_concurrent_requests: usize,
    /// Timeout applied to each external scoring call.
    pub request_timeout_ms: u64,
    /// Capacity of the cache write-back queue. Writes beyond it are dropped.
    pub write_queue_capacity: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
            max_concurrent_requests: defaults::DEFAULT_MAX_CONCURRENT_REQUESTS,
            request_timeout_ms: defaults::DEFAULT_REQUEST_TIMEOUT_MS,
            write_queue_capacity: defaults::DEFAULT_WRITE_QUEUE_CAPACITY,
        }
    }
}
