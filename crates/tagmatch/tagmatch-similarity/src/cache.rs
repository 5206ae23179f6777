//! L1 in-memory pair cache using moka.
//!
//! TinyLFU admission, bounded entry count. Entries are immutable once
//! present: concurrent inserts for the same pair settle on the first value.

use moka::sync::Cache;
use tagmatch_core::models::TagPair;

/// L1 similarity cache keyed by canonical tag pair.
pub struct L1PairCache {
    cache: Cache<TagPair, f64>,
}

impl L1PairCache {
    /// Create a new L1 cache with the given max entry count.
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    pub fn get(&self, pair: &TagPair) -> Option<f64> {
        self.cache.get(pair)
    }

    /// Insert unless present. Returns the value that ends up cached, which is
    /// the existing one when another caller got there first.
    pub fn insert_if_absent(&self, pair: TagPair, score: f64) -> f64 {
        self.cache.entry(pair).or_insert(score).into_value()
    }

    /// Number of entries currently in the cache (approximate under load).
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
