//! Oracle counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters, shared with the write-back worker.
#[derive(Debug, Default)]
pub(crate) struct OracleStats {
    pub l1_hits: AtomicU64,
    pub store_hits: AtomicU64,
    pub store_errors: AtomicU64,
    pub scorer_calls: AtomicU64,
    pub scorer_failures: AtomicU64,
    pub writes_applied: AtomicU64,
    pub writes_dropped: AtomicU64,
    pub writes_failed: AtomicU64,
}

impl OracleStats {
    pub fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> OracleStatsSnapshot {
        OracleStatsSnapshot {
            l1_hits: self.l1_hits.load(Ordering::Relaxed),
            store_hits: self.store_hits.load(Ordering::Relaxed),
            store_errors: self.store_errors.load(Ordering::Relaxed),
            scorer_calls: self.scorer_calls.load(Ordering::Relaxed),
            scorer_failures: self.scorer_failures.load(Ordering::Relaxed),
            writes_applied: self.writes_applied.load(Ordering::Relaxed),
            writes_dropped: self.writes_dropped.load(Ordering::Relaxed),
            writes_failed: self.writes_failed.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the oracle counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OracleStatsSnapshot {
    pub l1_hits: u64,
    pub store_hits: u64,
    /// Store lookups that failed and were treated as misses.
    pub store_errors: u64,
    pub scorer_calls: u64,
    /// Scorer errors, timeouts and unparseable answers.
    pub scorer_failures: u64,
    /// Write-backs that reached the store (including no-op duplicates).
    pub writes_applied: u64,
    pub writes_dropped: u64,
    pub writes_failed: u64,
}
