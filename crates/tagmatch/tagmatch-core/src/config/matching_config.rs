use serde::{Deserialize, Serialize};

use super::defaults;

/// Matching engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum candidate score kept in results (inclusive).
    pub match_threshold: f64,
    /// Minimum cross-tag similarity counted as a valid pair (inclusive).
    pub cross_match_threshold: f64,
    /// Maximum number of matches returned.
    pub top_k: usize,
    /// Only users active within this many days are candidates.
    pub active_window_days: u32,
    /// Maximum candidates scored concurrently.
    pub max_concurrent_candidates: usize,
    /// How many top matches get a generated reason.
    pub reason_limit: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            match_threshold: defaults::DEFAULT_MATCH_THRESHOLD,
            cross_match_threshold: defaults::DEFAULT_CROSS_MATCH_THRESHOLD,
            top_k: defaults::DEFAULT_TOP_K,
            active_window_days: defaults::DEFAULT_ACTIVE_WINDOW_DAYS,
            max_concurrent_candidates: defaults::DEFAULT_MAX_CONCURRENT_CANDIDATES,
            reason_limit: defaults::DEFAULT_REASON_LIMIT,
        }
    }
}
