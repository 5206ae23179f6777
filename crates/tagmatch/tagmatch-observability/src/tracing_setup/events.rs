//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

/// A fresh similarity score was obtained and queued for persistence.
pub fn similarity_scored(tag_a: &str, tag_b: &str, score: f64, scorer: &str) {
    tracing::debug!(
        event = "similarity_scored",
        tag_a = %tag_a,
        tag_b = %tag_b,
        score = score,
        scorer = %scorer,
        "similarity scored"
    );
}

/// The external scorer could not produce a usable answer; the pair counts 0.0.
pub fn scorer_degraded(tag_a: &str, tag_b: &str, reason: &str) {
    tracing::warn!(
        event = "scorer_degraded",
        tag_a = %tag_a,
        tag_b = %tag_b,
        reason = %reason,
        "similarity unavailable, scoring pair as 0.0"
    );
}

/// The write-back queue was full and a score was not persisted.
pub fn writeback_dropped(tag_a: &str, tag_b: &str) {
    tracing::warn!(
        event = "writeback_dropped",
        tag_a = %tag_a,
        tag_b = %tag_b,
        "write-back queue full, dropping similarity write"
    );
}

/// A persisted write-back failed.
pub fn writeback_failed(tag_a: &str, tag_b: &str, error: &str) {
    tracing::warn!(
        event = "writeback_failed",
        tag_a = %tag_a,
        tag_b = %tag_b,
        error = %error,
        "similarity write-back failed"
    );
}

/// A candidate was left out of a matching run.
pub fn candidate_excluded(candidate_id: &str, reason: &str) {
    tracing::warn!(
        event = "candidate_excluded",
        candidate_id = %candidate_id,
        reason = %reason,
        "candidate excluded from ranking"
    );
}

/// A matching run completed.
pub fn matches_found(user_id: &str, pool_size: usize, returned: usize) {
    tracing::info!(
        event = "matches_found",
        user_id = %user_id,
        pool_size = pool_size,
        returned = returned,
        "matching completed"
    );
}
