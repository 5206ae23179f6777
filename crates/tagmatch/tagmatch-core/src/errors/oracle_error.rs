/// Similarity oracle errors. None of these escape a scoring call: the oracle
/// folds them into `PairSimilarity::Unavailable`.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("external scorer failed: {reason}")]
    ScorerFailed { reason: String },

    #[error("external scorer timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("unparseable similarity answer: {raw:?}")]
    ParseFailed { raw: String },

    #[error("request limiter closed")]
    LimiterClosed,
}
