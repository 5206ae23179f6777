//! Span definitions per operation: matching runs, candidate scoring, pair similarity.

/// Create a span for one matching run.
#[macro_export]
macro_rules! matching_span {
    ($user_id:expr, $threshold:expr) => {
        tracing::info_span!("tagmatch.matching", user_id = %$user_id, threshold = $threshold)
    };
}

/// Create a span for scoring one candidate.
#[macro_export]
macro_rules! candidate_span {
    ($candidate_id:expr) => {
        tracing::debug_span!("tagmatch.candidate", candidate_id = %$candidate_id)
    };
}

/// Create a span for one pair similarity lookup.
#[macro_export]
macro_rules! similarity_span {
    ($tag_a:expr, $tag_b:expr) => {
        tracing::debug_span!("tagmatch.similarity", tag_a = %$tag_a, tag_b = %$tag_b)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const MATCHING: &str = "tagmatch.matching";
    pub const CANDIDATE: &str = "tagmatch.candidate";
    pub const SIMILARITY: &str = "tagmatch.similarity";
}
