use async_trait::async_trait;

use crate::errors::TagmatchResult;

/// External pairwise similarity scorer (a hosted model call).
///
/// Returns the raw answer text. Parsing and clamping belong to the caller.
#[async_trait]
pub trait ISimilarityScorer: Send + Sync {
    async fn score_pair(&self, tag_a: &str, tag_b: &str) -> TagmatchResult<String>;

    /// Human-readable scorer name for logs.
    fn name(&self) -> &str;
}
