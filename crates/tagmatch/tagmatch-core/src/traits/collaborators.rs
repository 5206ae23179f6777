use async_trait::async_trait;

use crate::errors::TagmatchResult;

/// Turns free text into interest tags. Returns an empty list when nothing
/// recognizable is present.
#[async_trait]
pub trait ITagExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> TagmatchResult<Vec<String>>;
}

/// Explains in one sentence why two interest lists match.
#[async_trait]
pub trait IMatchReasoner: Send + Sync {
    async fn reason(
        &self,
        base_interests: &[String],
        candidate_interests: &[String],
    ) -> TagmatchResult<String>;
}
