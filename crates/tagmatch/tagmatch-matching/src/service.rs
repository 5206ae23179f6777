//! Interest submission: extract tags, save the profile, match, explain.

use std::sync::Arc;

use tagmatch_core::constants::{ANONYMOUS_DISPLAY_NAME, REASON_FALLBACK, REASON_NO_INTERESTS};
use tagmatch_core::errors::{StorageError, TagmatchResult};
use tagmatch_core::models::{normalize_interests, RecommendedMatch, Submission, UserProfile};
use tagmatch_core::traits::{IMatchReasoner, ITagExtractor, IUserStorage};

use crate::matcher::Matcher;

pub struct InterestService {
    users: Arc<dyn IUserStorage>,
    extractor: Arc<dyn ITagExtractor>,
    reasoner: Arc<dyn IMatchReasoner>,
    matcher: Arc<Matcher>,
    reason_limit: usize,
}

impl InterestService {
    pub fn new(
        users: Arc<dyn IUserStorage>,
        extractor: Arc<dyn ITagExtractor>,
        reasoner: Arc<dyn IMatchReasoner>,
        matcher: Arc<Matcher>,
        reason_limit: usize,
    ) -> Self {
        Self {
            users,
            extractor,
            reasoner,
            matcher,
            reason_limit,
        }
    }

    /// Handle one free-text interest message.
    ///
    /// Nothing is saved when no tags are found. Otherwise the profile is
    /// replaced, matched, and the top `reason_limit` matches get a reason.
    pub async fn submit(
        &self,
        user_id: &str,
        display_name: Option<&str>,
        text: &str,
    ) -> TagmatchResult<Submission> {
        let interests = normalize_interests(self.extractor.extract(text).await?);
        if interests.is_empty() {
            tracing::debug!(user_id = %user_id, "no interests recognized");
            return Ok(Submission::NoInterests);
        }

        let name = display_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(ANONYMOUS_DISPLAY_NAME);
        let profile = UserProfile::new(user_id, name, &interests);
        let users = Arc::clone(&self.users);
        tokio::task::spawn_blocking(move || users.upsert_user(&profile))
            .await
            .map_err(|e| StorageError::TaskFailed {
                reason: e.to_string(),
            })?
            .inspect_err(|e| {
                tracing::warn!(user_id = %user_id, error = %e, "failed to save interests");
            })?;

        let mut found = self.matcher.find_matches(user_id, &interests).await;
        let total = found.len();
        found.truncate(self.reason_limit);

        let mut matches = Vec::with_capacity(found.len());
        for candidate in found {
            let reason = self.reason_for(&interests, &candidate.interests).await;
            matches.push(RecommendedMatch { candidate, reason });
        }

        Ok(Submission::Matched {
            interests,
            total,
            matches,
        })
    }

    async fn reason_for(&self, base: &[String], candidate: &[String]) -> String {
        if base.is_empty() || candidate.is_empty() {
            return REASON_NO_INTERESTS.to_string();
        }
        match self.reasoner.reason(base, candidate).await {
            Ok(reason) => reason,
            Err(e) => {
                tracing::warn!(error = %e, "match reason unavailable, using fallback");
                REASON_FALLBACK.to_string()
            }
        }
    }
}
