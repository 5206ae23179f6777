//! Matcher: concurrent candidate scoring, threshold filter, stable ranking,
//! top-k.

use std::cmp::Ordering;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::Instrument;

use tagmatch_core::config::MatchingConfig;
use tagmatch_core::models::{CandidateScore, UserProfile};
use tagmatch_core::traits::IUserStorage;
use tagmatch_observability::{candidate_span, events, matching_span};
use tagmatch_similarity::SimilarityOracle;

use crate::scorer::MatchScorer;
use crate::selector::CandidateSelector;

pub struct Matcher {
    selector: CandidateSelector,
    scorer: Arc<MatchScorer>,
    candidate_limit: Arc<Semaphore>,
    match_threshold: f64,
    top_k: usize,
}

impl Matcher {
    pub fn new(
        users: Arc<dyn IUserStorage>,
        oracle: Arc<SimilarityOracle>,
        config: &MatchingConfig,
    ) -> Self {
        Self {
            selector: CandidateSelector::new(users, config.active_window_days),
            scorer: Arc::new(MatchScorer::new(oracle, config.cross_match_threshold)),
            candidate_limit: Arc::new(Semaphore::new(config.max_concurrent_candidates.max(1))),
            match_threshold: config.match_threshold,
            top_k: config.top_k,
        }
    }

    /// Best matches for `user_id` at the configured threshold.
    pub async fn find_matches(&self, user_id: &str, base_interests: &[String]) -> Vec<CandidateScore> {
        self.find_matches_with_threshold(user_id, base_interests, self.match_threshold)
            .await
    }

    /// Best matches for `user_id` with scores `>= threshold`, at most `top_k`,
    /// highest first. A store failure yields an empty list.
    pub async fn find_matches_with_threshold(
        &self,
        user_id: &str,
        base_interests: &[String],
        threshold: f64,
    ) -> Vec<CandidateScore> {
        let span = matching_span!(user_id, threshold);
        async {
            let pool = match self.selector.select(user_id).await {
                Ok(pool) => pool,
                Err(e) => {
                    tracing::warn!(error = %e, "candidate pool unavailable, returning no matches");
                    return Vec::new();
                }
            };
            let pool_size = pool.len();
            let ranked = self.rank(base_interests, pool, threshold).await;
            events::matches_found(user_id, pool_size, ranked.len());
            ranked
        }
        .instrument(span)
        .await
    }

    /// Score `candidates` concurrently, keep `score >= threshold`, sort
    /// descending (ties keep pool order), truncate to `top_k`.
    /// Candidates that fail to score are logged and left out.
    pub async fn rank(
        &self,
        base_interests: &[String],
        candidates: Vec<UserProfile>,
        threshold: f64,
    ) -> Vec<CandidateScore> {
        let base: Arc<[String]> = base_interests.into();
        let mut tasks = JoinSet::new();
        let count = candidates.len();

        for (idx, candidate) in candidates.into_iter().enumerate() {
            let scorer = Arc::clone(&self.scorer);
            let limit = Arc::clone(&self.candidate_limit);
            let base = Arc::clone(&base);
            let span = candidate_span!(candidate.user_id);
            tasks.spawn(
                async move {
                    let _permit = limit.acquire_owned().await.ok();
                    let result = scorer.score(&base, &candidate).await;
                    (idx, candidate.user_id, result)
                }
                .instrument(span),
            );
        }

        let mut slots: Vec<Option<CandidateScore>> = vec![None; count];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((idx, _, Ok(scored))) => slots[idx] = Some(scored),
                Ok((_, user_id, Err(e))) => events::candidate_excluded(&user_id, &e.to_string()),
                Err(e) => events::candidate_excluded("<unknown>", &format!("task failed: {e}")),
            }
        }

        let mut matches: Vec<CandidateScore> = slots
            .into_iter()
            .flatten()
            .filter(|scored| scored.score >= threshold)
            .collect();
        // `sort_by` is stable: equal scores keep pool order.
        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        matches.truncate(self.top_k);
        matches
    }

    pub fn match_threshold(&self) -> f64 {
        self.match_threshold
    }
}
