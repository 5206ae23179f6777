//! Per-candidate match score.
//!
//! Exact matches contribute 1.0 each. Every remaining (base, candidate) tag
//! pair is scored through the oracle concurrently; similarities at or above
//! the cross threshold contribute their value. The score is the mean over
//! contributing pairs, rounded to two decimals.

use std::sync::Arc;

use tokio::task::JoinSet;

use tagmatch_core::constants::{EXACT_MATCH_WEIGHT, SCORE_DECIMALS, UNKNOWN_DISPLAY_NAME};
use tagmatch_core::errors::{MatchingError, TagmatchResult};
use tagmatch_core::models::{normalize_interests, CandidateScore, UserProfile};
use tagmatch_similarity::SimilarityOracle;

/// Round to the presentation precision.
pub fn round_score(value: f64) -> f64 {
    let factor = 10f64.powi(SCORE_DECIMALS);
    (value * factor).round() / factor
}

pub struct MatchScorer {
    oracle: Arc<SimilarityOracle>,
    cross_match_threshold: f64,
}

impl MatchScorer {
    pub fn new(oracle: Arc<SimilarityOracle>, cross_match_threshold: f64) -> Self {
        Self {
            oracle,
            cross_match_threshold,
        }
    }

    /// Score one candidate against `base_interests`.
    ///
    /// Errors only for a malformed candidate or a crashed pair task; scorer
    /// failures count as 0.0 for their pair.
    pub async fn score(
        &self,
        base_interests: &[String],
        candidate: &UserProfile,
    ) -> TagmatchResult<CandidateScore> {
        if candidate.user_id.trim().is_empty() {
            return Err(MatchingError::MalformedCandidate {
                reason: "empty user_id".to_string(),
            }
            .into());
        }

        let base = normalize_interests(base_interests);
        let theirs = normalize_interests(&candidate.interests);

        let common: Vec<String> = base.iter().filter(|t| theirs.contains(t)).cloned().collect();
        let base_remain: Vec<&String> = base.iter().filter(|t| !common.contains(t)).collect();
        let theirs_remain: Vec<&String> = theirs.iter().filter(|t| !common.contains(t)).collect();

        let mut total = common.len() as f64 * EXACT_MATCH_WEIGHT;
        let mut valid_pairs = common.len();

        let mut pairs = JoinSet::new();
        let mut slots = 0usize;
        for a in &base_remain {
            for b in &theirs_remain {
                let oracle = Arc::clone(&self.oracle);
                let (a, b) = ((*a).clone(), (*b).clone());
                let idx = slots;
                pairs.spawn(async move { (idx, oracle.score(&a, &b).await.value()) });
                slots += 1;
            }
        }

        let mut similarities = vec![0.0; slots];
        while let Some(joined) = pairs.join_next().await {
            match joined {
                Ok((idx, value)) => similarities[idx] = value,
                Err(e) => {
                    pairs.abort_all();
                    return Err(MatchingError::CandidateTaskFailed {
                        reason: format!("pair task for {} failed: {e}", candidate.user_id),
                    }
                    .into());
                }
            }
        }

        // Summed in pair order so the result does not depend on completion order.
        for similarity in similarities {
            if similarity >= self.cross_match_threshold {
                total += similarity;
                valid_pairs += 1;
            }
        }

        let score = if valid_pairs > 0 {
            round_score(total / valid_pairs as f64)
        } else {
            0.0
        };

        let display_name = if candidate.display_name.trim().is_empty() {
            UNKNOWN_DISPLAY_NAME.to_string()
        } else {
            candidate.display_name.clone()
        };

        Ok(CandidateScore {
            user_id: candidate.user_id.clone(),
            display_name,
            score,
            common_tags: common,
            interests: theirs,
        })
    }
}
