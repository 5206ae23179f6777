use serde::{Deserialize, Serialize};

/// Score of one candidate against a querying user's interests. Transient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub user_id: String,
    pub display_name: String,
    /// Rounded to two decimals.
    pub score: f64,
    /// Tags present verbatim on both sides, in the querying user's order.
    pub common_tags: Vec<String>,
    /// The candidate's normalized interests.
    pub interests: Vec<String>,
}

/// A selected match with its human-readable reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedMatch {
    pub candidate: CandidateScore,
    pub reason: String,
}

/// Result of submitting free-text interests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Submission {
    /// The extractor found nothing to match on; nothing was saved.
    NoInterests,
    /// Interests were saved; `matches` may be empty.
    Matched {
        interests: Vec<String>,
        /// Matches found before keeping only the top few.
        total: usize,
        matches: Vec<RecommendedMatch>,
    },
}
