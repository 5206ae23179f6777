//! # tagmatch-matching
//!
//! Scores a pool of recently active users against a querying user's
//! interests and ranks them.
//!
//! - [`CandidateSelector`]: the pool, from the user store.
//! - [`MatchScorer`]: one candidate's score (exact overlap + cross similarity).
//! - [`Matcher`]: concurrent scoring, threshold, stable ranking, top-k.
//! - [`InterestService`]: extract, save, match and explain in one call.

pub mod matcher;
pub mod scorer;
pub mod selector;
pub mod service;

pub use matcher::Matcher;
pub use scorer::{round_score, MatchScorer};
pub use selector::CandidateSelector;
pub use service::InterestService;
