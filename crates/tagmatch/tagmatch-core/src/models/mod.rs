//! Shared data models.

pub mod candidate;
pub mod similarity;
pub mod user;

pub use candidate::{CandidateScore, RecommendedMatch, Submission};
pub use similarity::{PairSimilarity, SimilarityEntry, SimilaritySource, TagPair};
pub use user::{normalize_interests, UserProfile};
