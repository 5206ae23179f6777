//! # tagmatch-core
//!
//! Foundation crate for the tagmatch matching engine.
//! Defines the shared models, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TagmatchConfig;
pub use errors::{TagmatchError, TagmatchResult};
pub use models::{
    CandidateScore, PairSimilarity, RecommendedMatch, SimilaritySource, Submission, TagPair,
    UserProfile,
};
