//! Trait seams between the matching engine and its collaborators.

mod collaborators;
mod scorer;
mod storage;

pub use collaborators::{IMatchReasoner, ITagExtractor};
pub use scorer::ISimilarityScorer;
pub use storage::{ISimilarityCache, IUserStorage};
