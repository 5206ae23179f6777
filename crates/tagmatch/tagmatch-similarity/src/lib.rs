//! # tagmatch-similarity
//!
//! The similarity oracle answers "how similar are these two tags?" with a
//! value in `[0, 1]`. Lookups go L1 (moka) -> persistent store -> external
//! scorer. Fresh answers are written back through a bounded queue.

pub mod cache;
pub mod oracle;
pub mod parse;
pub mod stats;
pub mod write_back;

pub use cache::L1PairCache;
pub use oracle::SimilarityOracle;
pub use parse::parse_similarity;
pub use stats::OracleStatsSnapshot;
