use serde::{Deserialize, Serialize};

/// An unordered pair of tags. The smaller tag (byte order) is always first,
/// so `(a, b)` and `(b, a)` compare and hash equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TagPair {
    first: String,
    second: String,
}

impl TagPair {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self { first: a.to_string(), second: b.to_string() }
        } else {
            Self { first: b.to_string(), second: a.to_string() }
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

/// A cached pairwise similarity, immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityEntry {
    pub pair: TagPair,
    /// In `[0, 1]`.
    pub score: f64,
}

/// Where a known similarity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimilaritySource {
    /// In-process L1 cache.
    Memory,
    /// Persistent similarity table.
    Store,
    /// Fresh answer from the external scorer.
    Scorer,
}

/// Outcome of asking the oracle about one tag pair.
///
/// `Unavailable` and a genuine `0.0` both contribute nothing to a match
/// score, but only the former means "we don't know".
#[derive(Debug, Clone, PartialEq)]
pub enum PairSimilarity {
    Known { score: f64, source: SimilaritySource },
    Unavailable { reason: String },
}

impl PairSimilarity {
    /// Numeric value used for scoring. Unavailable counts as `0.0`.
    pub fn value(&self) -> f64 {
        match self {
            Self::Known { score, .. } => *score,
            Self::Unavailable { .. } => 0.0,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known { .. })
    }
}
