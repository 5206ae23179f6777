//! The oracle keeps answering when the store is broken.

use std::sync::Arc;

use tagmatch_core::config::SimilarityConfig;
use tagmatch_core::errors::{StorageError, TagmatchResult};
use tagmatch_core::models::SimilaritySource;
use tagmatch_core::traits::ISimilarityCache;
use tagmatch_core::PairSimilarity;
use tagmatch_similarity::SimilarityOracle;
use test_fixtures::StubScorer;

struct BrokenStore;

impl ISimilarityCache for BrokenStore {
    fn cached_similarity(&self, _a: &str, _b: &str) -> TagmatchResult<Option<f64>> {
        Err(StorageError::SqliteError { message: "disk I/O error".into() }.into())
    }

    fn put_similarity_if_absent(&self, _a: &str, _b: &str, _s: f64) -> TagmatchResult<bool> {
        Err(StorageError::SqliteError { message: "disk I/O error".into() }.into())
    }

    fn cached_pair_count(&self) -> TagmatchResult<u64> {
        Ok(0)
    }
}

#[tokio::test]
async fn store_errors_degrade_to_scorer() {
    let scorer = Arc::new(StubScorer::new("0.6"));
    let oracle = SimilarityOracle::new(Arc::new(BrokenStore), scorer.clone(), &SimilarityConfig::default());

    assert_eq!(
        oracle.score("a", "b").await,
        PairSimilarity::Known { score: 0.6, source: SimilaritySource::Scorer }
    );
    oracle.flush().await;

    let stats = oracle.stats();
    assert_eq!(stats.store_errors, 1);
    assert_eq!(stats.writes_failed, 1);
    assert_eq!(scorer.calls(), 1);
}
