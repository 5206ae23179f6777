//! SimilarityOracle: the only path to a pairwise tag similarity.
//!
//! Lookup order: L1 cache, persistent store, external scorer. External
//! calls are bounded by a semaphore and a per-call timeout. Failures never
//! escape: they become `PairSimilarity::Unavailable` and are not cached.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tracing::{debug, Instrument};

use tagmatch_core::config::SimilarityConfig;
use tagmatch_core::errors::OracleError;
use tagmatch_core::models::{PairSimilarity, SimilaritySource, TagPair};
use tagmatch_core::traits::{ISimilarityCache, ISimilarityScorer};
use tagmatch_observability::{events, similarity_span};

use crate::cache::L1PairCache;
use crate::parse::parse_similarity;
use crate::stats::{OracleStats, OracleStatsSnapshot};
use crate::write_back::WriteBackQueue;

/// Memoizing similarity oracle. Share it behind an `Arc`.
pub struct SimilarityOracle {
    l1: L1PairCache,
    store: Arc<dyn ISimilarityCache>,
    scorer: Arc<dyn ISimilarityScorer>,
    limiter: Semaphore,
    request_timeout: Duration,
    write_back: WriteBackQueue,
    stats: Arc<OracleStats>,
}

impl SimilarityOracle {
    /// Build an oracle and spawn its write-back worker.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(
        store: Arc<dyn ISimilarityCache>,
        scorer: Arc<dyn ISimilarityScorer>,
        config: &SimilarityConfig,
    ) -> Self {
        let stats = Arc::new(OracleStats::default());
        let write_back = WriteBackQueue::start(
            Arc::clone(&store),
            config.write_queue_capacity,
            Arc::clone(&stats),
        );
        tracing::info!(
            scorer = scorer.name(),
            max_concurrent_requests = config.max_concurrent_requests,
            request_timeout_ms = config.request_timeout_ms,
            "similarity oracle initialized"
        );
        Self {
            l1: L1PairCache::new(config.l1_cache_size),
            store,
            scorer,
            limiter: Semaphore::new(config.max_concurrent_requests.max(1)),
            request_timeout: Duration::from_millis(config.request_timeout_ms),
            write_back,
            stats,
        }
    }

    /// Similarity of two tags, symmetric in its arguments.
    pub async fn score(&self, tag_a: &str, tag_b: &str) -> PairSimilarity {
        let span = similarity_span!(tag_a, tag_b);
        self.resolve(TagPair::new(tag_a, tag_b)).instrument(span).await
    }

    async fn resolve(&self, pair: TagPair) -> PairSimilarity {
        if let Some(score) = self.l1.get(&pair) {
            OracleStats::bump(&self.stats.l1_hits);
            debug!(score, "similarity L1 hit");
            return PairSimilarity::Known {
                score,
                source: SimilaritySource::Memory,
            };
        }

        if let Some(stored) = self.lookup_store(&pair).await {
            OracleStats::bump(&self.stats.store_hits);
            let score = self.l1.insert_if_absent(pair, stored);
            debug!(score, "similarity store hit");
            return PairSimilarity::Known {
                score,
                source: SimilaritySource::Store,
            };
        }

        match self.ask_scorer(&pair).await {
            Ok(fresh) => {
                let score = self.l1.insert_if_absent(pair.clone(), fresh);
                events::similarity_scored(pair.first(), pair.second(), score, self.scorer.name());
                self.write_back.enqueue(pair, score, &self.stats);
                PairSimilarity::Known {
                    score,
                    source: SimilaritySource::Scorer,
                }
            }
            Err(e) => {
                OracleStats::bump(&self.stats.scorer_failures);
                let reason = e.to_string();
                events::scorer_degraded(pair.first(), pair.second(), &reason);
                PairSimilarity::Unavailable { reason }
            }
        }
    }

    /// Store read on the blocking pool. Errors count as a miss.
    async fn lookup_store(&self, pair: &TagPair) -> Option<f64> {
        let store = Arc::clone(&self.store);
        let key = pair.clone();
        let result =
            tokio::task::spawn_blocking(move || store.cached_similarity(key.first(), key.second()))
                .await;
        match result {
            Ok(Ok(found)) => found,
            Ok(Err(e)) => {
                OracleStats::bump(&self.stats.store_errors);
                tracing::warn!(error = %e, "similarity store lookup failed, treating as miss");
                None
            }
            Err(e) => {
                OracleStats::bump(&self.stats.store_errors);
                tracing::warn!(error = %e, "similarity store task failed, treating as miss");
                None
            }
        }
    }

    async fn ask_scorer(&self, pair: &TagPair) -> Result<f64, OracleError> {
        let _permit = self
            .limiter
            .acquire()
            .await
            .map_err(|_| OracleError::LimiterClosed)?;
        OracleStats::bump(&self.stats.scorer_calls);

        let call = self.scorer.score_pair(pair.first(), pair.second());
        let raw = match tokio::time::timeout(self.request_timeout, call).await {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => {
                return Err(OracleError::ScorerFailed {
                    reason: e.to_string(),
                })
            }
            Err(_) => {
                return Err(OracleError::Timeout {
                    timeout_ms: self.request_timeout.as_millis() as u64,
                })
            }
        };
        parse_similarity(&raw)
    }

    /// Wait until every write-back queued so far has reached the store.
    pub async fn flush(&self) {
        self.write_back.flush().await;
    }

    /// Current counters.
    pub fn stats(&self) -> OracleStatsSnapshot {
        self.stats.snapshot()
    }

    /// Write-backs queued but not yet applied.
    pub fn pending_writes(&self) -> usize {
        self.write_back.pending()
    }

    /// Entries in the L1 cache (approximate).
    pub fn l1_len(&self) -> u64 {
        self.l1.len()
    }
}
