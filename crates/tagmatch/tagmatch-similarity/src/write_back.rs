//! Bounded write-back queue with a single writer task.
//!
//! Enqueue never blocks: a full queue drops the write. The worker applies
//! writes in FIFO order on the blocking pool, so a `Flush` marker completes
//! only after every write queued before it. The worker exits once the
//! queue's sender is dropped and the backlog is drained.

use std::sync::Arc;

use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot};

use tagmatch_core::models::TagPair;
use tagmatch_core::traits::ISimilarityCache;
use tagmatch_observability::events;

use crate::stats::OracleStats;

enum Job {
    Put { pair: TagPair, score: f64 },
    Flush(oneshot::Sender<()>),
}

/// Producer side of the write-back queue.
pub(crate) struct WriteBackQueue {
    tx: mpsc::Sender<Job>,
}

impl WriteBackQueue {
    /// Spawn the writer task. Must be called inside a tokio runtime.
    pub fn start(
        store: Arc<dyn ISimilarityCache>,
        capacity: usize,
        stats: Arc<OracleStats>,
    ) -> Self {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        tokio::spawn(run_worker(rx, store, stats));
        Self { tx }
    }

    /// Queue a write. Returns `false` when it was dropped.
    pub fn enqueue(&self, pair: TagPair, score: f64, stats: &OracleStats) -> bool {
        match self.tx.try_send(Job::Put { pair, score }) {
            Ok(()) => true,
            Err(TrySendError::Full(Job::Put { pair, .. })) => {
                OracleStats::bump(&stats.writes_dropped);
                events::writeback_dropped(pair.first(), pair.second());
                false
            }
            Err(_) => {
                OracleStats::bump(&stats.writes_dropped);
                tracing::warn!("write-back worker gone, dropping similarity write");
                false
            }
        }
    }

    /// Writes waiting in the queue.
    pub fn pending(&self) -> usize {
        self.tx.max_capacity() - self.tx.capacity()
    }

    /// Wait until every write queued before this call has been applied.
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(Job::Flush(done_tx)).await.is_err() {
            return;
        }
        let _ = done_rx.await;
    }
}

async fn run_worker(
    mut rx: mpsc::Receiver<Job>,
    store: Arc<dyn ISimilarityCache>,
    stats: Arc<OracleStats>,
) {
    while let Some(job) = rx.recv().await {
        match job {
            Job::Put { pair, score } => {
                let store = Arc::clone(&store);
                let task_pair = pair.clone();
                let result = tokio::task::spawn_blocking(move || {
                    store.put_similarity_if_absent(task_pair.first(), task_pair.second(), score)
                })
                .await;
                match result {
                    Ok(Ok(_)) => OracleStats::bump(&stats.writes_applied),
                    Ok(Err(e)) => {
                        OracleStats::bump(&stats.writes_failed);
                        events::writeback_failed(pair.first(), pair.second(), &e.to_string());
                    }
                    Err(e) => {
                        OracleStats::bump(&stats.writes_failed);
                        events::writeback_failed(pair.first(), pair.second(), &e.to_string());
                    }
                }
            }
            Job::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
    tracing::debug!("write-back worker stopped");
}
