//! Deterministic collaborators for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use tagmatch_core::errors::{LlmError, TagmatchResult};
use tagmatch_core::models::TagPair;
use tagmatch_core::traits::{IMatchReasoner, ISimilarityScorer, ITagExtractor};

/// Table-driven scorer. Unknown pairs get the default answer.
pub struct StubScorer {
    answers: HashMap<TagPair, String>,
    default_answer: String,
    delay: Option<Duration>,
    panic_on: Option<TagPair>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
    seen: Mutex<Vec<TagPair>>,
}

impl StubScorer {
    pub fn new(default_answer: &str) -> Self {
        Self {
            answers: HashMap::new(),
            default_answer: default_answer.to_string(),
            delay: None,
            panic_on: None,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Answer for the unordered pair `(a, b)`.
    pub fn with_answer(mut self, a: &str, b: &str, answer: &str) -> Self {
        self.answers.insert(TagPair::new(a, b), answer.to_string());
        self
    }

    /// Sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Panic when asked about the unordered pair `(a, b)`.
    pub fn with_panic_on(mut self, a: &str, b: &str) -> Self {
        self.panic_on = Some(TagPair::new(a, b));
        self
    }

    /// Number of `score_pair` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Calls currently running.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Highest number of simultaneous calls observed.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    /// Pairs asked about, in call order.
    pub fn seen_pairs(&self) -> Vec<TagPair> {
        self.seen.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

/// Decrements the in-flight count on completion, cancellation, or panic.
struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ISimilarityScorer for StubScorer {
    async fn score_pair(&self, tag_a: &str, tag_b: &str) -> TagmatchResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        let _in_flight = InFlight(&self.in_flight);
        let pair = TagPair::new(tag_a, tag_b);
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(pair.clone());
        }

        if self.panic_on.as_ref() == Some(&pair) {
            panic!("scripted scorer panic for {pair:?}");
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        Ok(self
            .answers
            .get(&pair)
            .cloned()
            .unwrap_or_else(|| self.default_answer.clone()))
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Scorer whose every call fails.
#[derive(Default)]
pub struct FailingScorer {
    calls: AtomicUsize,
}

impl FailingScorer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ISimilarityScorer for FailingScorer {
    async fn score_pair(&self, _tag_a: &str, _tag_b: &str) -> TagmatchResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(LlmError::RequestFailed {
            reason: "connection refused".to_string(),
        }
        .into())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Extractor that splits on commas, or fails when told to.
#[derive(Default)]
pub struct StubExtractor {
    fail: bool,
}

impl StubExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl ITagExtractor for StubExtractor {
    async fn extract(&self, text: &str) -> TagmatchResult<Vec<String>> {
        if self.fail {
            return Err(LlmError::EmptyResponse.into());
        }
        Ok(text
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Reasoner that names the first shared-looking interests, or fails.
#[derive(Default)]
pub struct StubReasoner {
    fail: bool,
    calls: AtomicUsize,
}

impl StubReasoner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IMatchReasoner for StubReasoner {
    async fn reason(
        &self,
        base_interests: &[String],
        candidate_interests: &[String],
    ) -> TagmatchResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(LlmError::HttpStatus {
                status: 500,
                body: "upstream error".to_string(),
            }
            .into());
        }
        Ok(format!(
            "You both like {} and {}.",
            base_interests.first().map(String::as_str).unwrap_or("games"),
            candidate_interests.first().map(String::as_str).unwrap_or("games")
        ))
    }
}
