//! Test fixture loader for tagmatch golden scenarios, plus stub collaborators
//! (scorer, extractor, reasoner) used by integration tests across crates.

pub mod stubs;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

pub use stubs::{FailingScorer, StubExtractor, StubReasoner, StubScorer};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// A scripted similarity between two tags.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptedSimilarity {
    pub a: String,
    pub b: String,
    /// Raw scorer answer, e.g. `"0.8"` or `"not a number"`.
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureCandidate {
    pub user_id: String,
    pub display_name: String,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedMatch {
    pub user_id: String,
    pub score: f64,
    pub common_tags: Vec<String>,
}

/// A complete matching scenario: query interests, scripted scorer answers,
/// a candidate pool in selector order, and the expected ranking.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub name: String,
    pub base_interests: Vec<String>,
    pub match_threshold: f64,
    pub cross_match_threshold: f64,
    pub similarities: Vec<ScriptedSimilarity>,
    pub candidates: Vec<FixtureCandidate>,
    pub expected: Vec<ExpectedMatch>,
}

impl GoldenScenario {
    /// A scorer answering this scenario's scripted pairs, `"0.0"` otherwise.
    pub fn scorer(&self) -> StubScorer {
        let mut scorer = StubScorer::new("0.0");
        for sim in &self.similarities {
            scorer = scorer.with_answer(&sim.a, &sim.b, &sim.answer);
        }
        scorer
    }
}

/// Load a golden scenario from `golden/<name>.json`.
pub fn load_scenario(name: &str) -> GoldenScenario {
    load_fixture(&format!("golden/{name}.json"))
}
