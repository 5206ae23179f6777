use std::sync::Arc;

use chrono::{Duration, Utc};
use tagmatch_core::config::{MatchingConfig, SimilarityConfig};
use tagmatch_core::errors::{StorageError, TagmatchResult};
use tagmatch_core::traits::IUserStorage;
use tagmatch_core::UserProfile;
use tagmatch_matching::Matcher;
use tagmatch_similarity::SimilarityOracle;
use tagmatch_storage::StorageEngine;
use test_fixtures::StubScorer;

fn matcher_over(store: Arc<StorageEngine>, stub: StubScorer) -> Matcher {
    let oracle = Arc::new(SimilarityOracle::new(
        store.clone(),
        Arc::new(stub),
        &SimilarityConfig::default(),
    ));
    Matcher::new(store, oracle, &MatchingConfig::default())
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn never_returns_more_than_top_k_and_sorted() {
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    for i in 0..15 {
        // Half the pool shares "Hades" exactly, the rest only "Doom".
        let interests = if i % 2 == 0 { vec!["Hades"] } else { vec!["Hades", "Doom"] };
        store
            .upsert_user(&UserProfile::new(format!("u{i:02}"), "P", interests))
            .unwrap();
    }
    let matcher = matcher_over(store, StubScorer::new("0.5"));

    let found = matcher.find_matches("me", &tags(&["Hades", "Tetris"])).await;
    assert_eq!(found.len(), 10);
    assert!(found.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(found.iter().all(|m| m.user_id != "me"));
}

#[tokio::test]
async fn threshold_is_inclusive() {
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    store
        .upsert_user(&UserProfile::new("exact", "E", ["Puyo Puyo"]))
        .unwrap();
    store
        .upsert_user(&UserProfile::new("below", "B", ["Doom"]))
        .unwrap();
    let stub = StubScorer::new("0.0")
        .with_answer("Tetris", "Puyo Puyo", "0.6")
        .with_answer("Tetris", "Doom", "0.59");
    let matcher = matcher_over(store, stub);

    let found = matcher.find_matches("me", &tags(&["Tetris"])).await;
    let ids: Vec<_> = found.iter().map(|m| m.user_id.as_str()).collect();
    assert_eq!(ids, vec!["exact"]);
    assert_eq!(found[0].score, 0.6);
}

#[tokio::test]
async fn custom_threshold_overrides_config() {
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    store
        .upsert_user(&UserProfile::new("weak", "W", ["Doom"]))
        .unwrap();
    let matcher = matcher_over(store, StubScorer::new("0.45"));

    assert!(matcher.find_matches("me", &tags(&["Tetris"])).await.is_empty());
    let found = matcher
        .find_matches_with_threshold("me", &tags(&["Tetris"]), 0.4)
        .await;
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn stale_users_are_not_candidates() {
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    store
        .upsert_user(
            &UserProfile::new("old", "O", ["Hades"]).with_last_active(Utc::now() - Duration::days(30)),
        )
        .unwrap();
    store
        .upsert_user(&UserProfile::new("new", "N", ["Hades"]))
        .unwrap();
    let matcher = matcher_over(store, StubScorer::new("0.0"));

    let found = matcher.find_matches("me", &tags(&["Hades"])).await;
    let ids: Vec<_> = found.iter().map(|m| m.user_id.as_str()).collect();
    assert_eq!(ids, vec!["new"]);
}

#[tokio::test]
async fn failing_candidate_is_excluded_without_failing_the_call() {
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    let matcher = matcher_over(store, StubScorer::new("0.0").with_panic_on("Tetris", "Doom"));

    let pool = vec![
        UserProfile::new("good", "G", ["Tetris"]),
        UserProfile::new("", "Malformed", ["Tetris"]),
        UserProfile::new("crashy", "C", ["Doom"]),
        UserProfile::new("also-good", "A", ["Tetris"]),
    ];
    let found = matcher.rank(&tags(&["Tetris"]), pool, 0.6).await;
    let ids: Vec<_> = found.iter().map(|m| m.user_id.as_str()).collect();
    assert_eq!(ids, vec!["good", "also-good"]);
}

#[tokio::test]
async fn ties_keep_pool_order() {
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    let matcher = matcher_over(store, StubScorer::new("0.0"));

    let pool: Vec<_> = ["c", "a", "b"]
        .into_iter()
        .map(|id| UserProfile::new(id, id, ["Hades"]))
        .collect();
    let found = matcher.rank(&tags(&["Hades"]), pool, 0.6).await;
    let ids: Vec<_> = found.iter().map(|m| m.user_id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

struct UnreachableUsers;

impl IUserStorage for UnreachableUsers {
    fn upsert_user(&self, _profile: &UserProfile) -> TagmatchResult<()> {
        Err(StorageError::SqliteError { message: "unable to open database file".into() }.into())
    }

    fn get_user(&self, _user_id: &str) -> TagmatchResult<Option<UserProfile>> {
        Err(StorageError::SqliteError { message: "unable to open database file".into() }.into())
    }

    fn active_users(
        &self,
        _excluding: &str,
        _since: chrono::DateTime<Utc>,
    ) -> TagmatchResult<Vec<UserProfile>> {
        Err(StorageError::SqliteError { message: "unable to open database file".into() }.into())
    }
}

#[tokio::test]
async fn store_failure_yields_empty_result() {
    let cache = Arc::new(StorageEngine::open_in_memory().unwrap());
    let oracle = Arc::new(SimilarityOracle::new(
        cache,
        Arc::new(StubScorer::new("1.0")),
        &SimilarityConfig::default(),
    ));
    let matcher = Matcher::new(Arc::new(UnreachableUsers), oracle, &MatchingConfig::default());

    assert!(matcher.find_matches("me", &tags(&["Hades"])).await.is_empty());
}
