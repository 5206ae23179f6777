use std::sync::Arc;

use tagmatch_core::config::{MatchingConfig, SimilarityConfig};
use tagmatch_core::constants::{REASON_FALLBACK, REASON_NO_INTERESTS};
use tagmatch_core::traits::IUserStorage;
use tagmatch_core::{Submission, UserProfile};
use tagmatch_matching::{InterestService, Matcher};
use tagmatch_similarity::SimilarityOracle;
use tagmatch_storage::StorageEngine;
use test_fixtures::{StubExtractor, StubReasoner, StubScorer};

struct Harness {
    store: Arc<StorageEngine>,
    reasoner: Arc<StubReasoner>,
    service: InterestService,
}

fn harness(extractor: StubExtractor, reasoner: StubReasoner) -> Harness {
    harness_with(extractor, reasoner, MatchingConfig::default())
}

fn harness_with(extractor: StubExtractor, reasoner: StubReasoner, config: MatchingConfig) -> Harness {
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    let oracle = Arc::new(SimilarityOracle::new(
        store.clone(),
        Arc::new(StubScorer::new("0.0")),
        &SimilarityConfig::default(),
    ));
    let matcher = Arc::new(Matcher::new(store.clone(), oracle, &config));
    let reasoner = Arc::new(reasoner);
    let service = InterestService::new(
        store.clone(),
        Arc::new(extractor),
        reasoner.clone(),
        matcher,
        config.reason_limit,
    );
    Harness { store, reasoner, service }
}

#[tokio::test]
async fn no_interests_saves_nothing() {
    let h = harness(StubExtractor::new(), StubReasoner::new());
    let outcome = h.service.submit("u1", Some("Kai"), " , ").await.unwrap();
    assert_eq!(outcome, Submission::NoInterests);
    assert!(h.store.get_user("u1").unwrap().is_none());
}

#[tokio::test]
async fn submission_saves_and_matches_with_reasons() {
    let h = harness(StubExtractor::new(), StubReasoner::new());
    h.store
        .upsert_user(&UserProfile::new("u2", "Mika", ["Hades", "Doom"]))
        .unwrap();

    let outcome = h
        .service
        .submit("u1", Some("Kai"), "Hades, Celeste, Hades")
        .await
        .unwrap();
    let Submission::Matched {
        interests,
        total,
        matches,
    } = outcome else {
        panic!("expected matches");
    };
    assert_eq!(interests, vec!["Hades", "Celeste"]);
    assert_eq!(total, 1);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].candidate.user_id, "u2");
    assert_eq!(matches[0].candidate.common_tags, vec!["Hades"]);
    assert_eq!(matches[0].reason, "You both like Hades and Hades.");

    let saved = h.store.get_user("u1").unwrap().unwrap();
    assert_eq!(saved.display_name, "Kai");
    assert_eq!(saved.interests, vec!["Hades", "Celeste"]);
}

#[tokio::test]
async fn resubmission_replaces_interests() {
    let h = harness(StubExtractor::new(), StubReasoner::new());
    h.service.submit("u1", Some("Kai"), "Hades").await.unwrap();
    h.service.submit("u1", Some("Kai"), "Celeste").await.unwrap();
    assert_eq!(h.store.get_user("u1").unwrap().unwrap().interests, vec!["Celeste"]);
}

#[tokio::test]
async fn only_top_matches_get_reasons() {
    let h = harness(StubExtractor::new(), StubReasoner::new());
    for i in 0..5 {
        h.store
            .upsert_user(&UserProfile::new(format!("p{i}"), "P", ["Hades"]))
            .unwrap();
    }
    let outcome = h.service.submit("u1", None, "Hades").await.unwrap();
    let Submission::Matched { total, matches, .. } = outcome else {
        panic!("expected matches");
    };
    assert_eq!(total, 5);
    assert_eq!(matches.len(), 3);
    assert_eq!(h.reasoner.calls(), 3);
    assert_eq!(
        h.store.get_user("u1").unwrap().unwrap().display_name,
        "Anonymous Player"
    );
}

#[tokio::test]
async fn reasoner_failure_uses_fallback_sentence() {
    let h = harness(StubExtractor::new(), StubReasoner::failing());
    h.store
        .upsert_user(&UserProfile::new("u2", "Mika", ["Hades"]))
        .unwrap();
    let outcome = h.service.submit("u1", Some("Kai"), "Hades").await.unwrap();
    let Submission::Matched { matches, .. } = outcome else {
        panic!("expected matches");
    };
    assert_eq!(matches[0].reason, REASON_FALLBACK);
}

#[tokio::test]
async fn candidate_without_interests_gets_generic_reason() {
    let config = MatchingConfig {
        match_threshold: 0.0,
        ..MatchingConfig::default()
    };
    let h = harness_with(StubExtractor::new(), StubReasoner::new(), config);
    h.store
        .upsert_user(&UserProfile::new("u2", "Mika", Vec::<String>::new()))
        .unwrap();
    let outcome = h.service.submit("u1", Some("Kai"), "Hades").await.unwrap();
    let Submission::Matched { matches, .. } = outcome else {
        panic!("expected a matched outcome");
    };
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].candidate.score, 0.0);
    assert_eq!(matches[0].reason, REASON_NO_INTERESTS);
    assert_eq!(h.reasoner.calls(), 0);
}

#[tokio::test]
async fn extractor_failure_is_an_error() {
    let h = harness(StubExtractor::failing(), StubReasoner::new());
    assert!(h.service.submit("u1", Some("Kai"), "Hades").await.is_err());
    assert!(h.store.get_user("u1").unwrap().is_none());
}
