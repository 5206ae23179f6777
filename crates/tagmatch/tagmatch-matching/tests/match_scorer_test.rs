use std::sync::Arc;

use tagmatch_core::config::SimilarityConfig;
use tagmatch_core::errors::{MatchingError, TagmatchError};
use tagmatch_core::UserProfile;
use tagmatch_matching::MatchScorer;
use tagmatch_similarity::SimilarityOracle;
use tagmatch_storage::StorageEngine;
use test_fixtures::{FailingScorer, StubScorer};

fn scorer_with(stub: StubScorer) -> (MatchScorer, Arc<StubScorer>) {
    let stub = Arc::new(stub);
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    let oracle = Arc::new(SimilarityOracle::new(store, stub.clone(), &SimilarityConfig::default()));
    (MatchScorer::new(oracle, 0.4), stub)
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn exact_plus_cross_similarity() {
    let (scorer, stub) = scorer_with(StubScorer::new("0.0").with_answer("Elden Ring", "Dark Souls", "0.8"));
    let candidate = UserProfile::new("c1", "Mika", ["Genshin Impact", "Dark Souls"]);

    let result = scorer
        .score(&tags(&["Genshin Impact", "Elden Ring"]), &candidate)
        .await
        .unwrap();
    assert_eq!(result.common_tags, vec!["Genshin Impact"]);
    assert_eq!(result.score, 0.9);
    assert_eq!(result.interests, vec!["Genshin Impact", "Dark Souls"]);
    // Only the single non-overlapping pair is sent to the scorer.
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn overlap_with_dissimilar_rest_scores_one() {
    let (scorer, _) = scorer_with(StubScorer::new("0.39"));
    let candidate = UserProfile::new("c1", "Mika", ["Hades", "Celeste", "Doom"]);

    let result = scorer
        .score(&tags(&["Hades", "Celeste", "Tetris", "Portal"]), &candidate)
        .await
        .unwrap();
    assert_eq!(result.common_tags, vec!["Hades", "Celeste"]);
    assert_eq!(result.score, 1.0);
}

#[tokio::test]
async fn empty_sides_score_zero() {
    let (scorer, stub) = scorer_with(StubScorer::new("0.9"));

    let result = scorer
        .score(&[], &UserProfile::new("c1", "Mika", ["Hades"]))
        .await
        .unwrap();
    assert_eq!(result.score, 0.0);
    assert!(result.common_tags.is_empty());

    let result = scorer
        .score(&tags(&["Hades"]), &UserProfile::new("c2", "Mika", Vec::<String>::new()))
        .await
        .unwrap();
    assert_eq!(result.score, 0.0);
    assert!(result.common_tags.is_empty());
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn common_tags_are_never_cross_compared() {
    let (scorer, stub) = scorer_with(StubScorer::new("0.5"));
    let candidate = UserProfile::new("c1", "Mika", ["Hades", "Doom"]);

    scorer
        .score(&tags(&["Hades", "Tetris"]), &candidate)
        .await
        .unwrap();
    let seen = stub.seen_pairs();
    assert_eq!(seen.len(), 1);
    assert!(seen.iter().all(|p| p.first() != "Hades" && p.second() != "Hades"));
}

#[tokio::test]
async fn failing_scorer_contributes_nothing() {
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    let oracle = Arc::new(SimilarityOracle::new(
        store,
        Arc::new(FailingScorer::default()),
        &SimilarityConfig::default(),
    ));
    let scorer = MatchScorer::new(oracle, 0.4);

    let result = scorer
        .score(&tags(&["Hades", "Tetris"]), &UserProfile::new("c1", "Mika", ["Hades", "Doom"]))
        .await
        .unwrap();
    assert_eq!(result.score, 1.0);

    let none = scorer
        .score(&tags(&["Tetris"]), &UserProfile::new("c2", "Mika", ["Doom"]))
        .await
        .unwrap();
    assert_eq!(none.score, 0.0);
}

#[tokio::test]
async fn threshold_is_inclusive_for_cross_pairs() {
    let (scorer, _) = scorer_with(StubScorer::new("0.4"));
    let result = scorer
        .score(&tags(&["Tetris"]), &UserProfile::new("c1", "Mika", ["Puyo Puyo"]))
        .await
        .unwrap();
    assert_eq!(result.score, 0.4);
}

#[tokio::test]
async fn missing_display_name_reads_unknown() {
    let (scorer, _) = scorer_with(StubScorer::new("0.0"));
    let result = scorer
        .score(&tags(&["Hades"]), &UserProfile::new("c1", "  ", ["Hades"]))
        .await
        .unwrap();
    assert_eq!(result.display_name, "Unknown");
}

#[tokio::test]
async fn empty_user_id_is_malformed() {
    let (scorer, _) = scorer_with(StubScorer::new("0.0"));
    let err = scorer
        .score(&tags(&["Hades"]), &UserProfile::new("", "Ghost", ["Hades"]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TagmatchError::MatchingError(MatchingError::MalformedCandidate { .. })
    ));
}

#[tokio::test]
async fn panicking_pair_fails_the_candidate() {
    let (scorer, _) = scorer_with(StubScorer::new("0.5").with_panic_on("Tetris", "Doom"));
    let err = scorer
        .score(&tags(&["Tetris"]), &UserProfile::new("c1", "Mika", ["Doom"]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TagmatchError::MatchingError(MatchingError::CandidateTaskFailed { .. })
    ));
}
