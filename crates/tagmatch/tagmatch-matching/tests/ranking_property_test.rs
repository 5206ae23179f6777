use std::sync::Arc;

use proptest::prelude::*;
use tagmatch_core::config::{MatchingConfig, SimilarityConfig};
use tagmatch_core::UserProfile;
use tagmatch_matching::Matcher;
use tagmatch_similarity::SimilarityOracle;
use tagmatch_storage::StorageEngine;
use test_fixtures::StubScorer;

const GAMES: [&str; 6] = ["Hades", "Doom", "Celeste", "Tetris", "Portal", "Myst"];

fn interests() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(GAMES.to_vec(), 0..=4)
        .prop_map(|tags| tags.into_iter().map(str::to_string).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ranking_is_bounded_sorted_and_thresholded(
        base in interests(),
        pool in prop::collection::vec(interests(), 0..16),
        top_k in 1usize..6,
        threshold in 0.0f64..=1.0,
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let ranked = rt.block_on(async {
            let store = Arc::new(StorageEngine::open_in_memory().unwrap());
            let scorer = StubScorer::new("0.3")
                .with_answer("Hades", "Doom", "0.8")
                .with_answer("Celeste", "Portal", "0.5");
            let oracle = Arc::new(SimilarityOracle::new(
                store.clone(),
                Arc::new(scorer),
                &SimilarityConfig::default(),
            ));
            let config = MatchingConfig { top_k, ..MatchingConfig::default() };
            let matcher = Matcher::new(store, oracle, &config);
            let candidates = pool
                .iter()
                .enumerate()
                .map(|(i, tags)| UserProfile::new(format!("c{i}"), "P", tags))
                .collect();
            matcher.rank(&base, candidates, threshold).await
        });

        prop_assert!(ranked.len() <= top_k);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for scored in &ranked {
            prop_assert!(scored.score >= threshold);
            prop_assert!((0.0..=1.0).contains(&scored.score));
        }
    }
}
