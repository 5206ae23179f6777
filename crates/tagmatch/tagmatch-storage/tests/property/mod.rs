//! Property tests for the similarity cache.

use proptest::prelude::*;
use tagmatch_core::traits::ISimilarityCache;
use tagmatch_storage::StorageEngine;

fn tag() -> impl Strategy<Value = String> {
    "[A-Za-z ]{1,10}"
}

proptest! {
    #[test]
    fn lookup_is_symmetric(a in tag(), b in tag(), score in 0.0f64..=1.0) {
        let store = StorageEngine::open_in_memory().unwrap();
        store.put_similarity_if_absent(&a, &b, score).unwrap();
        prop_assert_eq!(
            store.cached_similarity(&a, &b).unwrap(),
            store.cached_similarity(&b, &a).unwrap()
        );
        prop_assert_eq!(store.cached_similarity(&a, &b).unwrap(), Some(score));
    }

    #[test]
    fn first_value_is_permanent(
        a in tag(),
        b in tag(),
        first in 0.0f64..=1.0,
        later in proptest::collection::vec(0.0f64..=1.0, 1..5),
    ) {
        let store = StorageEngine::open_in_memory().unwrap();
        prop_assert!(store.put_similarity_if_absent(&a, &b, first).unwrap());
        for (i, score) in later.iter().enumerate() {
            let (x, y) = if i % 2 == 0 { (&b, &a) } else { (&a, &b) };
            prop_assert!(!store.put_similarity_if_absent(x, y, *score).unwrap());
        }
        prop_assert_eq!(store.cached_similarity(&a, &b).unwrap(), Some(first));
        prop_assert_eq!(store.cached_pair_count().unwrap(), 1);
    }
}
