use chrono::{DateTime, Utc};

use crate::errors::TagmatchResult;
use crate::models::UserProfile;

/// User profile persistence.
pub trait IUserStorage: Send + Sync {
    /// Insert or replace a profile. Replaces interests and `last_active`;
    /// never merges. Fails on an empty `user_id`.
    fn upsert_user(&self, profile: &UserProfile) -> TagmatchResult<()>;

    fn get_user(&self, user_id: &str) -> TagmatchResult<Option<UserProfile>>;

    /// Users with `last_active > since`, excluding `excluding`.
    /// Ordered by `last_active` descending, then `user_id`.
    fn active_users(
        &self,
        excluding: &str,
        since: DateTime<Utc>,
    ) -> TagmatchResult<Vec<UserProfile>>;
}

/// Persistent memo of pairwise tag similarity, keyed by the unordered pair.
pub trait ISimilarityCache: Send + Sync {
    /// Look up a pair in either order.
    fn cached_similarity(&self, tag_a: &str, tag_b: &str) -> TagmatchResult<Option<f64>>;

    /// Insert unless the unordered pair already exists. Returns whether a row
    /// was written; an existing entry is never overwritten.
    fn put_similarity_if_absent(&self, tag_a: &str, tag_b: &str, score: f64)
        -> TagmatchResult<bool>;

    /// Number of cached pairs.
    fn cached_pair_count(&self) -> TagmatchResult<u64>;
}
