//! Candidate pool: users active within the window, minus the requester.

use std::sync::Arc;

use chrono::{Duration, Utc};

use tagmatch_core::errors::{StorageError, TagmatchResult};
use tagmatch_core::traits::IUserStorage;
use tagmatch_core::UserProfile;

pub struct CandidateSelector {
    users: Arc<dyn IUserStorage>,
    window: Duration,
}

impl CandidateSelector {
    pub fn new(users: Arc<dyn IUserStorage>, active_window_days: u32) -> Self {
        Self {
            users,
            window: Duration::days(i64::from(active_window_days)),
        }
    }

    /// Users active in the window, most recent first. Runs on the blocking pool.
    pub async fn select(&self, user_id: &str) -> TagmatchResult<Vec<UserProfile>> {
        let users = Arc::clone(&self.users);
        let excluding = user_id.to_string();
        let since = Utc::now() - self.window;
        tokio::task::spawn_blocking(move || users.active_users(&excluding, since))
            .await
            .map_err(|e| StorageError::TaskFailed {
                reason: e.to_string(),
            })?
    }
}
