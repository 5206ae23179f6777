use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's declared interests, keyed by the front end's user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub display_name: String,
    /// Normalized: trimmed, non-empty, unique, first-occurrence order.
    pub interests: Vec<String>,
    pub last_active: DateTime<Utc>,
}

impl UserProfile {
    /// Build a profile active now. Interests are normalized.
    pub fn new<I, S>(user_id: impl Into<String>, display_name: impl Into<String>, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            interests: normalize_interests(interests),
            last_active: Utc::now(),
        }
    }

    /// Override the activity timestamp.
    pub fn with_last_active(mut self, last_active: DateTime<Utc>) -> Self {
        self.last_active = last_active;
        self
    }
}

/// Trim tags, drop empty ones and exact duplicates, keep first-seen order.
pub fn normalize_interests<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in raw {
        let tag = tag.as_ref().trim();
        if tag.is_empty() || out.iter().any(|t| t == tag) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_dedups() {
        let tags = normalize_interests(["  Elden Ring ", "", "Elden Ring", "Dark Souls", "   "]);
        assert_eq!(tags, vec!["Elden Ring", "Dark Souls"]);
    }

    #[test]
    fn normalize_is_case_sensitive() {
        let tags = normalize_interests(["minecraft", "Minecraft"]);
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn profile_new_normalizes() {
        let p = UserProfile::new("42", "kai", vec!["Genshin Impact", "Genshin Impact"]);
        assert_eq!(p.interests, vec!["Genshin Impact"]);
    }
}
