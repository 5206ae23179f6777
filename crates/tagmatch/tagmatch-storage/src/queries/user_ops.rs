//! User profile upsert and active-window queries.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use tagmatch_core::constants::UNKNOWN_DISPLAY_NAME;
use tagmatch_core::errors::{TagmatchError, TagmatchResult};
use tagmatch_core::models::{normalize_interests, UserProfile};

use crate::to_storage_err;

/// Fixed-width UTC timestamp so text comparison matches time order.
pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str) -> TagmatchResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("invalid last_active {raw:?}: {e}")))
}

/// Insert or replace a user. Interests and `last_active` are overwritten.
pub fn upsert_user(conn: &Connection, profile: &UserProfile) -> TagmatchResult<()> {
    if profile.user_id.trim().is_empty() {
        return Err(TagmatchError::ValidationError {
            reason: "user_id must not be empty".to_string(),
        });
    }
    let interests = serde_json::to_string(&normalize_interests(&profile.interests))?;
    conn.execute(
        "INSERT INTO users (user_id, display_name, interests, last_active)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(user_id) DO UPDATE SET
             display_name = excluded.display_name,
             interests = excluded.interests,
             last_active = excluded.last_active",
        params![
            profile.user_id,
            profile.display_name,
            interests,
            format_timestamp(&profile.last_active),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_user(conn: &Connection, user_id: &str) -> TagmatchResult<Option<UserProfile>> {
    let raw = conn
        .query_row(
            "SELECT user_id, display_name, interests, last_active FROM users WHERE user_id = ?1",
            params![user_id],
            raw_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raw.map(into_profile).transpose()
}

/// Users active strictly after `since`, minus `excluding`.
/// Most recently active first; ties broken by `user_id`.
pub fn active_users(
    conn: &Connection,
    excluding: &str,
    since: DateTime<Utc>,
) -> TagmatchResult<Vec<UserProfile>> {
    let mut stmt = conn
        .prepare(
            "SELECT user_id, display_name, interests, last_active FROM users
             WHERE last_active > ?1 AND user_id != ?2
             ORDER BY last_active DESC, user_id ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![format_timestamp(&since), excluding], raw_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    // A row whose timestamp does not parse is skipped, not fatal to the pool.
    let mut users = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_storage_err(e.to_string()))?;
        let user_id = raw.user_id.clone();
        match into_profile(raw) {
            Ok(profile) => users.push(profile),
            Err(e) => {
                tracing::warn!(user_id = %user_id, error = %e, "skipping user with unreadable activity timestamp");
            }
        }
    }
    Ok(users)
}

pub fn count_users(conn: &Connection) -> TagmatchResult<u64> {
    conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

struct RawUser {
    user_id: String,
    display_name: Option<String>,
    interests: Option<String>,
    last_active: String,
}

fn raw_row(row: &Row<'_>) -> rusqlite::Result<RawUser> {
    Ok(RawUser {
        user_id: row.get(0)?,
        display_name: row.get(1)?,
        interests: row.get(2)?,
        last_active: row.get(3)?,
    })
}

fn into_profile(raw: RawUser) -> TagmatchResult<UserProfile> {
    let display_name = raw
        .display_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_DISPLAY_NAME.to_string());
    let interests = raw
        .interests
        .as_deref()
        .map(|text| decode_interests(&raw.user_id, text))
        .unwrap_or_default();
    Ok(UserProfile {
        last_active: parse_timestamp(&raw.last_active)?,
        user_id: raw.user_id,
        display_name,
        interests,
    })
}

/// Decode an interests column: a JSON array, or a `{a,b}` array literal
/// written by older front ends. Anything else reads as empty.
pub fn decode_interests(user_id: &str, text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Array(items)) if items.iter().all(|v| v.is_string()) => {
            return normalize_interests(items.iter().filter_map(|v| v.as_str()));
        }
        Ok(_) => {
            tracing::warn!(user_id = %user_id, raw = %trimmed, "interests column is not a string array, treating as empty");
            return Vec::new();
        }
        Err(_) => {}
    }
    if let Some(inner) = trimmed.strip_prefix('{').and_then(|t| t.strip_suffix('}')) {
        return normalize_interests(inner.split(',').map(|t| t.trim().trim_matches('"')));
    }
    tracing::warn!(
        user_id = %user_id,
        raw = %trimmed,
        "malformed interests column, treating as empty"
    );
    Vec::new()
}
