//! Pairwise similarity cache: insert-if-absent and unordered lookup.

use rusqlite::{params, Connection, OptionalExtension};

use tagmatch_core::errors::TagmatchResult;
use tagmatch_core::models::TagPair;

use crate::to_storage_err;

/// Look up a pair in either order.
pub fn get_similarity(conn: &Connection, tag_a: &str, tag_b: &str) -> TagmatchResult<Option<f64>> {
    conn.query_row(
        "SELECT score FROM pair_similarity
         WHERE (tag_a = ?1 AND tag_b = ?2) OR (tag_a = ?2 AND tag_b = ?1)
         LIMIT 1",
        params![tag_a, tag_b],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Insert the canonical pair unless it already exists. Returns `true` when a
/// row was written. Scores outside `[0, 1]` (or NaN) violate the table
/// constraints and come back as a storage error.
pub fn insert_similarity_if_absent(
    conn: &Connection,
    tag_a: &str,
    tag_b: &str,
    score: f64,
) -> TagmatchResult<bool> {
    let pair = TagPair::new(tag_a, tag_b);
    let changed = conn
        .execute(
            "INSERT INTO pair_similarity (tag_a, tag_b, score) VALUES (?1, ?2, ?3)
             ON CONFLICT(tag_a, tag_b) DO NOTHING",
            params![pair.first(), pair.second(), score],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed == 1)
}

pub fn count_similarities(conn: &Connection) -> TagmatchResult<u64> {
    conn.query_row("SELECT COUNT(*) FROM pair_similarity", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}
