//! v002: pair_similarity. One row per unordered tag pair, smaller tag first.

use rusqlite::Connection;

use tagmatch_core::errors::TagmatchResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TagmatchResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS pair_similarity (
            tag_a       TEXT NOT NULL,
            tag_b       TEXT NOT NULL,
            score       REAL NOT NULL CHECK (score >= 0.0 AND score <= 1.0),
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            PRIMARY KEY (tag_a, tag_b)
        );

        CREATE INDEX IF NOT EXISTS idx_pair_similarity_b ON pair_similarity(tag_b, tag_a);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
