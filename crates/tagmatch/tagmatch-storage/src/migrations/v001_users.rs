//! v001: users.

use rusqlite::Connection;

use tagmatch_core::errors::TagmatchResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TagmatchResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            user_id       TEXT PRIMARY KEY,
            display_name  TEXT,
            interests     TEXT,
            last_active   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_users_last_active ON users(last_active);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
