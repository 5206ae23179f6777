//! # tagmatch-storage
//!
//! SQLite persistence: the user table and the pairwise similarity cache.
//! One write connection, a read pool for file-backed databases, versioned
//! migrations run at open.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use tagmatch_core::errors::{StorageError, TagmatchError};

/// Convert a string error into a `TagmatchError::StorageError`.
pub(crate) fn to_storage_err(msg: String) -> TagmatchError {
    TagmatchError::StorageError(StorageError::SqliteError { message: msg })
}
