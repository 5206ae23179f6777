//! StorageEngine: owns the ConnectionPool, runs migrations at open, and
//! implements `IUserStorage` + `ISimilarityCache`.

use std::path::Path;

use chrono::{DateTime, Utc};

use tagmatch_core::config::StorageConfig;
use tagmatch_core::errors::TagmatchResult;
use tagmatch_core::models::UserProfile;
use tagmatch_core::traits::{ISimilarityCache, IUserStorage};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{similarity_ops, user_ops};

/// The storage engine. Writes go through the single writer; reads use the
/// read pool when the database is file-backed.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open (or create) a file-backed database.
    pub fn open(path: &Path, config: &StorageConfig) -> TagmatchResult<Self> {
        let mut pool = ConnectionPool::open_writer(path, config)?;
        Self::initialize(&pool)?;
        pool.attach_readers(config)?;
        tracing::info!(path = %path.display(), "storage opened");
        Ok(Self { pool })
    }

    /// Open an in-memory database. Reads share the writer connection.
    pub fn open_in_memory() -> TagmatchResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        Self::initialize(&pool)?;
        Ok(Self { pool })
    }

    /// Open according to config; `":memory:"` selects an in-memory database.
    pub fn from_config(config: &StorageConfig) -> TagmatchResult<Self> {
        if config.is_in_memory() {
            Self::open_in_memory()
        } else {
            Self::open(Path::new(&config.db_path), config)
        }
    }

    fn initialize(pool: &ConnectionPool) -> TagmatchResult<()> {
        pool.writer.with_conn(|conn| {
            let applied = migrations::run_migrations(conn)?;
            if applied > 0 {
                tracing::debug!(applied, "schema migrated");
            }
            Ok(())
        })
    }

    /// The connection pool (for maintenance and tests).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Number of stored users.
    pub fn user_count(&self) -> TagmatchResult<u64> {
        self.with_reader(user_ops::count_users)
    }

    /// Execute a read-only query on the best available connection.
    fn with_reader<F, T>(&self, f: F) -> TagmatchResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> TagmatchResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }
}

impl IUserStorage for StorageEngine {
    fn upsert_user(&self, profile: &UserProfile) -> TagmatchResult<()> {
        self.pool
            .writer
            .with_conn(|conn| user_ops::upsert_user(conn, profile))
    }

    fn get_user(&self, user_id: &str) -> TagmatchResult<Option<UserProfile>> {
        self.with_reader(|conn| user_ops::get_user(conn, user_id))
    }

    fn active_users(
        &self,
        excluding: &str,
        since: DateTime<Utc>,
    ) -> TagmatchResult<Vec<UserProfile>> {
        self.with_reader(|conn| user_ops::active_users(conn, excluding, since))
    }
}

impl ISimilarityCache for StorageEngine {
    fn cached_similarity(&self, tag_a: &str, tag_b: &str) -> TagmatchResult<Option<f64>> {
        self.with_reader(|conn| similarity_ops::get_similarity(conn, tag_a, tag_b))
    }

    fn put_similarity_if_absent(
        &self,
        tag_a: &str,
        tag_b: &str,
        score: f64,
    ) -> TagmatchResult<bool> {
        self.pool.writer.with_conn(|conn| {
            similarity_ops::insert_similarity_if_absent(conn, tag_a, tag_b, score)
        })
    }

    fn cached_pair_count(&self) -> TagmatchResult<u64> {
        self.with_reader(similarity_ops::count_similarities)
    }
}
