//! Connection pool managing read/write connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use tagmatch_core::config::StorageConfig;
use tagmatch_core::errors::TagmatchResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// The single write connection plus, for file-backed databases, a read pool.
///
/// In-memory databases have no read pool: a second in-memory connection would
/// be a separate, empty database.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    pub readers: Option<ReadPool>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open the writer only. Readers are attached once the schema exists.
    pub fn open_writer(path: &Path, config: &StorageConfig) -> TagmatchResult<Self> {
        let writer = WriteConnection::open(path, config.busy_timeout_ms)?;
        Ok(Self {
            writer,
            readers: None,
            db_path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory pool (writer only).
    pub fn open_in_memory() -> TagmatchResult<Self> {
        Ok(Self {
            writer: WriteConnection::open_in_memory()?,
            readers: None,
            db_path: None,
        })
    }

    /// Attach a read pool for the file-backed database.
    pub fn attach_readers(&mut self, config: &StorageConfig) -> TagmatchResult<()> {
        if let Some(path) = &self.db_path {
            self.readers = Some(ReadPool::open(
                path,
                config.read_pool_size,
                config.busy_timeout_ms,
            )?);
        }
        Ok(())
    }
}
