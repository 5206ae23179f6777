//! Error taxonomy. One top-level [`TagmatchError`] with `From` conversions
//! from every subsystem error.

mod config_error;
mod llm_error;
mod matching_error;
mod oracle_error;
mod storage_error;

pub use config_error::ConfigError;
pub use llm_error::LlmError;
pub use matching_error::MatchingError;
pub use oracle_error::OracleError;
pub use storage_error::StorageError;

/// Top-level error type for the tagmatch workspace.
#[derive(Debug, thiserror::Error)]
pub enum TagmatchError {
    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("similarity oracle error: {0}")]
    OracleError(#[from] OracleError),

    #[error("llm error: {0}")]
    LlmError(#[from] LlmError),

    #[error("matching error: {0}")]
    MatchingError(#[from] MatchingError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("validation failed: {reason}")]
    ValidationError { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl TagmatchError {
    /// Whether the failure came from the store being unreachable or broken.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageError(_))
    }
}

/// Result alias used across the workspace.
pub type TagmatchResult<T> = Result<T, TagmatchError>;
