//! Configuration with layered resolution.
//!
//! Resolution order (highest priority first):
//! 1. Environment variables (`TAGMATCH_*`)
//! 2. Config file (TOML)
//! 3. Compiled defaults

pub mod defaults;
pub mod llm_config;
pub mod matching_config;
pub mod observability_config;
pub mod similarity_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use llm_config::LlmConfig;
pub use matching_config::MatchingConfig;
pub use observability_config::ObservabilityConfig;
pub use similarity_config::SimilarityConfig;
pub use storage_config::StorageConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TagmatchConfig {
    pub storage: StorageConfig,
    pub similarity: SimilarityConfig,
    pub matching: MatchingConfig,
    pub llm: LlmConfig,
    pub observability: ObservabilityConfig,
}

impl TagmatchConfig {
    /// Load configuration: optional TOML file, then `TAGMATCH_*` overrides,
    /// then validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    })?;
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from an environment lookup.
    /// Pattern: `TAGMATCH_DB_PATH`, `TAGMATCH_MATCH_THRESHOLD`, etc.
    /// Unparseable numeric values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("TAGMATCH_DB_PATH") {
            self.storage.db_path = val;
        }
        if let Some(val) = lookup("TAGMATCH_LLM_BASE_URL") {
            self.llm.base_url = val;
        }
        if let Some(val) = lookup("TAGMATCH_LLM_API_KEY") {
            self.llm.api_key = Some(val);
        }
        if let Some(v) = lookup("TAGMATCH_MATCH_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.matching.match_threshold = v;
        }
        if let Some(v) = lookup("TAGMATCH_CROSS_MATCH_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.matching.cross_match_threshold = v;
        }
        if let Some(v) = lookup("TAGMATCH_TOP_K").and_then(|v| v.parse().ok()) {
            self.matching.top_k = v;
        }
        if let Some(v) = lookup("TAGMATCH_ACTIVE_WINDOW_DAYS").and_then(|v| v.parse().ok()) {
            self.matching.active_window_days = v;
        }
        if let Some(v) = lookup("TAGMATCH_MAX_CONCURRENT_REQUESTS").and_then(|v| v.parse().ok()) {
            self.similarity.max_concurrent_requests = v;
        }
        if let Some(val) = lookup("TAGMATCH_LOG_LEVEL") {
            self.observability.log_level = val;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit_interval("matching.match_threshold", self.matching.match_threshold)?;
        check_unit_interval(
            "matching.cross_match_threshold",
            self.matching.cross_match_threshold,
        )?;
        check_positive("matching.top_k", self.matching.top_k)?;
        check_positive(
            "matching.max_concurrent_candidates",
            self.matching.max_concurrent_candidates,
        )?;
        check_positive(
            "similarity.max_concurrent_requests",
            self.similarity.max_concurrent_requests,
        )?;
        check_positive(
            "similarity.write_queue_capacity",
            self.similarity.write_queue_capacity,
        )?;
        if self.similarity.request_timeout_ms == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "similarity.request_timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

fn check_unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be between 0.0 and 1.0".to_string(),
        });
    }
    Ok(())
}

fn check_positive(field: &str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be greater than 0".to_string(),
        });
    }
    Ok(())
}
