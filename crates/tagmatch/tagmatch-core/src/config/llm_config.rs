use serde::{Deserialize, Serialize};

use super::defaults;

/// Chat-completions client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of an OpenAI-compatible API (without `/chat/completions`).
    pub base_url: String,
    /// Bearer token. Usually supplied through `TAGMATCH_LLM_API_KEY`.
    pub api_key: Option<String>,
    /// Model used to score tag pairs.
    pub scoring_model: String,
    /// Model used to extract interest tags from free text.
    pub extraction_model: String,
    /// Model used to phrase match reasons.
    pub reason_model: String,
    /// Per-request HTTP timeout in seconds.
    pub timeout_secs: u64,
    /// Retries after the first attempt.
    pub max_retries: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_LLM_BASE_URL.to_string(),
            api_key: None,
            scoring_model: defaults::DEFAULT_SCORING_MODEL.to_string(),
            extraction_model: defaults::DEFAULT_EXTRACTION_MODEL.to_string(),
            reason_model: defaults::DEFAULT_REASON_MODEL.to_string(),
            timeout_secs: defaults::DEFAULT_LLM_TIMEOUT_SECS,
            max_retries: defaults::DEFAULT_LLM_MAX_RETRIES,
        }
    }
}
