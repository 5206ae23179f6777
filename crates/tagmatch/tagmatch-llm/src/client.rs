//! Chat-completions HTTP client with retry, exponential backoff, timeout,
//! and gzip.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use tagmatch_core::config::LlmConfig;
use tagmatch_core::errors::{LlmError, TagmatchResult};

/// One chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for `POST {base_url}/chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// First choice's content, trimmed. Empty or missing content is an error.
fn first_content(response: ChatResponse) -> Result<String, LlmError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(LlmError::EmptyResponse)
}

fn request_err(reason: String) -> LlmError {
    LlmError::RequestFailed { reason }
}

/// Async client for an OpenAI-compatible chat-completions endpoint.
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    max_retries: u32,
    initial_backoff: Duration,
    max_backoff: Duration,
}

impl ChatClient {
    /// Build a client from config. Fails without an API key.
    pub fn from_config(config: &LlmConfig) -> TagmatchResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(LlmError::MissingApiKey)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .map_err(|e| request_err(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key,
            max_retries: config.max_retries,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(8),
        })
    }

    /// Override the retry backoff (initial delay doubles up to `max`).
    pub fn with_backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.initial_backoff = initial;
        self.max_backoff = max;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a completion request and return the first choice's text.
    ///
    /// Network errors, 429 and 5xx are retried; other 4xx fail immediately.
    pub async fn complete(&self, request: &ChatRequest) -> TagmatchResult<String> {
        let mut backoff = self.initial_backoff;
        let mut last_err = request_err("no attempt made".to_string());

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                tracing::debug!(
                    attempt,
                    max_retries = self.max_retries,
                    backoff_ms = backoff.as_millis() as u64,
                    "retrying chat completion"
                );
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(self.max_backoff);
            }

            let sent = self
                .http
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(request)
                .send()
                .await;

            let resp = match sent {
                Ok(resp) => resp,
                Err(e) => {
                    tracing::warn!(attempt, model = %request.model, error = %e, "chat completion request failed");
                    last_err = request_err(e.to_string());
                    continue;
                }
            };

            let status = resp.status();
            if status.is_success() {
                let body: ChatResponse = resp
                    .json()
                    .await
                    .map_err(|e| request_err(format!("invalid response body: {e}")))?;
                return Ok(first_content(body)?);
            }

            let body = resp.text().await.unwrap_or_default();
            let err = LlmError::HttpStatus {
                status: status.as_u16(),
                body,
            };
            if status.is_client_error() && status != reqwest::StatusCode::TOO_MANY_REQUESTS {
                return Err(err.into());
            }
            tracing::warn!(attempt, model = %request.model, status = status.as_u16(), "chat completion returned retryable status");
            last_err = err;
        }

        Err(last_err.into())
    }
}
