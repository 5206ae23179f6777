/// Errors from the chat-completions client.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("API returned {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("model returned empty content")]
    EmptyResponse,

    #[error("missing API key")]
    MissingApiKey,
}
