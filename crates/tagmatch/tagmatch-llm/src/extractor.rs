//! Model-backed interest extraction.

use std::sync::Arc;

use async_trait::async_trait;

use tagmatch_core::errors::TagmatchResult;
use tagmatch_core::traits::ITagExtractor;

use crate::client::{ChatClient, ChatRequest};
use crate::prompts;

/// Split a comma-separated model answer into trimmed, non-empty tags.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct ChatTagExtractor {
    client: Arc<ChatClient>,
    model: String,
}

impl ChatTagExtractor {
    pub fn new(client: Arc<ChatClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl ITagExtractor for ChatTagExtractor {
    async fn extract(&self, text: &str) -> TagmatchResult<Vec<String>> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: prompts::extraction_messages(text),
            temperature: prompts::EXTRACTION_TEMPERATURE,
            max_tokens: None,
        };
        let raw = self.client.complete(&request).await?;
        let tags = parse_tags(&raw);
        tracing::debug!(count = tags.len(), "extracted interest tags");
        Ok(tags)
    }
}
