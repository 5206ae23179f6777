//! Model-backed pair scorer.

use std::sync::Arc;

use async_trait::async_trait;

use tagmatch_core::errors::TagmatchResult;
use tagmatch_core::traits::ISimilarityScorer;

use crate::client::{ChatClient, ChatRequest};
use crate::prompts;

/// Asks the model for a bare similarity number. Parsing is left to the oracle.
pub struct ChatPairScorer {
    client: Arc<ChatClient>,
    model: String,
}

impl ChatPairScorer {
    pub fn new(client: Arc<ChatClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn request(&self, tag_a: &str, tag_b: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: prompts::scoring_messages(tag_a, tag_b),
            temperature: prompts::SCORING_TEMPERATURE,
            max_tokens: None,
        }
    }
}

#[async_trait]
impl ISimilarityScorer for ChatPairScorer {
    async fn score_pair(&self, tag_a: &str, tag_b: &str) -> TagmatchResult<String> {
        self.client.complete(&self.request(tag_a, tag_b)).await
    }

    fn name(&self) -> &str {
        &self.model
    }
}
