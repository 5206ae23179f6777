//! Model-backed one-sentence match reasons.

use std::sync::Arc;

use async_trait::async_trait;

use tagmatch_core::errors::TagmatchResult;
use tagmatch_core::traits::IMatchReasoner;

use crate::client::{ChatClient, ChatRequest};
use crate::prompts;

pub struct ChatMatchReasoner {
    client: Arc<ChatClient>,
    model: String,
}

impl ChatMatchReasoner {
    pub fn new(client: Arc<ChatClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl IMatchReasoner for ChatMatchReasoner {
    async fn reason(
        &self,
        base_interests: &[String],
        candidate_interests: &[String],
    ) -> TagmatchResult<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: prompts::reason_messages(base_interests, candidate_interests),
            temperature: prompts::REASON_TEMPERATURE,
            max_tokens: Some(prompts::REASON_MAX_TOKENS),
        };
        self.client.complete(&request).await
    }
}
