//! OpenAI-compatible adapter (implements BaseAI)

use async_trait::async_trait;
use openai_client::{truncate_to_char_boundary, ChatRequest, Message, OpenAIClient, OpenAIError};
use std::sync::Arc;

use super::traits::BaseAI;
use crate::error::RemoteError;
use crate::prompts::CAREER_EXPERT_SYSTEM;

/// Default synthesis model.
pub const MISTRAL_SMALL: &str = "mistral-small-latest";

/// Sampling temperature for report synthesis.
pub const SYNTHESIS_TEMPERATURE: f32 = 0.5;

/// Wrapper around OpenAIClient that implements BaseAI
#[derive(Clone)]
pub struct OpenAIAdapter {
    client: Arc<OpenAIClient>,
    model: String,
}

impl OpenAIAdapter {
    pub fn new(client: Arc<OpenAIClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl BaseAI for OpenAIAdapter {
    async fn complete(&self, prompt: &str) -> Result<String, RemoteError> {
        tracing::debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            prompt_preview = %truncate_to_char_boundary(prompt, 200),
            "Sending completion request"
        );

        let request = ChatRequest::new(&self.model)
            .message(Message::system(CAREER_EXPERT_SYSTEM))
            .message(Message::user(prompt))
            .temperature(SYNTHESIS_TEMPERATURE);

        let response = self
            .client
            .chat_completion(request)
            .await
            .map_err(to_remote_error)?;

        if let Some(usage) = &response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Completion usage"
            );
        }

        Ok(response.content)
    }
}

pub fn to_remote_error(err: OpenAIError) -> RemoteError {
    match err {
        OpenAIError::Auth(msg) => RemoteError::Auth(msg),
        OpenAIError::RateLimited(msg) => RemoteError::RateLimited(msg),
        OpenAIError::Network(msg) | OpenAIError::Timeout(msg) => RemoteError::Transport(msg),
        OpenAIError::Parse(msg) => RemoteError::InvalidResponse(msg),
        e if e.is_server_error() => RemoteError::Transport(e.to_string()),
        e => RemoteError::Unknown(e.to_string()),
    }
}
