//! All AI/LLM functionality

pub mod client;

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::ChatCompletionMessage;

use crate::errors::UpstreamError;

// Re-export main types for convenience
pub use client::{LlmClient, estimate_tokens};

/// Anything that can turn a chat prompt into a single text completion.
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    async fn complete(&self, prompt: Vec<ChatCompletionMessage>) -> Result<String, UpstreamError>;
}
