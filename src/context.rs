use std::sync::Arc;

use crate::ai::{LlmClient, SummaryBackend};
use crate::core::config::AppConfig;
use crate::errors::UpstreamError;
use crate::store::MessageStore;
use crate::summarizer::Summarizer;

/// State shared by every handler for the lifetime of one running bot.
pub struct AppContext {
    pub store: MessageStore,
    pub summarizer: Summarizer,
    pub model_name: String,
}

impl AppContext {
    #[must_use]
    pub fn new(store: MessageStore, summarizer: Summarizer, model_name: String) -> Self {
        Self {
            store,
            summarizer,
            model_name,
        }
    }

    /// Wire the store and an `OpenAI`-backed summarizer from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the `OpenAI` HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, UpstreamError> {
        let llm_client = LlmClient::from_config(config)?;
        let model_name = llm_client.model_name().to_string();
        let backend: Arc<dyn SummaryBackend> = Arc::new(llm_client);

        Ok(Self::new(
            MessageStore::new(config.history_capacity),
            Summarizer::new(backend, config.display_timezone),
            model_name,
        ))
    }
}
