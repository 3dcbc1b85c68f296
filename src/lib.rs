/// TLDR for Telegram - a Telegram bot that keeps recent chat messages and
/// summarizes them on demand using `OpenAI`.
///
/// Every chat gets a bounded in-memory history. The `/summarize` command
/// formats that history into a transcript and asks the model for a digest
/// covering topics, decisions, participants, and open questions.
///
/// # Architecture
///
/// - [`store::MessageStore`] owns the per-chat buffers
/// - [`summarizer::Summarizer`] formats transcripts and calls a [`ai::SummaryBackend`]
/// - [`ai::LlmClient`] talks to the `OpenAI` Responses API via reqwest
/// - [`telegram::TelegramBot`] wires teloxide updates to the handlers
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use tldr::context::AppContext;
/// use tldr::core::config::AppConfig;
/// use tldr::telegram::TelegramBot;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     tldr::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let ctx = Arc::new(AppContext::from_config(&config)?);
///     TelegramBot::new(&config, ctx).run().await?;
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod context;
pub mod core;
pub mod errors;
pub mod features;
pub mod prompt;
pub mod store;
pub mod summarizer;
pub mod telegram;

pub use ai::estimate_tokens;
pub use errors::{BotError, UpstreamError};
pub use store::MessageStore;
pub use summarizer::{SummarizeResult, Summarizer, format_transcript};

/// Configure structured logging with JSON format.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once keeps the first subscriber.
///
/// # Example
///
/// ```
/// tldr::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
