use std::time::Duration;

use thiserror::Error;

/// Failure of the generative service call. Never retried internally.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("OpenAI API error (status {status}): {body}")]
    ApiError { status: u16, body: String },

    #[error("Failed to parse OpenAI response: {0}")]
    ParseError(String),

    #[error("No text in OpenAI response")]
    EmptyResponse,

    #[error("OpenAI request timed out after {0:?}")]
    Timeout(Duration),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(error: reqwest::Error) -> Self {
        UpstreamError::HttpError(error.to_string())
    }
}

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Failed to access Telegram API: {0}")]
    TelegramError(String),
}

impl From<teloxide::RequestError> for BotError {
    fn from(error: teloxide::RequestError) -> Self {
        BotError::TelegramError(error.to_string())
    }
}
