use std::sync::Arc;

use chrono_tz::Tz;
use tracing::info;

use crate::ai::SummaryBackend;
use crate::core::models::MessageRecord;
use crate::errors::UpstreamError;
use crate::prompt::build_prompt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarizeResult {
    Summary(String),
    NoMessages,
}

/// Render records as `[HH:MM] name: text` lines in the given time zone.
#[must_use]
pub fn format_transcript(records: &[MessageRecord], timezone: Tz) -> String {
    records
        .iter()
        .map(|record| {
            let time = record.timestamp.with_timezone(&timezone).format("%H:%M");
            format!("[{time}] {}: {}", record.display_name, record.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Turns a chat transcript into a digest through a [`SummaryBackend`].
pub struct Summarizer {
    backend: Arc<dyn SummaryBackend>,
    timezone: Tz,
}

impl Summarizer {
    #[must_use]
    pub fn new(backend: Arc<dyn SummaryBackend>, timezone: Tz) -> Self {
        Self { backend, timezone }
    }

    #[must_use]
    pub fn format(&self, records: &[MessageRecord]) -> String {
        format_transcript(records, self.timezone)
    }

    /// # Errors
    ///
    /// Returns an error if the backend call fails or yields no usable text.
    pub async fn summarize(
        &self,
        records: &[MessageRecord],
    ) -> Result<SummarizeResult, UpstreamError> {
        if records.is_empty() {
            return Ok(SummarizeResult::NoMessages);
        }

        let transcript = self.format(records);
        let prompt = build_prompt(&transcript);

        let text = self.backend.complete(prompt).await?;
        let summary = text.trim();
        if summary.is_empty() {
            return Err(UpstreamError::EmptyResponse);
        }

        info!(messages = records.len(), "Summary generated");
        Ok(SummarizeResult::Summary(summary.to_string()))
    }
}
