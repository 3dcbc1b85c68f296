use tracing::info;

use crate::context::AppContext;
use crate::errors::UpstreamError;
use crate::summarizer::SummarizeResult;

/// Summarize the chat's buffered history. Never mutates the history.
///
/// Returns the number of records that went into the transcript alongside the
/// outcome, so the reply header matches what was actually summarized.
pub async fn summarize_chat(
    ctx: &AppContext,
    chat_id: i64,
) -> (usize, Result<SummarizeResult, UpstreamError>) {
    // Snapshot first so the store lock is released before the upstream call.
    let records = ctx.store.snapshot(chat_id);
    info!(chat_id, messages = records.len(), "Summarizing chat history");
    let result = ctx.summarizer.summarize(&records).await;
    (records.len(), result)
}
