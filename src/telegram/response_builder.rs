//! Reply texts sent back to Telegram chats.
//!
//! Every user-facing string lives here so handlers stay free of wording.

use crate::errors::UpstreamError;
use crate::summarizer::SummarizeResult;

/// Telegram rejects messages longer than 4096 UTF-16 code units.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

const TRUNCATION_MARKER: &str = "…";

/// Canonical failure message shown to users when summarization fails.
pub const CANONICAL_FAILURE_MESSAGE: &str =
    "❌ Sorry, I couldn't create a digest right now. Please try again later.";

/// Shown when a handler fails for a reason other than the summary service.
pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "❌ An unexpected error occurred. Please try again later.";

pub const WELCOME_MESSAGE: &str = "🤖 Hi! I create digests of chat conversations.\n\n\
    📝 I keep the recent messages of this chat and can write a short digest of them.\n\n\
    📋 Available commands:\n\
    /start - Show this message\n\
    /summarize - Create a digest of all saved messages\n\
    /clear - Delete the saved messages\n\
    /count - Show how many messages are saved\n\n\
    💬 Just start writing and I will keep the messages!";

pub const NO_MESSAGES_TO_SUMMARIZE: &str = "📭 There are no saved messages to summarize.\n\
    Write a few messages, then use /summarize";

pub const NO_MESSAGES_TO_CLEAR: &str = "📭 There are no messages to delete.";

pub const NO_MESSAGES_SAVED: &str = "📭 There are no saved messages.";

/// Wrap a generated digest with a header carrying the message count and a model footer.
/// An oversized digest is cut so the whole reply fits in one Telegram message.
#[must_use]
pub fn format_summary_reply(message_count: usize, summary: &str, model_name: &str) -> String {
    let header = format!(
        "📄 Dialogue digest ({message_count} {})\n\n",
        pluralize_messages(message_count)
    );
    let footer = format!("\n\n🤖 Generated with {model_name}");
    let budget = TELEGRAM_MESSAGE_LIMIT.saturating_sub(utf16_len(&header) + utf16_len(&footer));
    let body = truncate_utf16(summary, budget);
    format!("{header}{body}{footer}")
}

/// Reply for a `/summarize` outcome. Upstream failures collapse into the
/// canonical failure message; details belong in the logs.
#[must_use]
pub fn summary_reply(
    result: Result<SummarizeResult, UpstreamError>,
    message_count: usize,
    model_name: &str,
) -> String {
    match result {
        Ok(SummarizeResult::Summary(summary)) => {
            format_summary_reply(message_count, &summary, model_name)
        }
        Ok(SummarizeResult::NoMessages) => NO_MESSAGES_TO_SUMMARIZE.to_string(),
        Err(_) => CANONICAL_FAILURE_MESSAGE.to_string(),
    }
}

#[must_use]
pub fn format_clear_reply(removed: usize) -> String {
    if removed == 0 {
        return NO_MESSAGES_TO_CLEAR.to_string();
    }
    format!(
        "🗑️ Deleted {removed} {}.\nYou can start a new conversation!",
        pluralize_messages(removed)
    )
}

#[must_use]
pub fn format_count_reply(count: usize, capacity: usize) -> String {
    if count == 0 {
        return NO_MESSAGES_SAVED.to_string();
    }
    format!(
        "📊 Saved messages: {count}\n📝 Maximum: {capacity}\n\nUse /summarize to create a digest."
    )
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

fn truncate_utf16(text: &str, max_units: usize) -> String {
    if utf16_len(text) <= max_units {
        return text.to_string();
    }

    let budget = max_units.saturating_sub(utf16_len(TRUNCATION_MARKER));
    let mut used = 0;
    let mut end = 0;
    for (idx, ch) in text.char_indices() {
        used += ch.len_utf16();
        if used > budget {
            break;
        }
        end = idx + ch.len_utf8();
    }
    format!("{}{TRUNCATION_MARKER}", text[..end].trim_end())
}

fn pluralize_messages(count: usize) -> &'static str {
    if count == 1 { "message" } else { "messages" }
}
