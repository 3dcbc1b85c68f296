use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use tldr::ai::SummaryBackend;
use tldr::context::AppContext;
use tldr::core::models::{InboundEvent, MessageRecord};
use tldr::errors::UpstreamError;
use tldr::features::{record_message, summarize_chat};
use tldr::prompt::{SYSTEM_PROMPT, USER_PROMPT_PREFIX};
use tldr::store::MessageStore;
use tldr::summarizer::{SummarizeResult, Summarizer, format_transcript};

/// Backend that records every prompt and answers with a canned result.
struct FakeBackend {
    reply: Result<String, String>,
    prompts: Mutex<Vec<Vec<(MessageRole, String)>>>,
}

impl FakeBackend {
    fn answering(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    fn last_prompt(&self) -> Vec<(MessageRole, String)> {
        self.prompts.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl SummaryBackend for FakeBackend {
    async fn complete(&self, prompt: Vec<ChatCompletionMessage>) -> Result<String, UpstreamError> {
        let recorded = prompt
            .into_iter()
            .map(|m| {
                let text = match m.content {
                    Content::Text(t) => t,
                    Content::ImageUrl(_) => panic!("unexpected image content"),
                };
                (m.role, text)
            })
            .collect();
        self.prompts.lock().unwrap().push(recorded);
        self.reply
            .clone()
            .map_err(UpstreamError::HttpError)
    }
}

fn at(hour: u32, minute: u32, name: &str, text: &str) -> MessageRecord {
    MessageRecord {
        timestamp: Utc.with_ymd_and_hms(2024, 5, 1, hour, minute, 0).unwrap(),
        user_id: 1,
        display_name: name.to_string(),
        text: text.to_string(),
    }
}

fn context_with(backend: Arc<FakeBackend>) -> AppContext {
    AppContext::new(
        MessageStore::new(100),
        Summarizer::new(backend, Tz::UTC),
        "gpt-4.1-mini".to_string(),
    )
}

#[test]
fn test_format_transcript_two_messages() {
    let records = vec![at(9, 0, "alice", "hi"), at(9, 1, "bob", "hey")];
    assert_eq!(
        format_transcript(&records, Tz::UTC),
        "[09:00] alice: hi\n[09:01] bob: hey"
    );
}

#[test]
fn test_format_transcript_empty() {
    assert_eq!(format_transcript(&[], Tz::UTC), "");
}

#[test]
fn test_format_transcript_depends_on_order() {
    let a = at(9, 0, "alice", "hi");
    let b = at(9, 1, "bob", "hey");
    let forward = format_transcript(&[a.clone(), b.clone()], Tz::UTC);
    let reversed = format_transcript(&[b, a], Tz::UTC);
    assert_ne!(forward, reversed);
    assert_eq!(reversed, "[09:01] bob: hey\n[09:00] alice: hi");
}

#[test]
fn test_format_transcript_uses_display_timezone() {
    let records = vec![at(9, 30, "alice", "morning")];
    let moscow: Tz = "Europe/Moscow".parse().unwrap();
    assert_eq!(format_transcript(&records, moscow), "[12:30] alice: morning");
}

#[test]
fn test_format_keeps_multiline_text_verbatim() {
    let records = vec![at(23, 59, "carol", "line one\nline two")];
    assert_eq!(
        format_transcript(&records, Tz::UTC),
        "[23:59] carol: line one\nline two"
    );
}

#[tokio::test]
async fn test_summarize_empty_history_skips_upstream() {
    let backend = FakeBackend::answering("unused");
    let summarizer = Summarizer::new(backend.clone(), Tz::UTC);

    let result = summarizer.summarize(&[]).await.unwrap();

    assert_eq!(result, SummarizeResult::NoMessages);
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_summarize_sends_instruction_and_transcript() {
    let backend = FakeBackend::answering("  🔸 **Main topics:** greetings \n\n");
    let summarizer = Summarizer::new(backend.clone(), Tz::UTC);
    let records = vec![at(9, 0, "alice", "hi"), at(9, 1, "bob", "hey")];

    let result = summarizer.summarize(&records).await.unwrap();

    assert_eq!(
        result,
        SummarizeResult::Summary("🔸 **Main topics:** greetings".to_string())
    );
    assert_eq!(backend.calls(), 1);

    let prompt = backend.last_prompt();
    assert_eq!(prompt.len(), 2);
    assert!(matches!(prompt[0].0, MessageRole::system));
    assert_eq!(prompt[0].1, SYSTEM_PROMPT);
    assert!(matches!(prompt[1].0, MessageRole::user));
    assert_eq!(
        prompt[1].1,
        format!("{USER_PROMPT_PREFIX}\n\n[09:00] alice: hi\n[09:01] bob: hey")
    );
}

#[test]
fn test_system_prompt_requests_digest_sections() {
    for section in [
        "Main topics",
        "Key points",
        "Participants",
        "Unresolved questions",
        "same language",
    ] {
        assert!(SYSTEM_PROMPT.contains(section), "missing {section}");
    }
}

#[tokio::test]
async fn test_summarize_blank_reply_is_upstream_error() {
    let backend = FakeBackend::answering(" \n ");
    let summarizer = Summarizer::new(backend, Tz::UTC);

    let err = summarizer
        .summarize(&[at(9, 0, "alice", "hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::EmptyResponse));
}

#[tokio::test]
async fn test_upstream_failure_propagates_and_keeps_history() {
    let backend = FakeBackend::failing("connection refused");
    let ctx = context_with(backend.clone());
    ctx.store.append(42, at(9, 0, "alice", "hi"));
    ctx.store.append(42, at(9, 1, "bob", "hey"));
    let before = ctx.store.snapshot(42);

    let (summarized, result) = summarize_chat(&ctx, 42).await;
    let err = result.unwrap_err();

    assert_eq!(summarized, 2);
    assert!(matches!(err, UpstreamError::HttpError(ref m) if m == "connection refused"));
    assert_eq!(backend.calls(), 1);
    assert_eq!(ctx.store.snapshot(42), before);
}

#[tokio::test]
async fn test_summarize_chat_reads_only_that_chat() {
    let backend = FakeBackend::answering("digest");
    let ctx = context_with(backend.clone());
    ctx.store.append(1, at(10, 0, "alice", "chat one"));
    ctx.store.append(2, at(10, 5, "bob", "chat two"));

    let (summarized, result) = summarize_chat(&ctx, 1).await;

    assert_eq!(summarized, 1);
    assert_eq!(result.unwrap(), SummarizeResult::Summary("digest".to_string()));
    let prompt = backend.last_prompt();
    assert!(prompt[1].1.contains("[10:00] alice: chat one"));
    assert!(!prompt[1].1.contains("chat two"));
    assert_eq!(ctx.store.count(1), 1);
}

#[tokio::test]
async fn test_summarize_unknown_chat_has_no_messages() {
    let backend = FakeBackend::answering("unused");
    let ctx = context_with(backend.clone());

    let (summarized, result) = summarize_chat(&ctx, 404).await;

    assert_eq!(summarized, 0);
    assert_eq!(result.unwrap(), SummarizeResult::NoMessages);
    assert_eq!(backend.calls(), 0);
}

#[test]
fn test_record_message_buffers_event() {
    let ctx = context_with(FakeBackend::answering("unused"));
    let received_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();

    record_message(
        &ctx,
        InboundEvent {
            chat_id: 42,
            user_id: 7,
            display_name: "alice".to_string(),
            text: "hi".to_string(),
            received_at,
        },
    );

    assert_eq!(
        ctx.store.snapshot(42),
        vec![MessageRecord {
            timestamp: received_at,
            user_id: 7,
            display_name: "alice".to_string(),
            text: "hi".to_string(),
        }]
    );
}
