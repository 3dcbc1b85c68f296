use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

/// Fixed instruction sent as the system message of every summary request.
pub const SYSTEM_PROMPT: &str = "You are an expert at summarising conversations. Your task is to write a short but \
    meaningful digest of a chat dialogue. \
    ─────────────── RULES ─────────────── \
    1. Identify the main topics and the key points of the discussion. \
    2. Keep important details and any decisions that were made. \
    3. State which participant proposed or decided what. \
    4. Structure the answer with lists or short paragraphs. \
    5. Answer in the same language as the original messages. \
    6. If the dialogue contains questions that were never answered, always mention them. \
    7. Be concise, but do not leave out anything important. \
    ─────────────── FORMAT ─────────────── \
    🔸 **Main topics:** [the main topics] \
    🔸 **Key points:** [important details and decisions] \
    🔸 **Participants:** [who did or proposed what] \
    🔸 **Unresolved questions:** [if any]";

/// Lead-in placed before the transcript in the user message.
pub const USER_PROMPT_PREFIX: &str = "Write a digest of the following dialogue:";

/// Build the two-message prompt (system instruction + transcript) for the model.
#[must_use]
pub fn build_prompt(transcript: &str) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(SYSTEM_PROMPT.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(format!("{USER_PROMPT_PREFIX}\n\n{transcript}")),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}
