use std::sync::Arc;

use chrono::Utc;
use teloxide::prelude::*;
use teloxide::types::{ChatAction, ChatId, User, UserId};
use teloxide::utils::command::BotCommands;
use tracing::{error, info, warn};

use super::command::Command;
use super::response_builder::{
    NO_MESSAGES_TO_SUMMARIZE, UNEXPECTED_ERROR_MESSAGE, WELCOME_MESSAGE, format_clear_reply,
    format_count_reply, summary_reply,
};
use crate::context::AppContext;
use crate::core::models::InboundEvent;
use crate::errors::BotError;
use crate::features::{record_message, summarize_chat};

pub type HandlerResult = Result<(), BotError>;

/// Username when set, first name otherwise.
#[must_use]
pub fn display_name(user: &User) -> String {
    user.username
        .clone()
        .unwrap_or_else(|| user.first_name.clone())
}

/// Telegram user ids are unsigned; ids that do not fit the store's i64 are rejected.
#[must_use]
pub fn record_user_id(id: UserId) -> Option<i64> {
    i64::try_from(id.0).ok()
}

/// Plain text that is not a bot command.
#[must_use]
pub fn is_plain_text(msg: &Message) -> bool {
    msg.text().is_some_and(|text| !text.starts_with('/'))
}

/// Entry point for parsed commands. Failures are logged and answered with a
/// generic reply so one chat's error never stops the dispatcher.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: Arc<AppContext>,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    if let Err(e) = execute_command(&bot, chat_id, cmd, &ctx).await {
        error!(chat_id = chat_id.0, "Command failed: {}", e);
        if let Err(send_err) = bot.send_message(chat_id, UNEXPECTED_ERROR_MESSAGE).await {
            warn!(chat_id = chat_id.0, "Failed to send error reply: {}", send_err);
        }
    }
    Ok(())
}

async fn execute_command(
    bot: &Bot,
    chat_id: ChatId,
    cmd: Command,
    ctx: &AppContext,
) -> HandlerResult {
    info!(chat_id = chat_id.0, command = ?cmd, "Handling command");

    let reply = match cmd {
        Command::Start => WELCOME_MESSAGE.to_string(),
        Command::Help => Command::descriptions().to_string(),
        Command::Summarize => summarize_reply(bot, chat_id, ctx).await,
        Command::Clear => {
            let removed = ctx.store.clear(chat_id.0);
            info!(chat_id = chat_id.0, removed, "Cleared chat history");
            format_clear_reply(removed)
        }
        Command::Count => format_count_reply(ctx.store.count(chat_id.0), ctx.store.capacity()),
    };

    bot.send_message(chat_id, reply).await?;
    Ok(())
}

async fn summarize_reply(bot: &Bot, chat_id: ChatId, ctx: &AppContext) -> String {
    if ctx.store.count(chat_id.0) == 0 {
        return NO_MESSAGES_TO_SUMMARIZE.to_string();
    }

    if let Err(e) = bot.send_chat_action(chat_id, ChatAction::Typing).await {
        warn!(chat_id = chat_id.0, "Failed to send typing action: {}", e);
    }

    let (message_count, result) = summarize_chat(ctx, chat_id.0).await;
    if let Err(e) = &result {
        error!(chat_id = chat_id.0, "Failed to generate summary: {}", e);
    }
    summary_reply(result, message_count, &ctx.model_name)
}

/// Record a plain text message. Messages without a sender are ignored.
pub async fn handle_text(msg: Message, ctx: Arc<AppContext>) -> HandlerResult {
    let (Some(user), Some(text)) = (msg.from.as_ref(), msg.text()) else {
        return Ok(());
    };
    let Some(user_id) = record_user_id(user.id) else {
        warn!(
            chat_id = msg.chat.id.0,
            "Ignoring message from out-of-range user id {}",
            user.id.0
        );
        return Ok(());
    };

    let event = InboundEvent {
        chat_id: msg.chat.id.0,
        user_id,
        display_name: display_name(user),
        text: text.to_string(),
        received_at: Utc::now(),
    };
    record_message(&ctx, event);
    Ok(())
}
