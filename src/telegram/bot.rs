use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info};

use super::command::Command;
use super::handler::{handle_command, handle_text, is_plain_text};
use crate::context::AppContext;
use crate::core::config::AppConfig;
use crate::errors::BotError;

/// Telegram front end: receives updates and routes them to the handlers.
pub struct TelegramBot {
    bot: Bot,
    ctx: Arc<AppContext>,
}

impl TelegramBot {
    #[must_use]
    pub fn new(config: &AppConfig, ctx: Arc<AppContext>) -> Self {
        Self {
            bot: Bot::new(&config.telegram_bot_token),
            ctx,
        }
    }

    /// Poll for updates until Ctrl+C. Updates queued while the bot was offline are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the command list cannot be registered with Telegram.
    pub async fn run(self) -> Result<(), BotError> {
        info!("Starting Telegram bot...");

        self.bot.set_my_commands(Command::bot_commands()).await?;

        let listener = Polling::builder(self.bot.clone())
            .drop_pending_updates()
            .build();

        Dispatcher::builder(self.bot, schema())
            .dependencies(dptree::deps![self.ctx])
            .default_handler(|upd| async move {
                debug!("Unhandled update: {:?}", upd.id);
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch_with_listener(
                listener,
                LoggingErrorHandler::with_custom_text("An error from the update listener"),
            )
            .await;

        info!("Telegram bot stopped");
        Ok(())
    }
}

/// Commands first; any remaining plain text is buffered.
#[must_use]
pub fn schema() -> UpdateHandler<BotError> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(dptree::filter(|msg: Message| is_plain_text(&msg)).endpoint(handle_text))
}
