use std::sync::Arc;

use tldr::context::AppContext;
use tldr::core::config::AppConfig;
use tldr::telegram::TelegramBot;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tldr::setup_logging();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Config error: {}", e);
            eprintln!("❌ TELEGRAM_BOT_TOKEN and OPENAI_API_KEY must be set ({e})");
            std::process::exit(1);
        }
    };

    info!(
        model = %config.openai_model,
        history_capacity = config.history_capacity,
        timezone = %config.display_timezone,
        "Starting dialogue summarizer bot"
    );

    let ctx = Arc::new(AppContext::from_config(&config)?);
    TelegramBot::new(&config, ctx).run().await?;

    Ok(())
}
