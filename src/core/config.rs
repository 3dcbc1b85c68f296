use std::env;
use std::time::Duration;

use chrono_tz::Tz;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;
pub const DEFAULT_SUMMARY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram_bot_token: String,
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub history_capacity: usize,
    pub summary_timeout: Duration,
    pub display_timezone: Tz,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| get(key).ok_or_else(|| format!("{key}: not set"));

        let history_capacity = match get("HISTORY_CAPACITY") {
            Some(raw) => parse_positive(&raw).map_err(|e| format!("HISTORY_CAPACITY: {e}"))?,
            None => DEFAULT_HISTORY_CAPACITY,
        };

        let timeout_secs = match get("SUMMARY_TIMEOUT_SECS") {
            Some(raw) => {
                parse_positive(&raw).map_err(|e| format!("SUMMARY_TIMEOUT_SECS: {e}"))? as u64
            }
            None => DEFAULT_SUMMARY_TIMEOUT_SECS,
        };

        let display_timezone = match get("DISPLAY_TIMEZONE") {
            Some(raw) => raw
                .trim()
                .parse::<Tz>()
                .map_err(|e| format!("DISPLAY_TIMEZONE: {e}"))?,
            None => Tz::UTC,
        };

        Ok(Self {
            telegram_bot_token: require("TELEGRAM_BOT_TOKEN")?,
            openai_api_key: require("OPENAI_API_KEY")?,
            openai_org_id: get("OPENAI_ORG_ID"),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            openai_base_url: get("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            history_capacity,
            summary_timeout: Duration::from_secs(timeout_secs),
            display_timezone,
        })
    }
}

fn parse_positive(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid number {raw:?}: {e}")),
    }
}
