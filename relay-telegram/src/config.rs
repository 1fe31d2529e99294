//! Telegram connection and logging config, loaded from env.

use anyhow::{Context, Result};
use std::env;

/// Log file used when LOG_FILE is not set.
pub const DEFAULT_LOG_FILE: &str = "logs/relay-bot.log";

/// First of `names` that is set to a non-blank value; blank variables count as unset.
fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

/// LOG_FILE, or [`DEFAULT_LOG_FILE`] when unset or blank.
pub fn log_file_from_env() -> String {
    first_env(&["LOG_FILE"]).unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
}

/// Telegram access and log path.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// BOT_TOKEN or TELEGRAM_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
}

impl TelegramConfig {
    /// Loads from env; `token` overrides BOT_TOKEN / TELEGRAM_TOKEN when given.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => first_env(&["BOT_TOKEN", "TELEGRAM_TOKEN"])
                .context("BOT_TOKEN (or TELEGRAM_TOKEN) not set")?,
        };

        Ok(Self {
            bot_token,
            telegram_api_url: first_env(&["TELEGRAM_API_URL", "TELOXIDE_API_URL"]),
            log_file: log_file_from_env(),
        })
    }

    /// Loads from env only.
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Uses the given token; everything else at defaults.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }

    /// Token must be non-empty; telegram_api_url must be a valid URL if set.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN (or TELEGRAM_TOKEN) is empty");
        }
        self.api_url()?;
        Ok(())
    }

    /// Parsed Bot API endpoint override, if any.
    pub fn api_url(&self) -> Result<Option<reqwest::Url>> {
        match self.telegram_api_url {
            Some(ref url_str) => reqwest::Url::parse(url_str).map(Some).with_context(|| {
                format!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                )
            }),
            None => Ok(None),
        }
    }

    /// Builds the teloxide Bot for this token and endpoint.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        Ok(match self.api_url()? {
            Some(url) => bot.set_api_url(url),
            None => bot,
        })
    }
}
