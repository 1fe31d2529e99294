//! Bot config: Telegram access + completion API + failure notice style. Loaded and validated once
//! at startup; a missing token or API key stops the process before it polls.

use llm_client::EnvLlmConfig;
use relay_core::{RelayError, Result};
use relay_handlers::FailureStyle;
use relay_telegram::TelegramConfig;
use std::env;

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub llm: EnvLlmConfig,
    /// RELAY_ERROR_DETAIL: `detailed`/`true` (default) or `sanitized`/`false`
    pub failure_style: FailureStyle,
}

fn parse_failure_style(raw: Option<String>) -> Result<FailureStyle> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(FailureStyle::default()),
        Some(s) if s.eq_ignore_ascii_case("detailed") || s.eq_ignore_ascii_case("true") => {
            Ok(FailureStyle::Detailed)
        }
        Some(s) if s.eq_ignore_ascii_case("sanitized") || s.eq_ignore_ascii_case("false") => {
            Ok(FailureStyle::Sanitized)
        }
        Some(s) => Err(RelayError::Config(format!(
            "RELAY_ERROR_DETAIL must be 'detailed' (true) or 'sanitized' (false), got '{}'",
            s
        ))),
    }
}

fn config_error(e: anyhow::Error) -> RelayError {
    RelayError::Config(format!("{:#}", e))
}

impl BotConfig {
    /// Loads from env. `token` overrides BOT_TOKEN if provided.
    ///
    /// Every failure is a [`RelayError::Config`].
    pub fn load(token: Option<String>) -> Result<Self> {
        let config = Self {
            telegram: TelegramConfig::load(token).map_err(config_error)?,
            llm: EnvLlmConfig::from_env().map_err(config_error)?,
            failure_style: parse_failure_style(env::var("RELAY_ERROR_DETAIL").ok())?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate().map_err(config_error)?;
        self.llm.validate().map_err(config_error)?;
        Ok(())
    }
}
