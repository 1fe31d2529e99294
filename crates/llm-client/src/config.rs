//! LLM configuration: provider presets, trait, and env-based implementation.

use anyhow::{bail, Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::CompletionParams;

/// Supported OpenAI-compatible providers. Each has one fixed default endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    DeepSeek,
    OpenAI,
}

impl Provider {
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::DeepSeek => "https://api.deepseek.com/v1",
            Provider::OpenAI => "https://api.openai.com/v1",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::DeepSeek => "deepseek-chat",
            Provider::OpenAI => "gpt-3.5-turbo",
        }
    }

    /// Provider-specific API key variable, read when `LLM_API_KEY` is unset.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Provider::DeepSeek => "DEEPSEEK_API_KEY",
            Provider::OpenAI => "OPENAI_API_KEY",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::DeepSeek => "DeepSeek",
            Provider::OpenAI => "OpenAI",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Provider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deepseek" => Ok(Provider::DeepSeek),
            "openai" => Ok(Provider::OpenAI),
            other => bail!("unknown LLM_PROVIDER '{}': expected deepseek or openai", other),
        }
    }
}

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn provider(&self) -> Provider;
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn params(&self) -> CompletionParams;
    /// System instruction sent before the user turn; None sends the user turn alone.
    fn system_prompt(&self) -> Option<&str>;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub provider: Provider,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout: Duration,
    pub system_prompt: Option<String>,
}

impl LlmConfig for EnvLlmConfig {
    fn provider(&self) -> Provider {
        self.provider
    }
    fn api_key(&self) -> &str {
        &self.api_key
    }
    fn base_url(&self) -> &str {
        &self.base_url
    }
    fn model(&self) -> &str {
        &self.model
    }
    fn params(&self) -> CompletionParams {
        CompletionParams {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            timeout: self.timeout,
        }
    }
    fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }
}

/// First non-empty value among the given variables.
fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

fn parse_env<T: FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: fmt::Display,
{
    match first_env(&[name]) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("{} has invalid value '{}': {}", name, raw, e)),
    }
}

impl EnvLlmConfig {
    /// Loads from environment variables. Fails when no API key is set for the chosen provider.
    ///
    /// `LLM_SYSTEM_PROMPT=none` disables the system turn; unset or blank uses
    /// [`prompt::DEFAULT_SYSTEM_MESSAGE`].
    pub fn from_env() -> Result<Self> {
        let provider = match first_env(&["LLM_PROVIDER"]) {
            Some(raw) => raw.parse()?,
            None => Provider::DeepSeek,
        };

        let api_key = first_env(&["LLM_API_KEY", provider.api_key_env()]).with_context(|| {
            format!(
                "LLM API key not set: set LLM_API_KEY or {}",
                provider.api_key_env()
            )
        })?;

        let base_url = first_env(&["LLM_BASE_URL", "OPENAI_BASE_URL"])
            .unwrap_or_else(|| provider.default_base_url().to_string());
        let model = first_env(&["MODEL", "LLM_MODEL"])
            .unwrap_or_else(|| provider.default_model().to_string());

        let defaults = CompletionParams::default();
        let temperature = parse_env::<f32>("LLM_TEMPERATURE")?.or(defaults.temperature);
        let max_tokens = parse_env::<u32>("LLM_MAX_TOKENS")?.or(defaults.max_tokens);
        let timeout = parse_env::<u64>("LLM_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let system_prompt = match first_env(&["LLM_SYSTEM_PROMPT", "SYSTEM_PROMPT"]) {
            Some(s) if s.eq_ignore_ascii_case("none") => None,
            Some(s) => Some(s),
            None => Some(prompt::DEFAULT_SYSTEM_MESSAGE.to_string()),
        };

        let config = Self {
            provider,
            api_key,
            base_url,
            model,
            temperature,
            max_tokens,
            timeout,
            system_prompt,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges. Called by `from_env`; call again after editing fields by hand.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            bail!("LLM API key is empty");
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            bail!(
                "LLM_BASE_URL must start with http:// or https://: {}",
                self.base_url
            );
        }
        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                bail!("LLM_TEMPERATURE must be between 0.0 and 2.0, got {}", t);
            }
        }
        if self.max_tokens == Some(0) {
            bail!("LLM_MAX_TOKENS must be greater than 0");
        }
        if self.timeout.is_zero() {
            bail!("LLM_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }
}
