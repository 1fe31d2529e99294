//! **Public API of this crate.** [`run_bot_with_llm`] runs the Telegram bot; [`ask_once`] sends a
//! single message to the completion API without Telegram.

use anyhow::{Context, Result};
use llm_client::{mask_token, EnvLlmConfig, LlmClient, LlmConfig};
use relay_core::{init_tracing, Bot};
use relay_handlers::Command;
use relay_telegram::{log_file_from_env, register_commands, run_repl, TelegramBotAdapter};
use std::sync::Arc;
use tracing::info;

use crate::assembly::{build_handler_chain, build_llm_client};
use crate::config::BotConfig;

fn log_llm_config(llm: &EnvLlmConfig) {
    info!(
        provider = %llm.provider(),
        base_url = %llm.base_url(),
        model = %llm.model(),
        api_key = %mask_token(llm.api_key()),
        temperature = ?llm.temperature,
        max_tokens = ?llm.max_tokens,
        timeout_secs = llm.timeout.as_secs(),
        "Completion API configured"
    );
}

/// Runs the bot until the REPL stops. Load config with [`BotConfig::load`] before calling.
pub async fn run_bot_with_llm(config: BotConfig) -> Result<()> {
    init_tracing(&config.telegram.log_file, true)
        .with_context(|| format!("Failed to open log file {}", config.telegram.log_file))?;
    info!(
        log_file = %config.telegram.log_file,
        telegram_api_url = ?config.telegram.telegram_api_url,
        failure_style = ?config.failure_style,
        "Starting relay bot"
    );
    log_llm_config(&config.llm);

    let teloxide_bot = config.telegram.build_bot()?;
    let commands: Vec<(&str, &str)> = Command::ALL
        .iter()
        .map(|c| (c.name(), c.description()))
        .collect();
    register_commands(&teloxide_bot, &commands).await;

    let bot_username = Arc::new(tokio::sync::RwLock::new(None));
    let bot_adapter: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let llm_client = build_llm_client(&config.llm);
    let chain = build_handler_chain(&config, llm_client, bot_adapter, bot_username.clone());

    run_repl(teloxide_bot, chain, bot_username).await
}

/// Sends `text` with the configured system prompt and returns the completion. Reads LLM config
/// from env; no Telegram token needed. Logs go to the log file only so stdout holds just the reply.
pub async fn ask_once(text: &str) -> Result<String> {
    let log_file = log_file_from_env();
    init_tracing(&log_file, false)
        .with_context(|| format!("Failed to open log file {}", log_file))?;

    let llm = EnvLlmConfig::from_env()?;
    log_llm_config(&llm);

    let client = build_llm_client(&llm);
    let messages = prompt::relay_messages(llm.system_prompt(), text);
    let reply = client.get_llm_response_with_messages(messages).await?;
    Ok(reply)
}
