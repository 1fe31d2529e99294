//! Assembly: builds the completion client and the handler chain. Used by the [facade](crate::facade).

use handler_chain::HandlerChain;
use llm_client::{EnvLlmConfig, LlmClient, LlmConfig, OpenAILlmClient};
use relay_core::Bot;
use relay_handlers::{CommandHandler, RelayHandler};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::config::BotConfig;

/// Completion client for the configured provider, base URL, model and parameters.
pub fn build_llm_client(config: &EnvLlmConfig) -> Arc<dyn LlmClient> {
    Arc::new(OpenAILlmClient::from_config(config))
}

/// Chain order: commands first (never relayed), then the relay for everything else.
pub fn build_handler_chain(
    config: &BotConfig,
    llm_client: Arc<dyn LlmClient>,
    bot: Arc<dyn Bot>,
    bot_username: Arc<RwLock<Option<String>>>,
) -> HandlerChain {
    let system_prompt = config.llm.system_prompt().map(String::from);
    match system_prompt {
        Some(ref s) => {
            let prefix: String = s.chars().take(50).collect();
            info!(len = s.chars().count(), prefix = %prefix, "Using system prompt");
        }
        None => info!("System prompt disabled; sending the user turn only"),
    }

    let command_handler = CommandHandler::new(
        bot.clone(),
        bot_username,
        config.llm.provider().display_name(),
    );
    let relay_handler = RelayHandler::new(llm_client, bot)
        .with_system_prompt(system_prompt)
        .with_failure_style(config.failure_style);

    HandlerChain::new()
        .add_handler(Arc::new(command_handler))
        .add_handler(Arc::new(relay_handler))
}
