//! REPL runner: converts teloxide messages to core::Message and hands each to the HandlerChain on
//! its own task, so a slow completion in one chat never delays another.

use anyhow::Result;
use handler_chain::HandlerChain;
use relay_core::ToCoreMessage;
use std::sync::Arc;
use teloxide::{prelude::*, types::BotCommand};
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Registers the command menu (`setMyCommands`). Failure is logged, never fatal.
pub async fn register_commands(bot: &teloxide::Bot, commands: &[(&str, &str)]) {
    let commands: Vec<BotCommand> = commands
        .iter()
        .map(|(name, description)| BotCommand::new(*name, *description))
        .collect();
    match bot.set_my_commands(commands).await {
        Ok(_) => info!("Bot commands registered"),
        Err(e) => warn!(error = %e, "Failed to register bot commands"),
    }
}

/// Runs the long-polling REPL until shutdown.
///
/// Calls `get_me()` first and stores the username in `bot_username` so command handlers can
/// recognise `/cmd@this_bot`. Each text message is converted and processed on a spawned task;
/// non-text updates are dropped here.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed, addressed commands accepted for any bot"),
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            if msg.text().is_none() {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Received non-text message, ignored"
                );
                return respond(());
            }
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_len = core_msg.content.chars().count(),
                "Received message"
            );

            tokio::spawn(async move {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_id = %core_msg.id,
                    "step: processing message (handler chain started)"
                );
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(
                        error = %e,
                        kind = ?e.kind(),
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Handler chain failed"
                    );
                }
            });

            respond(())
        }
    })
    .await;

    info!("REPL stopped");
    Ok(())
}
