//! `/start` and `/help`: static replies, no completion call.

use async_trait::async_trait;
use relay_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Commands the bot answers and registers with the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
}

impl Command {
    pub const ALL: [Command; 2] = [Command::Start, Command::Help];

    /// Command name without the leading slash.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Start => "Start the bot",
            Command::Help => "Show usage",
        }
    }

    /// Parses the first word of `text` as a command.
    ///
    /// `/help@other_bot` is rejected when `bot_username` is known and differs, so in groups the
    /// bot only answers commands addressed to it.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Command> {
        let word = text.trim_start().split_whitespace().next()?;
        let word = word.strip_prefix('/')?;
        let (name, target) = match word.split_once('@') {
            Some((name, target)) => (name, Some(target)),
            None => (word, None),
        };
        if let (Some(target), Some(username)) = (target, bot_username) {
            if !target.eq_ignore_ascii_case(username) {
                return None;
            }
        }
        Command::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Greeting sent for `/start`.
pub fn start_text(provider_name: &str) -> String {
    format!(
        "Hello! I'm an AI assistant powered by {}. Send me a message and I'll reply.",
        provider_name
    )
}

/// Usage text sent for `/help`.
pub fn help_text(provider_name: &str) -> String {
    let mut text = format!(
        "Send me any text message and I'll answer it with {}.\n\
         Every message is answered on its own; earlier messages are not remembered.\n\nCommands:\n",
        provider_name
    );
    for command in Command::ALL {
        text.push_str(&format!("/{} - {}\n", command.name(), command.description()));
    }
    text
}

/// Answers known commands; swallows unknown ones so they are never relayed.
pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    start_text: String,
    help_text: String,
}

impl CommandHandler {
    /// `bot_username` is filled by the runner once `getMe` answers; until then every `@target` is accepted.
    pub fn new(
        bot: Arc<dyn Bot>,
        bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
        provider_name: &str,
    ) -> Self {
        Self {
            bot,
            bot_username,
            start_text: start_text(provider_name),
            help_text: help_text(provider_name),
        }
    }

    fn reply_for(&self, command: Command) -> &str {
        match command {
            Command::Start => &self.start_text,
            Command::Help => &self.help_text,
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_command() {
            return Ok(HandlerResponse::Ignore);
        }

        let username = self.bot_username.read().await.clone();
        let Some(command) = Command::parse(&message.content, username.as_deref()) else {
            debug!(
                chat_id = message.chat.id,
                content = %message.content,
                "Unknown command ignored"
            );
            return Ok(HandlerResponse::Stop);
        };

        let reply = self.reply_for(command).to_string();
        self.bot.reply_to(message, &reply).await?;
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            command = command.name(),
            "Command answered"
        );
        Ok(HandlerResponse::Reply(reply))
    }
}
