//! Relay handler: one inbound text → one completion request → one or more replies in the same chat.

use async_trait::async_trait;
use llm_client::LlmClient;
use relay_core::{Bot, ErrorKind, Handler, HandlerResponse, Message, RelayError, Result};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use crate::chunking::{split_reply, TELEGRAM_MAX_MESSAGE_LEN};

/// Fixed marker every failure notice starts with.
pub const FAILURE_NOTICE_PREFIX: &str = "Sorry, an error occurred: ";

const LOG_PREVIEW_CHARS: usize = 50;

/// How much of an error the user gets to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureStyle {
    /// Marker followed by the raw error text.
    #[default]
    Detailed,
    /// Marker followed by a fixed description of the error kind; raw text only goes to the log.
    Sanitized,
}

impl FailureStyle {
    fn describe(&self, err: &RelayError) -> String {
        match self {
            FailureStyle::Detailed => err.to_string(),
            FailureStyle::Sanitized => match err.kind() {
                ErrorKind::Upstream => {
                    "the AI service did not answer, please try again later.".to_string()
                }
                ErrorKind::Transport => "the reply could not be delivered.".to_string(),
                ErrorKind::Configuration => "the bot is not configured correctly.".to_string(),
            },
        }
    }
}

fn preview(text: &str) -> String {
    text.chars().take(LOG_PREVIEW_CHARS).collect()
}

/// Relays plain text messages to the completion API.
///
/// Stateless between messages: every call builds a fresh request from the inbound text, so one
/// instance can serve any number of concurrent messages from any chats.
#[derive(Clone)]
pub struct RelayHandler {
    llm_client: Arc<dyn LlmClient>,
    bot: Arc<dyn Bot>,
    system_prompt: Option<String>,
    max_message_chars: usize,
    failure_style: FailureStyle,
}

impl RelayHandler {
    /// Creates a relay with the default system instruction, Telegram's message limit and detailed failure notices.
    pub fn new(llm_client: Arc<dyn LlmClient>, bot: Arc<dyn Bot>) -> Self {
        Self {
            llm_client,
            bot,
            system_prompt: Some(prompt::DEFAULT_SYSTEM_MESSAGE.to_string()),
            max_message_chars: TELEGRAM_MAX_MESSAGE_LEN,
            failure_style: FailureStyle::default(),
        }
    }

    /// Sets the system instruction; None sends the user turn alone.
    pub fn with_system_prompt(mut self, system_prompt: Option<String>) -> Self {
        self.system_prompt = system_prompt;
        self
    }

    pub fn with_max_message_chars(mut self, max_message_chars: usize) -> Self {
        self.max_message_chars = max_message_chars;
        self
    }

    pub fn with_failure_style(mut self, failure_style: FailureStyle) -> Self {
        self.failure_style = failure_style;
        self
    }

    /// Text sent to the chat when relaying `err` failed.
    pub fn failure_notice(&self, err: &RelayError) -> String {
        format!("{}{}", FAILURE_NOTICE_PREFIX, self.failure_style.describe(err))
    }

    /// Typing indicator, completion call and reply delivery. Returns the full reply text.
    ///
    /// The typing indicator is best-effort; every later failure is returned as a [`RelayError`].
    #[instrument(
        skip(self, message, text),
        fields(chat_id = message.chat.id, user_id = message.user.id)
    )]
    pub async fn relay(&self, message: &Message, text: &str) -> Result<String> {
        if let Err(e) = self.bot.send_typing(&message.chat).await {
            warn!(chat_id = message.chat.id, error = %e, "Failed to send typing indicator");
        }

        let messages = prompt::relay_messages(self.system_prompt.as_deref(), text);
        info!(
            chat_id = message.chat.id,
            message_count = messages.len(),
            "step: calling completion API"
        );

        let reply = self
            .llm_client
            .get_llm_response_with_messages(messages)
            .await
            .map_err(|e| RelayError::Upstream(e.to_string()))?;
        if reply.is_empty() {
            return Err(RelayError::Upstream(
                llm_client::LlmError::EmptyResponse.to_string(),
            ));
        }

        let chunks = split_reply(&reply, self.max_message_chars);
        info!(
            chat_id = message.chat.id,
            reply_len = reply.chars().count(),
            chunk_count = chunks.len(),
            reply_preview = %preview(&reply),
            "step: completion received"
        );

        for chunk in &chunks {
            self.bot.reply_to(message, chunk).await?;
        }

        Ok(reply)
    }
}

#[async_trait]
impl Handler for RelayHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.is_command() {
            debug!(chat_id = message.chat.id, "Command not relayed");
            return Ok(HandlerResponse::Continue);
        }
        if message.text().is_none() {
            debug!(chat_id = message.chat.id, "No text in message, nothing to relay");
            return Ok(HandlerResponse::Continue);
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_preview = %preview(&message.content),
            "Relaying message"
        );

        match self.relay(message, &message.content).await {
            Ok(reply) => {
                info!(user_id = message.user.id, chat_id = message.chat.id, "Reply sent");
                Ok(HandlerResponse::Reply(reply))
            }
            Err(e) => {
                error!(
                    user_id = message.user.id,
                    chat_id = message.chat.id,
                    kind = ?e.kind(),
                    error = %e,
                    "Relay failed"
                );
                let notice = self.failure_notice(&e);
                if let Err(send_err) = self.bot.reply_to(message, &notice).await {
                    error!(
                        chat_id = message.chat.id,
                        error = %send_err,
                        "Failed to send failure notice"
                    );
                }
                Ok(HandlerResponse::Reply(notice))
            }
        }
    }
}
