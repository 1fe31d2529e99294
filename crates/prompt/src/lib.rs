//! # Prompt
//!
//! Role-tagged chat messages and the turn layout the relay sends to the completion API.
//!
//! ## Layout
//!
//! - **System** (optional): one fixed instruction, first in the list
//! - **User**: the inbound message text, always last
//!
//! No history is carried between messages; every request is built fresh from one inbound text.

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

impl MessageRole {
    /// Wire value of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Default system instruction when no custom system prompt is configured.
pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are a friendly, helpful AI assistant. \
Reply in the same language the user writes in, and keep answers concise. \
Use plain text without Markdown so the reply reads well in Telegram.";

/// Builds the turns for one relay request: optional system instruction, then the user text.
///
/// A system message that is blank after trimming is dropped.
pub fn relay_messages(system_message: Option<&str>, user_text: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = system_message.filter(|s| !s.trim().is_empty()) {
        messages.push(ChatMessage::system(system));
    }
    messages.push(ChatMessage::user(user_text));
    messages
}
