//! Bot abstraction for outbound chat traffic.
//!
//! [`Bot`] is transport-agnostic; relay-telegram implements it over teloxide and tests substitute a
//! recording mock.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Outbound side of a chat transport: plain text messages and the "typing" indicator.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    /// Shows a transient "typing" indicator in the chat. Callers treat failures as non-fatal.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::User;
    use std::sync::Mutex;

    struct RecordingBot {
        sent: Mutex<Vec<(i64, String)>>,
    }

    #[async_trait]
    impl Bot for RecordingBot {
        async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
            self.sent.lock().unwrap().push((chat.id, text.to_string()));
            Ok(())
        }

        async fn send_typing(&self, _chat: &Chat) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_reply_to_defaults_to_message_chat() {
        let bot = RecordingBot {
            sent: Mutex::new(Vec::new()),
        };
        let message = Message {
            id: "1".to_string(),
            user: User {
                id: 7,
                username: None,
                first_name: None,
                last_name: None,
            },
            chat: Chat {
                id: 42,
                chat_type: "private".to_string(),
            },
            content: "hi".to_string(),
            message_type: "text".to_string(),
            created_at: chrono::Utc::now(),
        };

        bot.reply_to(&message, "hello").await.unwrap();

        assert_eq!(*bot.sent.lock().unwrap(), vec![(42, "hello".to_string())]);
    }
}
