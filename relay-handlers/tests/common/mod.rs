//! Test doubles for relay handler tests: a recording [`Bot`] and a scripted [`LlmClient`].

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use llm_client::{LlmClient, LlmError};
use prompt::ChatMessage;
use relay_core::{Bot, Chat, Message, RelayError, Result, User};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// One outbound call seen by [`MockBot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Typing { chat_id: i64 },
    Text { chat_id: i64, text: String },
}

/// Bot that records every outbound call; typing and/or sends can be made to fail.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    pub fail_typing: bool,
    /// Number of text sends that succeed before every later one fails; None never fails.
    pub fail_sends_after: Option<usize>,
    /// Zero-based index of the single text send that fails; None never fails.
    pub fail_send_at: Option<usize>,
    sends: AtomicUsize,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_typing() -> Self {
        Self {
            fail_typing: true,
            ..Self::default()
        }
    }

    pub fn failing_sends_after(limit: usize) -> Self {
        Self {
            fail_sends_after: Some(limit),
            ..Self::default()
        }
    }

    pub fn failing_send_at(index: usize) -> Self {
        Self {
            fail_send_at: Some(index),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Texts sent to `chat_id`, in order.
    pub fn texts_for(&self, chat_id: i64) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { chat_id: id, text } if id == chat_id => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn typing_count(&self) -> usize {
        self.sent()
            .iter()
            .filter(|s| matches!(s, Sent::Typing { .. }))
            .count()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        let n = self.sends.fetch_add(1, Ordering::SeqCst);
        if self.fail_sends_after.is_some_and(|limit| n >= limit) || self.fail_send_at == Some(n) {
            return Err(RelayError::Bot("Forbidden: bot was blocked by the user".to_string()));
        }
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        if self.fail_typing {
            return Err(RelayError::Bot("typing not allowed".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push(Sent::Typing { chat_id: chat.id });
        Ok(())
    }
}

/// What [`ScriptedLlm`] answers with.
pub enum Script {
    /// Fixed reply for every request.
    Reply(String),
    /// Reply computed from the user turn, after an optional delay.
    Echo { prefix: String, delay: Duration },
    /// Fixed error for every request.
    Fail(fn() -> LlmError),
}

/// LlmClient that answers from a script and records every request it receives.
pub struct ScriptedLlm {
    script: Script,
    requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedLlm {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(text: impl Into<String>) -> Self {
        Self::new(Script::Reply(text.into()))
    }

    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> std::result::Result<String, LlmError> {
        let user_text = messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        self.requests.lock().unwrap().push(messages);
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Echo { prefix, delay } => {
                tokio::time::sleep(*delay).await;
                Ok(format!("{}{}", prefix, user_text))
            }
            Script::Fail(make_error) => Err(make_error()),
        }
    }
}

pub fn make_message(chat_id: i64, content: &str) -> Message {
    Message {
        id: format!("msg_{}", chat_id),
        user: User {
            id: chat_id * 10,
            username: Some("user".to_string()),
            first_name: Some("User".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}
