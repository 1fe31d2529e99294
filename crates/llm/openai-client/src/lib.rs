//! # OpenAI API client
//!
//! Thin wrapper around [async-openai] for one non-streamed chat completion against any
//! OpenAI-compatible endpoint (OpenAI, DeepSeek, proxies). Every call is bounded by a timeout and
//! never retried; errors come back classified as [`LlmError`]. Provides token masking for safe
//! logging.

use async_openai::{types::CreateChatCompletionRequestArgs, Client};
use std::sync::Arc;
use std::time::Duration;
use tracing;

mod error;

pub use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};
pub use error::LlmError;

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        "***".to_string()
    } else {
        let head: String = chars[..7].iter().collect();
        let tail: String = chars[len - 4..].iter().collect();
        format!("{}***{}", head, tail)
    }
}

/// Generation parameters sent with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    /// Upper bound for the whole request, including connect and body read.
    pub timeout: Duration,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            temperature: Some(0.7),
            max_tokens: Some(2000),
            timeout: Duration::from_secs(60),
        }
    }
}

/// OpenAI chat client. Wraps async-openai client and keeps the API key masked for logging.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Arc<Client<async_openai::config::OpenAIConfig>>,
    masked_api_key: String,
}

/// async-openai retries 429 and 5xx on its own; a zero elapsed-time budget turns that off.
fn no_retry() -> backoff::ExponentialBackoff {
    backoff::ExponentialBackoff {
        max_elapsed_time: Some(Duration::ZERO),
        ..Default::default()
    }
}

impl OpenAIClient {
    /// Builds a client with a custom base URL (e.g. `https://api.deepseek.com/v1`).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let masked_api_key = mask_token(&api_key);
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url.trim_end_matches('/'));
        Self {
            client: Arc::new(Client::with_config(config).with_backoff(no_retry())),
            masked_api_key,
        }
    }

    /// Sends a chat completion request and returns the first choice's text.
    ///
    /// Logs masked API key, message count and token usage. Fails with [`LlmError::Timeout`] when
    /// `params.timeout` elapses and with [`LlmError::EmptyResponse`] when there is no choice or
    /// the first choice has no text.
    #[allow(deprecated)]
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
        params: &CompletionParams,
    ) -> Result<String, LlmError> {
        tracing::info!(
            model = %model,
            message_count = messages.len(),
            api_key = %self.masked_api_key,
            temperature = ?params.temperature,
            max_tokens = ?params.max_tokens,
            "OpenAI chat_completion request"
        );

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(model).messages(messages);
        if let Some(temperature) = params.temperature {
            args.temperature(temperature);
        }
        if let Some(max_tokens) = params.max_tokens {
            args.max_tokens(max_tokens);
        }
        let request = args.build()?;

        if let Ok(json) = serde_json::to_string_pretty(&request) {
            tracing::debug!(request_json = %json, "OpenAI chat_completion request JSON");
        }

        let response = tokio::time::timeout(params.timeout, self.client.chat().create(request))
            .await
            .map_err(|_| LlmError::Timeout(params.timeout))??;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI chat_completion usage"
            );
        }

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(LlmError::EmptyResponse)?;

        Ok(content)
    }
}
