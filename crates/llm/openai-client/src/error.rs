//! Completion errors, classified from async-openai's error type.

use async_openai::error::OpenAIError;
use std::time::Duration;
use thiserror::Error;

/// Why a chat completion produced no usable text.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("rate limited by provider: {0}")]
    RateLimited(String),

    #[error("provider returned an error: {0}")]
    Api(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("empty response: no choices or no content")]
    EmptyResponse,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<OpenAIError> for LlmError {
    fn from(e: OpenAIError) -> Self {
        match e {
            OpenAIError::Reqwest(e) => LlmError::Network(e.to_string()),
            OpenAIError::ApiError(api) => {
                let rate_limited = api
                    .r#type
                    .as_deref()
                    .is_some_and(|t| t.contains("rate_limit"))
                    || api.message.to_lowercase().contains("rate limit");
                if rate_limited {
                    LlmError::RateLimited(api.message)
                } else {
                    LlmError::Api(api.message)
                }
            }
            OpenAIError::JSONDeserialize(e) => LlmError::Malformed(e.to_string()),
            OpenAIError::InvalidArgument(s) => LlmError::InvalidRequest(s),
            other => LlmError::Api(other.to_string()),
        }
    }
}
