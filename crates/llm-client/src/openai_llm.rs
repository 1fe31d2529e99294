//! OpenAI-compatible [`LlmClient`]: wraps openai-client with a fixed model and generation params.

use async_trait::async_trait;
use prompt::ChatMessage;
use tracing::instrument;

use super::{
    chat_message_to_openai, CompletionParams, LlmClient, LlmConfig, LlmError, Provider,
};

/// LlmClient backed by openai-client. Works for any provider speaking the OpenAI chat API.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    model: String,
    params: CompletionParams,
}

impl OpenAILlmClient {
    /// Builds a client for `base_url` using the DeepSeek default model until [`Self::with_model`].
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::with_base_url(api_key, base_url),
            model: Provider::DeepSeek.default_model().to_string(),
            params: CompletionParams::default(),
        }
    }

    /// Builds a client for the provider, endpoint, model and params in `config`.
    pub fn from_config(config: &dyn LlmConfig) -> Self {
        Self::with_base_url(config.api_key().to_string(), config.base_url().to_string())
            .with_model(config.model().to_string())
            .with_params(config.params())
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_params(mut self, params: CompletionParams) -> Self {
        self.params = params;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn params(&self) -> &CompletionParams {
        &self.params
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages), fields(model = %self.model))]
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<String, LlmError> {
        let openai_messages = messages
            .iter()
            .map(chat_message_to_openai)
            .collect::<Result<Vec<_>, _>>()?;
        self.client
            .chat_completion(&self.model, openai_messages, &self.params)
            .await
    }
}
