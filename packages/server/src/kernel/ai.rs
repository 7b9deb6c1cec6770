// AI implementation using OpenAI
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in domain layers.

use anyhow::Result;
use async_trait::async_trait;
use openai_client::{ChatRequest, Message};
use tracing::instrument;

use super::{BaseAI, CompletionOptions};

/// OpenAI implementation of AI capabilities
#[derive(Clone)]
pub struct OpenAIClient {
    client: openai_client::OpenAIClient,
    model: String,
}

impl OpenAIClient {
    pub fn new(api_key: String, model: impl Into<String>) -> Self {
        Self {
            client: openai_client::OpenAIClient::new(api_key),
            model: model.into(),
        }
    }

    /// Point at a different API host (proxies, local mocks).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }
}

#[async_trait]
impl BaseAI for OpenAIClient {
    #[instrument(skip_all, fields(model = %self.model, max_tokens = options.max_tokens))]
    async fn complete_json(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: CompletionOptions,
    ) -> Result<String> {
        let request = ChatRequest::new(&self.model)
            .message(Message::system(system_prompt))
            .message(Message::user(user_prompt))
            .temperature(options.temperature)
            .max_tokens(options.max_tokens)
            .json_mode();

        let response = self.client.chat_completion(request).await?;
        Ok(response.content)
    }
}
