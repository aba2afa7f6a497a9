//! OpenAI provider
//!
//! Calls the Chat Completions API with a single user-role message and
//! consumes the first choice's message content.

use std::time::Duration;

use async_trait::async_trait;
use domain::ProviderId;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::TextGenConfig;
use crate::error::GenerationError;
use crate::ports::TextGenerationProvider;

/// Provider adapter for the OpenAI Chat Completions API
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: Client,
    config: TextGenConfig,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::Configuration` if the HTTP client
    /// cannot be built.
    pub fn new(config: TextGenConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                GenerationError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.config.openai_base_url)
    }
}

/// Chat Completions request body
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat Completions response body (fields we consume)
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl TextGenerationProvider for OpenAiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::OpenAi
    }

    #[instrument(skip(self, credential, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, credential: &str, prompt: &str) -> Result<String, GenerationError> {
        debug!(model = %self.config.openai_model, "Calling OpenAI Chat Completions API");

        let request = ChatRequest {
            model: &self.config.openai_model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(credential)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Http {
                provider: ProviderId::OpenAi,
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                GenerationError::InvalidResponse(
                    "Response is missing choices[0].message.content".to_string(),
                )
            })
    }
}
