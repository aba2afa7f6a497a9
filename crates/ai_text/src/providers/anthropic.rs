//! Anthropic Claude provider
//!
//! Calls the Messages API with a single user-role message. The API
//! version header is pinned; request bodies must stay bit-compatible
//! with that version.

use std::time::Duration;

use async_trait::async_trait;
use domain::ProviderId;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::TextGenConfig;
use crate::error::GenerationError;
use crate::ports::TextGenerationProvider;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Provider adapter for the Anthropic Messages API
#[derive(Debug, Clone)]
pub struct AnthropicProvider {
    client: Client,
    config: TextGenConfig,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider
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

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.anthropic_base_url)
    }
}

/// Messages API request body
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<UserMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct UserMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Messages API response body (fields we consume)
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[async_trait]
impl TextGenerationProvider for AnthropicProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Claude
    }

    #[instrument(skip(self, credential, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, credential: &str, prompt: &str) -> Result<String, GenerationError> {
        debug!(model = %self.config.claude_model, "Calling Anthropic Messages API");

        let request = MessagesRequest {
            model: &self.config.claude_model,
            max_tokens: self.config.max_tokens,
            messages: vec![UserMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", credential)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Http {
                provider: ProviderId::Claude,
                status: status.as_u16(),
                message,
            });
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        body.content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .ok_or_else(|| {
                GenerationError::InvalidResponse("Response is missing content[0].text".to_string())
            })
    }
}
