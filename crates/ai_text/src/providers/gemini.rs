//! Google Gemini provider
//!
//! Calls `generateContent` with the API key in the query string. Model
//! identifiers are tried in configured order: any failure (non-success
//! status or a response missing the content field) advances to the next
//! identifier, and the call fails only after the whole list is
//! exhausted, surfacing the last error. Vendors deprecate Gemini model
//! names faster than releases ship, so the list is part of the contract.

use std::time::Duration;

use async_trait::async_trait;
use domain::ProviderId;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::TextGenConfig;
use crate::error::GenerationError;
use crate::ports::TextGenerationProvider;

/// Provider adapter for the Gemini generateContent API
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: Client,
    config: TextGenConfig,
}

impl GeminiProvider {
    /// Create a new Gemini provider
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

    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{model}:generateContent",
            self.config.gemini_base_url
        )
    }

    /// Attempt a single model identifier
    async fn generate_with_model(
        &self,
        model: &str,
        credential: &str,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.generate_url(model))
            .query(&[("key", credential)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Http {
                provider: ProviderId::Gemini,
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        body.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| {
                GenerationError::InvalidResponse(
                    "Response is missing candidates[0].content.parts[0].text".to_string(),
                )
            })
    }
}

/// generateContent request body
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// generateContent response body (fields we consume)
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[async_trait]
impl TextGenerationProvider for GeminiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    #[instrument(skip(self, credential, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, credential: &str, prompt: &str) -> Result<String, GenerationError> {
        let mut last_error: Option<GenerationError> = None;

        for model in &self.config.gemini_models {
            debug!(model = %model, "Calling Gemini generateContent API");
            match self.generate_with_model(model, credential, prompt).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    warn!(model = %model, error = %e, "Gemini model failed, trying next");
                    last_error = Some(e);
                },
            }
        }

        Err(last_error.unwrap_or_else(|| {
            GenerationError::Configuration("No Gemini models configured".to_string())
        }))
    }
}
