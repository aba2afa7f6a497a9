//! Text-generation errors

use domain::ProviderId;
use thiserror::Error;

/// Timeout reported when reqwest does not expose the configured value
const DEFAULT_TIMEOUT_MS: u64 = 120_000;

/// Errors that can occur while generating text
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Failed to connect to the provider
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the provider failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Provider answered with a non-success status
    #[error("{provider} API error: status {status}: {message}")]
    Http {
        provider: ProviderId,
        status: u16,
        message: String,
    },

    /// Response body did not contain the expected content field
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during generation
    #[error("Generation timeout after {0}ms")]
    Timeout(u64),

    /// Every candidate provider failed or had no credential
    #[error("No working provider available")]
    NoProviderAvailable,

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(DEFAULT_TIMEOUT_MS)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
