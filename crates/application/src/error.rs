//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Every candidate provider failed or had no credential
    #[error("No working provider available")]
    NoProviderAvailable,

    /// Text generation failed
    #[error("Generation error: {0}")]
    Generation(String),

    /// History persistence failed
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the error is the fatal stage-1 outcome the end user sees
    #[must_use]
    pub const fn is_no_provider(&self) -> bool {
        matches!(self, Self::NoProviderAvailable)
    }
}
