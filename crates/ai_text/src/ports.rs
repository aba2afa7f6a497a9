//! Port definitions for text generation
//!
//! Defines the trait that provider adapters must implement.

use async_trait::async_trait;
use domain::ProviderId;

use crate::error::GenerationError;

/// Port for a single LLM text-generation vendor
///
/// Implementations differ only in endpoint, request envelope,
/// authentication scheme, and response extraction path.
///
/// # Example
///
/// ```ignore
/// use ai_text::{TextGenerationProvider, GenerationError};
///
/// async fn first_line(
///     provider: &impl TextGenerationProvider,
///     key: &str,
/// ) -> Result<String, GenerationError> {
///     let text = provider.generate(key, "Napisz jedno zdanie.").await?;
///     Ok(text.lines().next().unwrap_or_default().to_string())
/// }
/// ```
#[async_trait]
pub trait TextGenerationProvider: Send + Sync {
    /// Identifier of the vendor behind this adapter
    fn id(&self) -> ProviderId;

    /// Send a prompt and return the generated text
    ///
    /// # Arguments
    ///
    /// * `credential` - API secret for this provider
    /// * `prompt` - Fully rendered prompt text
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` if the call fails or the response is
    /// missing the expected content field.
    async fn generate(&self, credential: &str, prompt: &str) -> Result<String, GenerationError>;
}
