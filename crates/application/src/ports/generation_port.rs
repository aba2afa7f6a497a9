//! Generation port - Interface for provider-backed text generation

use async_trait::async_trait;
use domain::{ApiKeys, ProviderId};

use crate::error::ApplicationError;

/// Port for sending a rendered prompt to the best available provider
///
/// Implementations own provider fallback; the pipeline only states a
/// preference per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationPort: Send + Sync {
    /// Generate text for a prompt, preferring the given provider
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NoProviderAvailable` when every
    /// candidate with a credential has failed or no credential exists.
    async fn generate(
        &self,
        keys: &ApiKeys,
        prompt: &str,
        preference: ProviderId,
    ) -> Result<String, ApplicationError>;
}
