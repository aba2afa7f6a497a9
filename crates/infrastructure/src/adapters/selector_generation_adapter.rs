//! Selector generation adapter - Implements GenerationPort using ai_text

use ai_text::{GenerationError, ProviderSelector, TextGenConfig};
use application::{error::ApplicationError, ports::GenerationPort};
use async_trait::async_trait;
use domain::{ApiKeys, ProviderId};
use tracing::instrument;

/// Adapter exposing the provider fallback chain as a generation port
#[derive(Debug, Clone)]
pub struct SelectorGenerationAdapter {
    selector: ProviderSelector,
}

impl SelectorGenerationAdapter {
    /// Create an adapter over an existing selector
    #[must_use]
    pub const fn new(selector: ProviderSelector) -> Self {
        Self { selector }
    }

    /// Create an adapter with the three real vendor adapters
    pub fn from_config(config: &TextGenConfig) -> Result<Self, ApplicationError> {
        ProviderSelector::from_config(config)
            .map(Self::new)
            .map_err(Self::map_error)
    }

    /// Convert ai_text errors to application errors
    fn map_error(e: GenerationError) -> ApplicationError {
        match e {
            GenerationError::NoProviderAvailable => ApplicationError::NoProviderAvailable,
            GenerationError::Configuration(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::Generation(other.to_string()),
        }
    }
}

#[async_trait]
impl GenerationPort for SelectorGenerationAdapter {
    #[instrument(skip(self, keys, prompt), fields(preference = %preference))]
    async fn generate(
        &self,
        keys: &ApiKeys,
        prompt: &str,
        preference: ProviderId,
    ) -> Result<String, ApplicationError> {
        self.selector
            .generate(keys, prompt, preference)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ai_text::TextGenerationProvider;

    use super::*;

    struct FixedProvider {
        id: ProviderId,
        text: String,
    }

    #[async_trait]
    impl TextGenerationProvider for FixedProvider {
        fn id(&self) -> ProviderId {
            self.id
        }

        async fn generate(&self, _credential: &str, _prompt: &str) -> Result<String, GenerationError> {
            Ok(self.text.clone())
        }
    }

    #[tokio::test]
    async fn delegates_to_the_selector() {
        let selector = ProviderSelector::new(vec![Arc::new(FixedProvider {
            id: ProviderId::Claude,
            text: "wygenerowany tekst".to_string(),
        })]);
        let adapter = SelectorGenerationAdapter::new(selector);

        let keys = ApiKeys::default().with_claude("c-key");
        let text = adapter
            .generate(&keys, "prompt", ProviderId::Claude)
            .await
            .unwrap();
        assert_eq!(text, "wygenerowany tekst");
    }

    #[tokio::test]
    async fn maps_exhaustion_to_no_provider_available() {
        let selector = ProviderSelector::new(vec![]);
        let adapter = SelectorGenerationAdapter::new(selector);

        let result = adapter
            .generate(&ApiKeys::default(), "prompt", ProviderId::Claude)
            .await;
        assert!(matches!(result, Err(ApplicationError::NoProviderAvailable)));
    }

    #[test]
    fn maps_configuration_errors() {
        let mapped = SelectorGenerationAdapter::map_error(GenerationError::Configuration(
            "bad timeout".to_string(),
        ));
        assert!(matches!(mapped, ApplicationError::Configuration(_)));
    }

    #[test]
    fn maps_transport_errors_to_generation() {
        let mapped = SelectorGenerationAdapter::map_error(GenerationError::Timeout(1000));
        assert!(matches!(mapped, ApplicationError::Generation(_)));
    }
}
