//! Preference-ordered provider selection
//!
//! Builds a priority chain over the three vendors and walks it until
//! one call succeeds. A transient failure or missing key for the
//! preferred vendor never blocks generation as long as another vendor's
//! credential is present and functional.

use std::fmt;
use std::sync::Arc;

use domain::{ApiKeys, ProviderId};
use tracing::{debug, instrument, warn};

use crate::config::TextGenConfig;
use crate::error::GenerationError;
use crate::ports::TextGenerationProvider;
use crate::providers::{AnthropicProvider, GeminiProvider, OpenAiProvider};

/// Fallback chain over the configured provider adapters
#[derive(Clone)]
pub struct ProviderSelector {
    providers: Vec<Arc<dyn TextGenerationProvider>>,
}

impl fmt::Debug for ProviderSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<ProviderId> = self.providers.iter().map(|p| p.id()).collect();
        f.debug_struct("ProviderSelector")
            .field("providers", &ids)
            .finish()
    }
}

impl ProviderSelector {
    /// Create a selector over the given adapters
    ///
    /// Intended for tests and alternative backends; production code
    /// uses [`ProviderSelector::from_config`].
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn TextGenerationProvider>>) -> Self {
        Self { providers }
    }

    /// Create a selector with the three real vendor adapters
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::Configuration` if an HTTP client
    /// cannot be built.
    pub fn from_config(config: &TextGenConfig) -> Result<Self, GenerationError> {
        Ok(Self::new(vec![
            Arc::new(AnthropicProvider::new(config.clone())?),
            Arc::new(OpenAiProvider::new(config.clone())?),
            Arc::new(GeminiProvider::new(config.clone())?),
        ]))
    }

    /// Priority order for a preference: the fixed fallback base order
    /// with the preferred provider moved to the front
    #[must_use]
    pub fn priority_order(preference: ProviderId) -> [ProviderId; 3] {
        let mut order = ProviderId::FALLBACK_ORDER;
        if let Some(pos) = order.iter().position(|p| *p == preference) {
            order[..=pos].rotate_right(1);
        }
        order
    }

    fn provider(&self, id: ProviderId) -> Option<&Arc<dyn TextGenerationProvider>> {
        self.providers.iter().find(|p| p.id() == id)
    }

    /// Send a prompt to the best available provider
    ///
    /// Walks the priority chain, skipping providers without a
    /// credential; first success wins. Per-provider failures are logged
    /// and the chain advances.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::NoProviderAvailable` when every
    /// candidate with a credential has failed or no credential exists.
    #[instrument(skip(self, keys, prompt), fields(preference = %preference, prompt_len = prompt.len()))]
    pub async fn generate(
        &self,
        keys: &ApiKeys,
        prompt: &str,
        preference: ProviderId,
    ) -> Result<String, GenerationError> {
        for id in Self::priority_order(preference) {
            let Some(credential) = keys.get(id) else {
                debug!(provider = %id, "No credential, skipping");
                continue;
            };
            let Some(provider) = self.provider(id) else {
                debug!(provider = %id, "No adapter registered, skipping");
                continue;
            };

            match provider.generate(credential, prompt).await {
                Ok(text) => {
                    debug!(provider = %id, "Generation succeeded");
                    return Ok(text);
                },
                Err(e) => {
                    warn!(provider = %id, error = %e, "Provider failed, trying next");
                },
            }
        }

        Err(GenerationError::NoProviderAvailable)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    /// Scripted provider for selector tests
    struct ScriptedProvider {
        id: ProviderId,
        response: Result<String, ()>,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn ok(id: ProviderId, text: &str) -> Arc<Self> {
            Arc::new(Self {
                id,
                response: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(id: ProviderId) -> Arc<Self> {
            Arc::new(Self {
                id,
                response: Err(()),
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerationProvider for ScriptedProvider {
        fn id(&self) -> ProviderId {
            self.id
        }

        async fn generate(&self, _credential: &str, _prompt: &str) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone().map_err(|()| GenerationError::Http {
                provider: self.id,
                status: 500,
                message: "scripted failure".to_string(),
            })
        }
    }

    fn all_keys() -> ApiKeys {
        ApiKeys::default()
            .with_claude("c-key")
            .with_openai("o-key")
            .with_gemini("g-key")
    }

    // === Priority order tests ===

    #[test]
    fn claude_preference_keeps_base_order() {
        assert_eq!(
            ProviderSelector::priority_order(ProviderId::Claude),
            [ProviderId::Claude, ProviderId::OpenAi, ProviderId::Gemini]
        );
    }

    #[test]
    fn openai_preference_moves_openai_first() {
        assert_eq!(
            ProviderSelector::priority_order(ProviderId::OpenAi),
            [ProviderId::OpenAi, ProviderId::Claude, ProviderId::Gemini]
        );
    }

    #[test]
    fn gemini_preference_moves_gemini_first() {
        assert_eq!(
            ProviderSelector::priority_order(ProviderId::Gemini),
            [ProviderId::Gemini, ProviderId::Claude, ProviderId::OpenAi]
        );
    }

    // === Selection tests ===

    #[tokio::test]
    async fn preferred_provider_wins_when_it_succeeds() {
        let claude = ScriptedProvider::ok(ProviderId::Claude, "claude text");
        let openai = ScriptedProvider::ok(ProviderId::OpenAi, "openai text");
        let selector = ProviderSelector::new(vec![claude.clone(), openai.clone()]);

        let text = selector
            .generate(&all_keys(), "prompt", ProviderId::Claude)
            .await
            .unwrap();

        assert_eq!(text, "claude text");
        assert_eq!(claude.call_count(), 1);
        assert_eq!(openai.call_count(), 0);
    }

    #[tokio::test]
    async fn failing_preferred_provider_falls_back_in_order() {
        let claude = ScriptedProvider::ok(ProviderId::Claude, "claude text");
        let openai = ScriptedProvider::failing(ProviderId::OpenAi);
        let gemini = ScriptedProvider::ok(ProviderId::Gemini, "gemini text");
        let selector = ProviderSelector::new(vec![claude.clone(), openai.clone(), gemini.clone()]);

        let text = selector
            .generate(&all_keys(), "prompt", ProviderId::OpenAi)
            .await
            .unwrap();

        // Order must be [openai, claude, gemini]: claude answers first
        assert_eq!(text, "claude text");
        assert_eq!(openai.call_count(), 1);
        assert_eq!(claude.call_count(), 1);
        assert_eq!(gemini.call_count(), 0);
    }

    #[tokio::test]
    async fn providers_without_credentials_are_skipped() {
        let claude = ScriptedProvider::ok(ProviderId::Claude, "claude text");
        let gemini = ScriptedProvider::ok(ProviderId::Gemini, "gemini text");
        let selector = ProviderSelector::new(vec![claude.clone(), gemini.clone()]);

        let keys = ApiKeys::default().with_gemini("g-key");
        let text = selector
            .generate(&keys, "prompt", ProviderId::Claude)
            .await
            .unwrap();

        assert_eq!(text, "gemini text");
        assert_eq!(claude.call_count(), 0);
    }

    #[tokio::test]
    async fn blank_credential_is_skipped() {
        let claude = ScriptedProvider::ok(ProviderId::Claude, "claude text");
        let openai = ScriptedProvider::ok(ProviderId::OpenAi, "openai text");
        let selector = ProviderSelector::new(vec![claude.clone(), openai.clone()]);

        let keys = ApiKeys::default().with_claude("  ").with_openai("o-key");
        let text = selector
            .generate(&keys, "prompt", ProviderId::Claude)
            .await
            .unwrap();

        assert_eq!(text, "openai text");
        assert_eq!(claude.call_count(), 0);
    }

    #[tokio::test]
    async fn exhausted_chain_reports_no_provider_available() {
        let claude = ScriptedProvider::failing(ProviderId::Claude);
        let openai = ScriptedProvider::failing(ProviderId::OpenAi);
        let gemini = ScriptedProvider::failing(ProviderId::Gemini);
        let selector = ProviderSelector::new(vec![claude, openai, gemini]);

        let result = selector.generate(&all_keys(), "prompt", ProviderId::Claude).await;
        assert!(matches!(result, Err(GenerationError::NoProviderAvailable)));
    }

    #[tokio::test]
    async fn empty_credential_set_fails_without_calling_anyone() {
        let claude = ScriptedProvider::ok(ProviderId::Claude, "claude text");
        let selector = ProviderSelector::new(vec![claude.clone()]);

        let result = selector
            .generate(&ApiKeys::default(), "prompt", ProviderId::Claude)
            .await;

        assert!(matches!(result, Err(GenerationError::NoProviderAvailable)));
        assert_eq!(claude.call_count(), 0);
    }

    #[test]
    fn from_config_registers_all_three_vendors() {
        let selector = ProviderSelector::from_config(&TextGenConfig::default()).unwrap();
        let debug = format!("{selector:?}");
        assert!(debug.contains("Claude"));
        assert!(debug.contains("OpenAi"));
        assert!(debug.contains("Gemini"));
    }
}
