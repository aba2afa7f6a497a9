//! Per-provider credential set

use serde::{Deserialize, Serialize};

use crate::value_objects::ProviderId;

/// API credentials for the supported providers
///
/// Any subset may be present. An empty string counts as absent, so a
/// blank field in a config file or settings form never selects a
/// provider that cannot authenticate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeys {
    /// Anthropic Claude API key
    #[serde(default)]
    pub claude: Option<String>,
    /// OpenAI API key
    #[serde(default)]
    pub openai: Option<String>,
    /// Google Gemini API key
    #[serde(default)]
    pub gemini: Option<String>,
}

impl ApiKeys {
    /// Get the credential for a provider, treating empty strings as absent
    #[must_use]
    pub fn get(&self, provider: ProviderId) -> Option<&str> {
        let key = match provider {
            ProviderId::Claude => self.claude.as_deref(),
            ProviderId::OpenAi => self.openai.as_deref(),
            ProviderId::Gemini => self.gemini.as_deref(),
        };
        key.filter(|k| !k.trim().is_empty())
    }

    /// Whether at least one credential is present
    #[must_use]
    pub fn has_any(&self) -> bool {
        ProviderId::all().iter().any(|p| self.get(*p).is_some())
    }

    /// Number of present credentials
    #[must_use]
    pub fn count(&self) -> usize {
        ProviderId::all().iter().filter(|p| self.get(**p).is_some()).count()
    }

    /// Set the Claude credential
    #[must_use]
    pub fn with_claude(mut self, key: impl Into<String>) -> Self {
        self.claude = Some(key.into());
        self
    }

    /// Set the OpenAI credential
    #[must_use]
    pub fn with_openai(mut self, key: impl Into<String>) -> Self {
        self.openai = Some(key.into());
        self
    }

    /// Set the Gemini credential
    #[must_use]
    pub fn with_gemini(mut self, key: impl Into<String>) -> Self {
        self.gemini = Some(key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_set_has_no_credentials() {
        let keys = ApiKeys::default();
        assert!(!keys.has_any());
        assert_eq!(keys.count(), 0);
        assert!(keys.get(ProviderId::Claude).is_none());
    }

    #[test]
    fn blank_string_counts_as_absent() {
        let keys = ApiKeys::default().with_openai("   ");
        assert!(keys.get(ProviderId::OpenAi).is_none());
        assert!(!keys.has_any());
    }

    #[test]
    fn present_key_is_returned() {
        let keys = ApiKeys::default().with_gemini("g-key");
        assert_eq!(keys.get(ProviderId::Gemini), Some("g-key"));
        assert!(keys.has_any());
        assert_eq!(keys.count(), 1);
    }

    #[test]
    fn count_covers_all_providers() {
        let keys = ApiKeys::default()
            .with_claude("a")
            .with_openai("b")
            .with_gemini("c");
        assert_eq!(keys.count(), 3);
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let keys: ApiKeys = serde_json::from_str(r#"{"openai":"sk-test"}"#).expect("deserialize");
        assert_eq!(keys.get(ProviderId::OpenAi), Some("sk-test"));
        assert!(keys.get(ProviderId::Claude).is_none());
    }

    proptest! {
        /// Whatever is stored, `get` never hands out a blank credential
        #[test]
        fn get_never_returns_a_blank_credential(key in "[ \\t]{0,8}") {
            let keys = ApiKeys::default().with_claude(key);
            prop_assert!(keys.get(ProviderId::Claude).is_none());
        }

        #[test]
        fn non_blank_keys_are_returned_verbatim(key in "[a-zA-Z0-9-]{1,24}") {
            let keys = ApiKeys::default().with_openai(key.clone());
            prop_assert_eq!(keys.get(ProviderId::OpenAi), Some(key.as_str()));
        }
    }
}
