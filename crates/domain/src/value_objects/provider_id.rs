//! LLM provider identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Identifier of an external LLM text-generation vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// Anthropic Claude
    Claude,
    /// OpenAI
    OpenAi,
    /// Google Gemini
    Gemini,
}

impl ProviderId {
    /// Fixed fallback base order; a preferred provider is moved to the
    /// front of this order when building a selection chain.
    pub const FALLBACK_ORDER: [Self; 3] = [Self::Claude, Self::OpenAi, Self::Gemini];

    /// The wire value for this provider
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
        }
    }

    /// All providers in fallback base order
    #[must_use]
    pub const fn all() -> [Self; 3] {
        Self::FALLBACK_ORDER
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "claude" | "anthropic" => Ok(Self::Claude),
            "openai" => Ok(Self::OpenAi),
            "gemini" | "google" => Ok(Self::Gemini),
            _ => Err(DomainError::invalid_value("provider", s)),
        }
    }
}
