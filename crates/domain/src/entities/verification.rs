//! Verification stage results
//!
//! Each completed LLM-judged quality check produces one immutable
//! `VerificationResult`. Their order in a run reflects invocation order
//! (naturalness, then style, then logic) and must be preserved so score
//! aggregation stays reproducible.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Aspect examined by a verification stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationAspect {
    /// Does the text sound human-written and speakable?
    Naturalness,
    /// Grammar, punctuation, and tone consistency
    Style,
    /// Argument structure and coherence
    Logic,
}

impl VerificationAspect {
    /// Human-readable label (presentation only, not part of the record)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Naturalness => "Naturalność",
            Self::Style => "Styl",
            Self::Logic => "Logika",
        }
    }

    /// Emoji for summary views (presentation only)
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Naturalness => "🗣️",
            Self::Style => "✍️",
            Self::Logic => "🧠",
        }
    }

    /// All aspects in invocation order
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Naturalness, Self::Style, Self::Logic]
    }
}

impl fmt::Display for VerificationAspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of a single verification stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Aspect that was judged
    pub aspect: VerificationAspect,
    /// Score 0-100 awarded by the judge
    pub score: u8,
    /// Ordered feedback remarks from the judge
    pub feedback: Vec<String>,
}

impl VerificationResult {
    /// Create a verification result
    #[must_use]
    pub fn new(aspect: VerificationAspect, score: u8, feedback: Vec<String>) -> Self {
        Self {
            aspect,
            score: score.min(100),
            feedback,
        }
    }
}
