//! Terminal output of a speech generation run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::VerificationResult;

/// Result record returned by the pipeline
///
/// Owned by the caller after return; the pipeline keeps no reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Final speech text
    pub text: String,
    /// Verification results in invocation order (possibly empty)
    pub verification: Vec<VerificationResult>,
    /// Aggregated quality score (0-100)
    pub overall_score: u8,
    /// Whether a refinement pass replaced the text
    pub was_refined: bool,
    /// When the run finished
    pub generated_at: DateTime<Utc>,
}

impl GenerationResult {
    /// Create a result stamped with the current time
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        verification: Vec<VerificationResult>,
        overall_score: u8,
        was_refined: bool,
    ) -> Self {
        Self {
            text: text.into(),
            verification,
            overall_score,
            was_refined,
            generated_at: Utc::now(),
        }
    }

    /// Whether any verification stage completed
    #[must_use]
    pub fn was_verified(&self) -> bool {
        !self.verification.is_empty()
    }
}
