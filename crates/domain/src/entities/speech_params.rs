//! Speech generation request parameters

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;
use crate::value_objects::{Audience, SpeechDuration, Tone};

/// Input to a speech generation run
///
/// Immutable once handed to the pipeline; the caller constructs and
/// validates it up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SpeechParams {
    /// Topic of the speech
    #[validate(length(min = 1, message = "topic must not be empty"))]
    pub topic: String,
    /// Requested tone
    pub tone: Tone,
    /// Target spoken length
    pub duration: SpeechDuration,
    /// Audience the speech is addressed to
    pub audience: Audience,
    /// Optional free-text details to weave in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SpeechParams {
    /// Create parameters for a generation run
    #[must_use]
    pub fn new(
        topic: impl Into<String>,
        tone: Tone,
        duration: SpeechDuration,
        audience: Audience,
    ) -> Self {
        Self {
            topic: topic.into(),
            tone,
            duration,
            audience,
            details: None,
        }
    }

    /// Attach additional free-text details
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Validate the parameters, mapping into a domain error
    pub fn ensure_valid(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SpeechParams {
        SpeechParams::new(
            "Otwarcie konferencji",
            Tone::Official,
            SpeechDuration::TenMinutes,
            Audience::Business,
        )
    }

    #[test]
    fn valid_params_pass_validation() {
        assert!(params().ensure_valid().is_ok());
    }

    #[test]
    fn empty_topic_fails_validation() {
        let p = SpeechParams::new("", Tone::Casual, SpeechDuration::FiveMinutes, Audience::Mixed);
        assert!(matches!(
            p.ensure_valid(),
            Err(DomainError::ValidationError(_))
        ));
    }

    #[test]
    fn details_are_optional_and_skipped_in_json() {
        let json = serde_json::to_string(&params()).expect("serialize");
        assert!(!json.contains("details"));

        let with = params().with_details("wspomnij o sponsorach");
        let json = serde_json::to_string(&with).expect("serialize");
        assert!(json.contains("wspomnij o sponsorach"));
    }

    #[test]
    fn round_trips_through_json() {
        let p = params().with_details("dodatkowy kontekst");
        let json = serde_json::to_string(&p).expect("serialize");
        let back: SpeechParams = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(p, back);
    }
}
