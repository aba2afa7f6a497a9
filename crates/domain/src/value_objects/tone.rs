//! Speech tone value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Requested tone of the generated speech
///
/// The wire values are the Polish labels the product has always used;
/// they are embedded verbatim into prompts and persisted history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tone {
    /// Formal, ceremonial register
    #[default]
    #[serde(rename = "oficjalny")]
    Official,
    /// Energizing, call-to-action register
    #[serde(rename = "motywacyjny")]
    Motivational,
    /// Relaxed, conversational register
    #[serde(rename = "casual")]
    Casual,
    /// Lecture-style, precise register
    #[serde(rename = "akademicki")]
    Academic,
    /// Personal, moving register
    #[serde(rename = "emocjonalny")]
    Emotional,
    /// Light, witty register
    #[serde(rename = "humorystyczny")]
    Humorous,
}

impl Tone {
    /// The wire/prompt value for this tone
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Official => "oficjalny",
            Self::Motivational => "motywacyjny",
            Self::Casual => "casual",
            Self::Academic => "akademicki",
            Self::Emotional => "emocjonalny",
            Self::Humorous => "humorystyczny",
        }
    }

    /// All tones in presentation order
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Official,
            Self::Motivational,
            Self::Casual,
            Self::Academic,
            Self::Emotional,
            Self::Humorous,
        ]
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Tone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "oficjalny" | "official" => Ok(Self::Official),
            "motywacyjny" | "motivational" => Ok(Self::Motivational),
            "casual" => Ok(Self::Casual),
            "akademicki" | "academic" => Ok(Self::Academic),
            "emocjonalny" | "emotional" => Ok(Self::Emotional),
            "humorystyczny" | "humorous" => Ok(Self::Humorous),
            _ => Err(DomainError::invalid_value("tone", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_polish_wire_value() {
        let json = serde_json::to_string(&Tone::Official).expect("serialize");
        assert_eq!(json, "\"oficjalny\"");
    }

    #[test]
    fn round_trips_all_variants() {
        for tone in Tone::all() {
            let json = serde_json::to_string(&tone).expect("serialize");
            let back: Tone = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(tone, back);
        }
    }

    #[test]
    fn parses_polish_and_english_aliases() {
        assert_eq!("oficjalny".parse::<Tone>().unwrap(), Tone::Official);
        assert_eq!("Academic".parse::<Tone>().unwrap(), Tone::Academic);
        assert_eq!("casual".parse::<Tone>().unwrap(), Tone::Casual);
    }

    #[test]
    fn rejects_unknown_tone() {
        assert!("solemn".parse::<Tone>().is_err());
    }

    #[test]
    fn display_matches_wire_value() {
        assert_eq!(Tone::Humorous.to_string(), "humorystyczny");
    }
}
