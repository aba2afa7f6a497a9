//! Target audience value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Audience the speech is addressed to
///
/// Drives vocabulary and complexity choices in the generation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Audience {
    #[serde(rename = "biznesowi")]
    Business,
    #[serde(rename = "studenci")]
    Students,
    #[serde(rename = "ogólna publiczność")]
    GeneralPublic,
    #[serde(rename = "eksperci")]
    Experts,
    #[default]
    #[serde(rename = "mieszana")]
    Mixed,
}

impl Audience {
    /// The wire/prompt value for this audience
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Business => "biznesowi",
            Self::Students => "studenci",
            Self::GeneralPublic => "ogólna publiczność",
            Self::Experts => "eksperci",
            Self::Mixed => "mieszana",
        }
    }

    /// All audiences in presentation order
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Business,
            Self::Students,
            Self::GeneralPublic,
            Self::Experts,
            Self::Mixed,
        ]
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Audience {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "biznesowi" | "business" => Ok(Self::Business),
            "studenci" | "students" => Ok(Self::Students),
            "ogólna publiczność" | "general" | "public" => Ok(Self::GeneralPublic),
            "eksperci" | "experts" => Ok(Self::Experts),
            "mieszana" | "mixed" => Ok(Self::Mixed),
            _ => Err(DomainError::invalid_value("audience", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_wire_value() {
        let json = serde_json::to_string(&Audience::Mixed).expect("serialize");
        assert_eq!(json, "\"mieszana\"");
    }

    #[test]
    fn wire_value_with_space_round_trips() {
        let json = serde_json::to_string(&Audience::GeneralPublic).expect("serialize");
        assert_eq!(json, "\"ogólna publiczność\"");
        let back: Audience = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Audience::GeneralPublic);
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("experts".parse::<Audience>().unwrap(), Audience::Experts);
        assert_eq!("mieszana".parse::<Audience>().unwrap(), Audience::Mixed);
    }

    #[test]
    fn rejects_unknown_audience() {
        assert!("kids".parse::<Audience>().is_err());
    }
}
