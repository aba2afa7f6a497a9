//! Target speech duration value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Requested spoken length of the speech
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SpeechDuration {
    #[serde(rename = "2 minuty")]
    TwoMinutes,
    #[default]
    #[serde(rename = "5 minut")]
    FiveMinutes,
    #[serde(rename = "10 minut")]
    TenMinutes,
    #[serde(rename = "15 minut")]
    FifteenMinutes,
    #[serde(rename = "20+ minut")]
    TwentyPlusMinutes,
}

impl SpeechDuration {
    /// The wire/prompt value for this duration
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TwoMinutes => "2 minuty",
            Self::FiveMinutes => "5 minut",
            Self::TenMinutes => "10 minut",
            Self::FifteenMinutes => "15 minut",
            Self::TwentyPlusMinutes => "20+ minut",
        }
    }

    /// Approximate spoken length in minutes, for sorting and display
    #[must_use]
    pub const fn minutes(self) -> u8 {
        match self {
            Self::TwoMinutes => 2,
            Self::FiveMinutes => 5,
            Self::TenMinutes => 10,
            Self::FifteenMinutes => 15,
            Self::TwentyPlusMinutes => 20,
        }
    }

    /// All durations, shortest first
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::TwoMinutes,
            Self::FiveMinutes,
            Self::TenMinutes,
            Self::FifteenMinutes,
            Self::TwentyPlusMinutes,
        ]
    }
}

impl fmt::Display for SpeechDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SpeechDuration {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "2 minuty" | "2" | "2m" => Ok(Self::TwoMinutes),
            "5 minut" | "5" | "5m" => Ok(Self::FiveMinutes),
            "10 minut" | "10" | "10m" => Ok(Self::TenMinutes),
            "15 minut" | "15" | "15m" => Ok(Self::FifteenMinutes),
            "20+ minut" | "20" | "20+" | "20m" => Ok(Self::TwentyPlusMinutes),
            _ => Err(DomainError::invalid_value("duration", s)),
        }
    }
}
