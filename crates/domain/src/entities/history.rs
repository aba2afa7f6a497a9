//! Persisted history of generation runs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{GenerationResult, SpeechParams};

/// One completed generation run kept in history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechHistoryItem {
    /// Unique identifier of the run
    pub id: Uuid,
    /// Parameters the run was started with
    pub params: SpeechParams,
    /// The run's result record
    pub result: GenerationResult,
    /// When the item was stored
    pub created_at: DateTime<Utc>,
}

impl SpeechHistoryItem {
    /// Create a history item for a finished run
    #[must_use]
    pub fn new(params: SpeechParams, result: GenerationResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            params,
            result,
            created_at: Utc::now(),
        }
    }
}
