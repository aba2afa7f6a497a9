//! History store port - Interface for persisted generation runs

use async_trait::async_trait;
use domain::SpeechHistoryItem;
use uuid::Uuid;

use crate::error::ApplicationError;

/// Port for the persisted run history
///
/// Injected into callers rather than accessed as ambient state; the
/// pipeline itself never touches it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HistoryStorePort: Send + Sync {
    /// Persist a finished run
    async fn save(&self, item: &SpeechHistoryItem) -> Result<(), ApplicationError>;

    /// List stored runs, newest first
    async fn list(&self) -> Result<Vec<SpeechHistoryItem>, ApplicationError>;

    /// Fetch a single run by id
    async fn get(&self, id: Uuid) -> Result<Option<SpeechHistoryItem>, ApplicationError>;

    /// Delete a run; returns whether it existed
    async fn delete(&self, id: Uuid) -> Result<bool, ApplicationError>;

    /// Remove all stored runs
    async fn clear(&self) -> Result<(), ApplicationError>;
}
