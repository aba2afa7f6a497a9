//! SQLite history store implementation
//!
//! Implements the `HistoryStorePort` for persisted generation runs.
//! The store keeps only the most recent runs; older rows are trimmed
//! on save.

use std::sync::Arc;

use application::{error::ApplicationError, ports::HistoryStorePort};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::SpeechHistoryItem;
use rusqlite::{OptionalExtension, Row, params};
use tokio::task;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::connection::ConnectionPool;

/// Maximum number of runs kept in history
const HISTORY_LIMIT: u32 = 50;

/// SQLite-based run history store
#[derive(Debug, Clone)]
pub struct SqliteHistoryStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteHistoryStore {
    /// Create a new SQLite history store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

fn internal(e: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::Store(e.to_string())
}

fn row_to_item(row: &Row<'_>) -> rusqlite::Result<SpeechHistoryItem> {
    let id: String = row.get(0)?;
    let params_json: String = row.get(1)?;
    let result_json: String = row.get(2)?;
    let created_at: String = row.get(3)?;

    let conversion = |idx: usize, e: Box<dyn std::error::Error + Send + Sync>| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, e)
    };

    Ok(SpeechHistoryItem {
        id: Uuid::parse_str(&id).map_err(|e| conversion(0, Box::new(e)))?,
        params: serde_json::from_str(&params_json).map_err(|e| conversion(1, Box::new(e)))?,
        result: serde_json::from_str(&result_json).map_err(|e| conversion(2, Box::new(e)))?,
        created_at: DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| conversion(3, Box::new(e)))?
            .with_timezone(&Utc),
    })
}

#[async_trait]
impl HistoryStorePort for SqliteHistoryStore {
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    async fn save(&self, item: &SpeechHistoryItem) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let item = item.clone();

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(internal)?;

            let params_json = serde_json::to_string(&item.params).map_err(internal)?;
            let result_json = serde_json::to_string(&item.result).map_err(internal)?;

            conn.execute(
                "INSERT INTO speech_history (id, params, result, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    item.id.to_string(),
                    params_json,
                    result_json,
                    item.created_at.to_rfc3339(),
                ],
            )
            .map_err(internal)?;

            // Trim beyond the cap, oldest first
            conn.execute(
                "DELETE FROM speech_history WHERE id NOT IN (
                     SELECT id FROM speech_history ORDER BY created_at DESC LIMIT ?1
                 )",
                params![HISTORY_LIMIT],
            )
            .map_err(internal)?;

            debug!("Saved history item");
            Ok(())
        })
        .await
        .map_err(internal)?
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<SpeechHistoryItem>, ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(internal)?;

            let mut stmt = conn
                .prepare(
                    "SELECT id, params, result, created_at FROM speech_history
                     ORDER BY created_at DESC",
                )
                .map_err(internal)?;

            let items = stmt
                .query_map([], row_to_item)
                .map_err(internal)?
                .collect::<Result<Vec<_>, _>>()
                .map_err(internal)?;

            Ok(items)
        })
        .await
        .map_err(internal)?
    }

    #[instrument(skip(self), fields(item_id = %id))]
    async fn get(&self, id: Uuid) -> Result<Option<SpeechHistoryItem>, ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(internal)?;

            conn.query_row(
                "SELECT id, params, result, created_at FROM speech_history WHERE id = ?1",
                [id.to_string()],
                row_to_item,
            )
            .optional()
            .map_err(internal)
        })
        .await
        .map_err(internal)?
    }

    #[instrument(skip(self), fields(item_id = %id))]
    async fn delete(&self, id: Uuid) -> Result<bool, ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(internal)?;

            let deleted = conn
                .execute("DELETE FROM speech_history WHERE id = ?1", [id.to_string()])
                .map_err(internal)?;

            debug!(deleted = deleted > 0, "Deleted history item");
            Ok(deleted > 0)
        })
        .await
        .map_err(internal)?
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(internal)?;
            conn.execute("DELETE FROM speech_history", []).map_err(internal)?;
            debug!("Cleared history");
            Ok(())
        })
        .await
        .map_err(internal)?
    }
}
