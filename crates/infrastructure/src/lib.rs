//! Infrastructure layer - Adapters and persistence
//!
//! Implements the application ports: provider-backed generation via the
//! `ai_text` selector, SQLite-backed run history, and layered
//! configuration loading.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::SelectorGenerationAdapter;
pub use config::{AppConfig, ConfigError, DatabaseConfig};
pub use persistence::{ConnectionPool, DatabaseError, SqliteHistoryStore, create_pool};
