//! Durable key-value persistence.
//!
//! DESIGN
//! ======
//! The wizard treats durable storage as a collaborator with four operations:
//! get, set, remove, and key enumeration. Values are JSON documents. The
//! [`Storage`] trait keeps services independent of the backing store: the
//! server runs on [`postgres::PgStorage`], while tests (and a degraded
//! no-database mode) use [`memory::MemoryStorage`].
//!
//! Key space: `openai_api_key` (credential), `tcg_settings` (settings),
//! `savedTests` (run index, newest first), and one `test_*` key per saved
//! run.

pub mod memory;
pub mod postgres;

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Async key-value store for settings, credential, and saved runs.
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Store `value` under `key`, replacing any existing value.
    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Enumerate all stored keys, sorted.
    async fn keys(&self) -> Result<Vec<String>, StorageError>;
}
