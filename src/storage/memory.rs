//! In-memory storage.
//!
//! Used by unit tests and as the degraded fallback when `DATABASE_URL` is
//! not configured — the wizard stays usable, but saved runs and settings do
//! not survive a restart.

use std::collections::BTreeMap;

use serde_json::Value;
use tokio::sync::RwLock;

use super::{Storage, StorageError};

#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<BTreeMap<String, Value>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_owned(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, StorageError> {
        let entries = self.entries.read().await;
        Ok(entries.keys().cloned().collect())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
