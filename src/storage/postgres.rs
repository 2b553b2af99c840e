//! Postgres-backed storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses [`PgStorage::connect`] to create the shared SQLx pool and
//! enforce schema migrations before accepting traffic. All durable state
//! lives in one `kv_store` table with JSONB values.

use serde_json::Value;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::{Storage, StorageError};

const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

fn db_max_connections() -> u32 {
    std::env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
}

pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect to Postgres and run migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migrations fail.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(db_max_connections())
            .connect(database_url)
            .await?;

        sqlx::migrate!("src/storage/migrations").run(&pool).await?;

        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl Storage for PgStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let value = sqlx::query_scalar::<_, Value>("SELECT value FROM kv_store WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO kv_store (key, value) VALUES ($1, $2)
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = now()",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM kv_store WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, StorageError> {
        let keys = sqlx::query_scalar::<_, String>("SELECT key FROM kv_store ORDER BY key")
            .fetch_all(&self.pool)
            .await?;
        Ok(keys)
    }
}
