//! Durable client-local storage: a string key/value space holding the
//! serialized document.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Key/value persistence used by the document store.
///
/// Carried by the store as `Arc<dyn DocumentStorage>`.
#[async_trait]
pub trait DocumentStorage: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// ────────────────────────────────────────────────────────────────────────────
// SQLite
// ────────────────────────────────────────────────────────────────────────────

/// SQLite-backed storage: one row per key in `kv_store`.
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Wraps `pool`, creating the key/value table if needed.
    pub async fn new(pool: SqlitePool) -> Result<Self, StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS kv_store (
                key        TEXT PRIMARY KEY NOT NULL,
                value      TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl DocumentStorage for SqliteStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(
            sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        debug!("Wrote {} bytes under key '{key}'", value.len());
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

/// Process-local storage. Used by tests and when no durable store is wanted.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a raw value, e.g. a corrupted document.
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut values) = storage.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        storage
    }
}

#[async_trait]
impl DocumentStorage for MemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self
            .values
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    async fn sqlite_in(dir: &tempfile::TempDir) -> SqliteStorage {
        let url = format!("sqlite://{}", dir.path().join("resume.db").display());
        let pool = create_pool(&url).await.unwrap();
        SqliteStorage::new(pool).await.unwrap()
    }

    #[tokio::test]
    async fn test_memory_read_missing_key_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("resume").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_write_then_read() {
        let storage = MemoryStorage::new();
        storage.write("resume", "{}").await.unwrap();
        assert_eq!(storage.read("resume").await.unwrap().as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_sqlite_overwrites_same_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = sqlite_in(&dir).await;
        storage.write("resume", "first").await.unwrap();
        storage.write("resume", "second").await.unwrap();
        assert_eq!(
            storage.read("resume").await.unwrap().as_deref(),
            Some("second")
        );
        assert_eq!(storage.read("other").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sqlite_value_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let storage = sqlite_in(&dir).await;
            storage.write("resume", "persisted").await.unwrap();
        }
        let reopened = sqlite_in(&dir).await;
        assert_eq!(
            reopened.read("resume").await.unwrap().as_deref(),
            Some("persisted")
        );
    }
}
