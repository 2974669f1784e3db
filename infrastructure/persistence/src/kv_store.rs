//! String values stored under fixed keys in the `kv_store` table.

use chrono::Utc;
use sqlx::SqlitePool;

use business::domain::errors::RepositoryError;

/// SQLite primary result code for a full database or disk.
const SQLITE_FULL: &str = "13";

const SELECT_VALUE: &str = "SELECT value FROM kv_store WHERE key = ?1";

const UPSERT: &str = r#"INSERT INTO kv_store (key, value, updated_at)
    VALUES (?1, ?2, ?3)
    ON CONFLICT (key) DO UPDATE SET
        value = EXCLUDED.value,
        updated_at = EXCLUDED.updated_at"#;

pub struct KvStore {
    pool: SqlitePool,
}

impl KvStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        sqlx::query_scalar::<_, String>(SELECT_VALUE)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    pub async fn put(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        sqlx::query(UPSERT)
            .bind(key)
            .bind(value)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    /// Reads the value under `key`, rewrites it with `modify` and stores the
    /// result, all inside one transaction.
    pub async fn update<F>(&self, key: &str, modify: F) -> Result<(), RepositoryError>
    where
        F: FnOnce(Option<String>) -> Result<String, RepositoryError> + Send,
    {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let current = sqlx::query_scalar::<_, String>(SELECT_VALUE)
            .bind(key)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        let next = modify(current)?;

        sqlx::query(UPSERT)
            .bind(key)
            .bind(&next)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)
    }
}

pub(crate) fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) if db.code().as_deref() == Some(SQLITE_FULL) => {
            RepositoryError::QuotaExceeded
        }
        _ => RepositoryError::Unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_pool;

    #[tokio::test]
    async fn should_return_none_when_key_is_missing() {
        let store = KvStore::new(memory_pool().await);

        assert_eq!(store.get("shoppingLists").await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_overwrite_value_when_key_exists() {
        let store = KvStore::new(memory_pool().await);

        store.put("k", "first").await.unwrap();
        store.put("k", "second").await.unwrap();

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn should_read_modify_write_in_update() {
        let store = KvStore::new(memory_pool().await);
        store.put("log", "a").await.unwrap();

        store
            .update("log", |current| Ok(format!("{}b", current.unwrap_or_default())))
            .await
            .unwrap();

        assert_eq!(store.get("log").await.unwrap().as_deref(), Some("ab"));
    }

    #[tokio::test]
    async fn should_keep_value_when_update_fails() {
        let store = KvStore::new(memory_pool().await);
        store.put("log", "a").await.unwrap();

        let result = store
            .update("log", |_| Err(RepositoryError::Deserialization))
            .await;

        assert_eq!(result, Err(RepositoryError::Deserialization));
        assert_eq!(store.get("log").await.unwrap().as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn should_report_unavailable_when_pool_is_closed() {
        let pool = memory_pool().await;
        let store = KvStore::new(pool.clone());
        pool.close().await;

        assert_eq!(store.get("k").await, Err(RepositoryError::Unavailable));
    }
}
