pub mod db;
pub mod kv_store;
pub mod price_value;
pub mod scanned_record {
    pub mod entity;
    pub mod repository;
}
pub mod shopping_list {
    pub mod entity;
    pub mod repository;
}

#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::SqlitePool;

    use crate::db::{DatabaseConfig, create_sqlite_pool, run_migrations};

    pub const MIGRATIONS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

    /// A private in-memory database with the schema applied.
    pub async fn memory_pool() -> SqlitePool {
        let pool = create_sqlite_pool(&DatabaseConfig::new("sqlite::memory:".to_string()))
            .await
            .unwrap();
        run_migrations(&pool, MIGRATIONS_PATH).await.unwrap();
        pool
    }
}
