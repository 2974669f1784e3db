use persistence::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
use sqlx::SqlitePool;
use std::env;

/// Where the shopping data lives
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: SQLite connection string
    ///   (default: "sqlite://shopping-list.db?mode=rwc")
    /// - MIGRATIONS_PATH: Directory holding the SQL migrations
    ///   (default: "infrastructure/persistence/migrations")
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://shopping-list.db?mode=rwc".to_string());
        let migrations_path = env::var("MIGRATIONS_PATH")
            .unwrap_or_else(|_| "infrastructure/persistence/migrations".to_string());

        Self {
            url,
            migrations_path,
        }
    }
}

/// Opens the SQLite pool and brings the schema up to date
///
/// # Errors
/// Returns error if the database cannot be opened or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<SqlitePool> {
    let pool = create_sqlite_pool(&DatabaseConfig::new(settings.url.clone())).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    Ok(pool)
}
