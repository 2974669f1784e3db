use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod product_lookup {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod scanned_record {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod shopping_list {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod lookup_config;
    pub mod server_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Serves the shopping list to a local client:
/// - config/: server, CORS, database and lookup settings
/// - setup/: dependency wiring and the HTTP server
/// - api/: route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Open the database and apply migrations
    let pool = database_config::init_database(&config.database).await?;

    // 5. Wire dependencies, restoring the saved lists
    let container = DependencyContainer::new(pool, &config.lookup).await?;

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
