//! MySQL connection pool management

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use tracing::info;

use estate_shared::config::DatabaseConfig;

/// Create a MySQL connection pool from configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "database pool ready"
    );
    Ok(pool)
}
