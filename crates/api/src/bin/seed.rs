//! Reset the database and load the sample catalog.
//!
//! Uses the same environment configuration as the server. Every table is
//! dropped first, so existing data is lost.

use anyhow::Context;

use playlist_api::config::ServerConfig;
use playlist_api::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    telemetry::init_tracing(config.log_format);

    let pool = playlist_db::create_pool(&config.database_url, config.database_max_connections)
        .await
        .with_context(|| format!("Failed to open database at {}", config.database_url))?;

    tracing::info!(url = %config.database_url, "Dropping existing tables");
    playlist_db::reset_schema(&pool)
        .await
        .context("Failed to drop existing tables")?;

    playlist_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Fresh schema created");

    let summary = playlist_db::seed::seed_catalog(&pool)
        .await
        .context("Failed to seed sample data")?;

    pool.close().await;
    tracing::info!(?summary, "Database seeded successfully");
    Ok(())
}
