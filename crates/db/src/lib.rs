//! SQLite storage layer: pool construction, schema migrations, models and
//! repositories.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod models;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::SqlitePool;

/// Tables in dependency order (association tables first), used by
/// [`reset_schema`].
const TABLES: &[&str] = &[
    "playlist_songs",
    "album_artists",
    "song_artists",
    "playlists",
    "songs",
    "albums",
    "artists",
    "users",
    "_sqlx_migrations",
];

/// Create a connection pool from a database URL.
///
/// The database file (and its parent directory) is created when missing.
/// Every connection enforces foreign keys and uses WAL journaling.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal);

    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            tracing::info!(dir = %parent.display(), "Created database directory");
        }
    }

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded schema migrations. Safe to call on every startup.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Drop every table, including migration bookkeeping, so that
/// [`run_migrations`] rebuilds the schema from scratch.
pub async fn reset_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    for table in TABLES {
        sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
            .execute(pool)
            .await?;
    }
    tracing::warn!("All tables dropped");
    Ok(())
}

/// Whether `err` is a unique or primary-key constraint failure.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// Whether `err` is a foreign-key constraint failure.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}
