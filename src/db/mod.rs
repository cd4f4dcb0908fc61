//! Database module for linkboard.
//!
//! Provides SQLite connectivity via sqlx and migration management.

mod schema;

pub use schema::MIGRATIONS;

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::{debug, info};

use crate::Result;

/// Connection pool type used throughout the crate.
pub type DbPool = sqlx::SqlitePool;

/// Open a connection pool for the database file at the specified path.
///
/// The file and any parent directories are created if missing.
/// Migrations are automatically applied.
pub async fn connect(path: &str, max_connections: u32) -> Result<DbPool> {
    info!("Opening database at {path}");

    if let Some(parent) = Path::new(path).parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    migrate(&pool).await?;

    Ok(pool)
}

/// Open an in-memory database for testing.
///
/// The pool is limited to a single connection so every query sees the
/// same in-memory database.
pub async fn connect_in_memory() -> Result<DbPool> {
    debug!("Opening in-memory database");

    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;

    Ok(pool)
}

/// Get the current schema version.
pub async fn schema_version(pool: &DbPool) -> Result<i64> {
    let table_exists: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
    )
    .fetch_one(pool)
    .await?;

    if !table_exists {
        return Ok(0);
    }

    let version: i64 = sqlx::query_scalar("SELECT COALESCE(MAX(version), 0) FROM schema_version")
        .fetch_one(pool)
        .await?;

    Ok(version)
}

/// Apply pending migrations.
pub async fn migrate(pool: &DbPool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (datetime('now'))
        )",
    )
    .execute(pool)
    .await?;

    let current = schema_version(pool).await?;

    for (i, migration) in MIGRATIONS.iter().copied().enumerate() {
        let version = (i + 1) as i64;
        if version <= current {
            continue;
        }

        let mut tx = pool.begin().await?;
        sqlx::raw_sql(migration).execute(&mut *tx).await?;
        sqlx::query("INSERT INTO schema_version (version) VALUES (?)")
            .bind(version)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        info!("Applied migration v{version}");
    }

    Ok(())
}
