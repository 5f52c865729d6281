//! Database layer: pool construction, migrations, and repositories.
//!
//! The store is a single SQLite file (or in-memory database) holding the
//! four planner tables. All repository methods take `&SqlitePool` as their
//! first argument; no repository holds state of its own.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL (e.g. `sqlite://planner.db`).
///
/// The database file is created if missing and foreign-key enforcement is
/// switched on for every connection.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Apply all embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Delete every row from all four tables, children first.
///
/// Each statement commits independently; there is no wrapping transaction.
pub async fn clear_all(pool: &DbPool) -> Result<(), sqlx::Error> {
    tracing::info!("Clearing all planner tables");
    sqlx::query("DELETE FROM assignments").execute(pool).await?;
    sqlx::query("DELETE FROM projects").execute(pool).await?;
    sqlx::query("DELETE FROM clients").execute(pool).await?;
    sqlx::query("DELETE FROM people").execute(pool).await?;
    Ok(())
}
