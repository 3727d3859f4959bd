// ABOUTME: Database connection management and schema migrations
// ABOUTME: Opens the SQLite pool with the pragmas the storage layer expects

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::{StorageError, StorageResult};

/// Default number of pooled connections
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Open (creating if needed) the database at `database_path` and run migrations
pub async fn connect(database_path: &Path, max_connections: u32) -> StorageResult<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = database_path.parent() {
        std::fs::create_dir_all(parent).map_err(StorageError::Io)?;
    }

    debug!("Connecting to database: {}", database_path.display());

    // Pragmas are applied per connection by the connect options
    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await
        .map_err(StorageError::Sqlx)?;

    info!("Database connection established");

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Apply the embedded schema migrations
pub async fn run_migrations(pool: &SqlitePool) -> StorageResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(StorageError::Migration)?;

    debug!("Database migrations completed");
    Ok(())
}
