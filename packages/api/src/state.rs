// ABOUTME: Shared application state for API handlers
// ABOUTME: Wires the SQLite pool into the checklist item service

use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;

use listkeeper_checklist::ChecklistItemService;
use listkeeper_storage::{db, SqliteChecklistItemRepository, StorageResult};

/// Shared state cloned into every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub item_service: Arc<ChecklistItemService>,
}

impl AppState {
    /// Create state from an already migrated SQLite pool
    pub fn new(pool: SqlitePool) -> Self {
        let repository = Arc::new(SqliteChecklistItemRepository::new(pool.clone()));
        let item_service = Arc::new(ChecklistItemService::new(repository));

        Self { pool, item_service }
    }

    /// Initialize state with an optional custom database path
    /// (defaults to ~/.listkeeper/listkeeper.db)
    pub async fn init_with_path(
        database_path: Option<PathBuf>,
        max_connections: u32,
    ) -> StorageResult<Self> {
        let database_path = database_path.unwrap_or_else(listkeeper_core::default_database_path);
        let pool = db::connect(&database_path, max_connections).await?;

        Ok(Self::new(pool))
    }
}
