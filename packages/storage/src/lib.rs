// ABOUTME: Data layer and persistence for Listkeeper
// ABOUTME: Repository trait for checklist items with a SQLite implementation

use thiserror::Error;

pub mod checklist_items;
pub mod db;
pub mod repository;

// Re-export main types
pub use checklist_items::SqliteChecklistItemRepository;
pub use repository::ChecklistItemRepository;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Record not found")]
    NotFound,
}

pub type StorageResult<T> = Result<T, StorageError>;
