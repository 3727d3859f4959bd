// ABOUTME: Repository abstraction over checklist item persistence
// ABOUTME: Implemented by SQLite storage and mocked in service tests

use async_trait::async_trait;
use listkeeper_core::ChecklistItem;

use crate::StorageResult;

/// Persistence capabilities the item service relies on.
///
/// Absence from `find_by_id` is `Ok(None)`, never an error.
#[async_trait]
pub trait ChecklistItemRepository: Send + Sync {
    /// Every stored item, in storage order
    async fn find_all(&self) -> StorageResult<Vec<ChecklistItem>>;

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<ChecklistItem>>;

    /// Case-insensitive substring match on title; an empty keyword matches everything
    async fn find_by_title_containing_ignore_case(
        &self,
        keyword: &str,
    ) -> StorageResult<Vec<ChecklistItem>>;

    /// Insert when `id` is `None`, otherwise update the existing row
    async fn save(&self, item: ChecklistItem) -> StorageResult<ChecklistItem>;

    /// Save a batch atomically with the same per-item rules as `save`
    async fn save_all(&self, items: Vec<ChecklistItem>) -> StorageResult<Vec<ChecklistItem>>;

    /// Remove the item's row. Missing rows are ignored.
    async fn delete(&self, item: &ChecklistItem) -> StorageResult<()>;
}
