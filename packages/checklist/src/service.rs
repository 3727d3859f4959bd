// ABOUTME: Checklist item service
// ABOUTME: Applies creation, partial-update, and deletion rules on top of a repository

use std::sync::Arc;

use listkeeper_core::{ChecklistItem, ChecklistItemPatch};
use listkeeper_storage::{ChecklistItemRepository, StorageError};
use tracing::debug;

use crate::error::{ServiceError, ServiceResult};

/// Business rules for checklist items.
///
/// The repository is passed in by the caller, so tests can swap it for a mock.
#[derive(Clone)]
pub struct ChecklistItemService {
    repository: Arc<dyn ChecklistItemRepository>,
}

impl ChecklistItemService {
    pub fn new(repository: Arc<dyn ChecklistItemRepository>) -> Self {
        Self { repository }
    }

    /// All items, unfiltered
    pub async fn get_all_items(&self) -> ServiceResult<Vec<ChecklistItem>> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn get_item_by_id(&self, id: i64) -> ServiceResult<ChecklistItem> {
        self.find_existing(id).await
    }

    /// Persist a new item. Any id supplied by the caller is discarded.
    pub async fn create_item(&self, mut item: ChecklistItem) -> ServiceResult<ChecklistItem> {
        item.id = None;

        let saved = self.repository.save(item).await?;
        debug!("Created checklist item: {:?}", saved.id);
        Ok(saved)
    }

    /// Persist a batch of new items, discarding caller-supplied ids
    pub async fn create_items(
        &self,
        mut items: Vec<ChecklistItem>,
    ) -> ServiceResult<Vec<ChecklistItem>> {
        for item in &mut items {
            item.id = None;
        }

        let saved = self.repository.save_all(items).await?;
        debug!("Created {} checklist items", saved.len());
        Ok(saved)
    }

    /// Merge `patch` into the stored item.
    ///
    /// Blank or missing title/description keep the stored value, `completed`
    /// is always taken from the patch, and `version` goes up by one on every
    /// call whether or not anything changed. An item already at `i32::MAX`
    /// is rejected with `VersionExhausted` and left untouched.
    pub async fn update_item(
        &self,
        id: i64,
        patch: ChecklistItemPatch,
    ) -> ServiceResult<ChecklistItem> {
        let mut existing = self.find_existing(id).await?;

        if let Some(title) = non_blank(patch.title) {
            existing.title = title;
        }
        if let Some(description) = non_blank(patch.description) {
            existing.description = Some(description);
        }
        existing.completed = patch.completed;
        existing.version = existing
            .version
            .checked_add(1)
            .ok_or(ServiceError::VersionExhausted(id))?;

        debug!(
            "Updating checklist item {} to version {}",
            id, existing.version
        );

        match self.repository.save(existing).await {
            Ok(saved) => Ok(saved),
            // Deleted between the lookup and the write
            Err(StorageError::NotFound) => Err(ServiceError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete_item_by_id(&self, id: i64) -> ServiceResult<()> {
        let item = self.find_existing(id).await?;
        self.repository.delete(&item).await?;

        debug!("Deleted checklist item: {}", id);
        Ok(())
    }

    /// Case-insensitive title search. No matches is an empty list, not an error.
    pub async fn search_items(&self, keyword: &str) -> ServiceResult<Vec<ChecklistItem>> {
        Ok(self
            .repository
            .find_by_title_containing_ignore_case(keyword)
            .await?)
    }

    async fn find_existing(&self, id: i64) -> ServiceResult<ChecklistItem> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use listkeeper_storage::StorageResult;
    use mockall::{mock, predicate::*};
    use pretty_assertions::assert_eq;

    mock! {
        Repository {}

        #[async_trait::async_trait]
        impl ChecklistItemRepository for Repository {
            async fn find_all(&self) -> StorageResult<Vec<ChecklistItem>>;
            async fn find_by_id(&self, id: i64) -> StorageResult<Option<ChecklistItem>>;
            async fn find_by_title_containing_ignore_case(&self, keyword: &str) -> StorageResult<Vec<ChecklistItem>>;
            async fn save(&self, item: ChecklistItem) -> StorageResult<ChecklistItem>;
            async fn save_all(&self, items: Vec<ChecklistItem>) -> StorageResult<Vec<ChecklistItem>>;
            async fn delete(&self, item: &ChecklistItem) -> StorageResult<()>;
        }
    }

    fn stored_item() -> ChecklistItem {
        ChecklistItem {
            id: Some(1),
            title: "Test Task".to_string(),
            description: Some("Description".to_string()),
            completed: false,
            version: 0,
        }
    }

    fn service(repo: MockRepository) -> ChecklistItemService {
        ChecklistItemService::new(Arc::new(repo))
    }

    /// Repository whose `find_by_id(1)` returns `stored_item()` and whose
    /// `save` echoes its input back
    fn repo_with_stored_item() -> MockRepository {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(stored_item())));
        repo.expect_save().times(1).returning(Ok);
        repo
    }

    #[tokio::test]
    async fn test_get_all_items() {
        let mut repo = MockRepository::new();
        repo.expect_find_all()
            .times(1)
            .returning(|| Ok(vec![stored_item()]));

        let items = service(repo).get_all_items().await.unwrap();
        assert_eq!(items, vec![stored_item()]);
    }

    #[tokio::test]
    async fn test_get_all_items_empty() {
        let mut repo = MockRepository::new();
        repo.expect_find_all().returning(|| Ok(Vec::new()));

        let items = service(repo).get_all_items().await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_get_item_by_id_success() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(stored_item())));

        let item = service(repo).get_item_by_id(1).await.unwrap();
        assert_eq!(item.title, "Test Task");
    }

    #[tokio::test]
    async fn test_get_item_by_id_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id().with(eq(2)).returning(|_| Ok(None));

        let result = service(repo).get_item_by_id(2).await;
        assert!(matches!(result, Err(ServiceError::NotFound(2))));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            ServiceError::NotFound(7).to_string(),
            "Checklist item not found with ID: 7"
        );
    }

    #[tokio::test]
    async fn test_create_item_clears_supplied_id() {
        let mut repo = MockRepository::new();
        repo.expect_save()
            .withf(|item| item.id.is_none() && item.title == "Test Task")
            .times(1)
            .returning(|item| Ok(ChecklistItem { id: Some(10), ..item }));

        let mut input = stored_item();
        input.id = Some(99);

        let saved = service(repo).create_item(input).await.unwrap();
        assert_eq!(saved.id, Some(10));
        assert_eq!(saved.version, 0);
    }

    #[tokio::test]
    async fn test_create_items_clears_every_id() {
        let mut repo = MockRepository::new();
        repo.expect_save_all()
            .withf(|items| items.len() == 2 && items.iter().all(|i| i.id.is_none()))
            .times(1)
            .returning(|items| {
                Ok(items
                    .into_iter()
                    .zip(1..)
                    .map(|(item, id)| ChecklistItem { id: Some(id), ..item })
                    .collect())
            });

        let mut first = ChecklistItem::new("Pack bags");
        first.id = Some(5);
        let second = ChecklistItem::new("Book taxi");

        let saved = service(repo)
            .create_items(vec![first, second])
            .await
            .unwrap();
        let ids: Vec<_> = saved.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2)]);
    }

    #[tokio::test]
    async fn test_update_replaces_non_blank_fields() {
        let patch = ChecklistItemPatch {
            title: Some("Updated Task".to_string()),
            description: Some("New description".to_string()),
            completed: true,
        };

        let updated = service(repo_with_stored_item())
            .update_item(1, patch)
            .await
            .unwrap();

        assert_eq!(updated.id, Some(1));
        assert_eq!(updated.title, "Updated Task");
        assert_eq!(updated.description.as_deref(), Some("New description"));
        assert!(updated.completed);
        assert_eq!(updated.version, 1);
    }

    #[tokio::test]
    async fn test_update_ignores_blank_title_and_description() {
        let patch = ChecklistItemPatch {
            title: Some("   ".to_string()),
            description: Some(String::new()),
            completed: true,
        };

        let updated = service(repo_with_stored_item())
            .update_item(1, patch)
            .await
            .unwrap();

        assert_eq!(updated.title, "Test Task");
        assert_eq!(updated.description.as_deref(), Some("Description"));
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn test_update_ignores_absent_title_and_description() {
        let updated = service(repo_with_stored_item())
            .update_item(1, ChecklistItemPatch::default())
            .await
            .unwrap();

        assert_eq!(updated.title, "Test Task");
        assert_eq!(updated.description.as_deref(), Some("Description"));
    }

    #[tokio::test]
    async fn test_update_always_overwrites_completed() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id().returning(|_| {
            Ok(Some(ChecklistItem {
                completed: true,
                ..stored_item()
            }))
        });
        repo.expect_save().returning(Ok);

        // A patch without an explicit flag carries `false`
        let updated = service(repo)
            .update_item(1, ChecklistItemPatch::default())
            .await
            .unwrap();
        assert!(!updated.completed);
    }

    #[tokio::test]
    async fn test_update_bumps_version_even_without_changes() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id().returning(|_| {
            Ok(Some(ChecklistItem {
                version: 4,
                ..stored_item()
            }))
        });
        repo.expect_save()
            .withf(|item| item.version == 5)
            .times(1)
            .returning(Ok);

        let patch = ChecklistItemPatch {
            title: None,
            description: None,
            completed: false,
        };
        let updated = service(repo).update_item(1, patch).await.unwrap();

        assert_eq!(updated.version, 5);
        assert_eq!(updated.title, "Test Task");
    }

    #[tokio::test]
    async fn test_update_at_max_version_is_rejected_without_saving() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id().returning(|_| {
            Ok(Some(ChecklistItem {
                version: i32::MAX,
                ..stored_item()
            }))
        });
        repo.expect_save().times(0);

        let patch = ChecklistItemPatch {
            title: None,
            description: None,
            completed: true,
        };
        let result = service(repo).update_item(1, patch).await;

        assert!(matches!(result, Err(ServiceError::VersionExhausted(1))));
    }

    #[tokio::test]
    async fn test_update_not_found_does_not_save() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id().with(eq(2)).returning(|_| Ok(None));
        repo.expect_save().times(0);

        let patch = ChecklistItemPatch {
            title: Some("Updated Task".to_string()),
            description: None,
            completed: true,
        };
        let result = service(repo).update_item(2, patch).await;

        assert!(matches!(result, Err(ServiceError::NotFound(2))));
    }

    #[tokio::test]
    async fn test_update_row_vanished_before_write_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(stored_item())));
        repo.expect_save()
            .returning(|_| Err(StorageError::NotFound));

        let result = service(repo)
            .update_item(1, ChecklistItemPatch::default())
            .await;
        assert!(matches!(result, Err(ServiceError::NotFound(1))));
    }

    #[tokio::test]
    async fn test_delete_item_by_id() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(stored_item())));
        repo.expect_delete()
            .withf(|item| item.id == Some(1))
            .times(1)
            .returning(|_| Ok(()));

        service(repo).delete_item_by_id(1).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_item_by_id_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_id().with(eq(2)).returning(|_| Ok(None));
        repo.expect_delete().times(0);

        let result = service(repo).delete_item_by_id(2).await;
        assert!(matches!(result, Err(ServiceError::NotFound(2))));
    }

    #[tokio::test]
    async fn test_search_items_delegates_keyword() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_title_containing_ignore_case()
            .withf(|keyword| keyword == "test")
            .times(1)
            .returning(|_| Ok(vec![stored_item()]));

        let items = service(repo).search_items("test").await.unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_search_items_no_results() {
        let mut repo = MockRepository::new();
        repo.expect_find_by_title_containing_ignore_case()
            .returning(|_| Ok(Vec::new()));

        let items = service(repo).search_items("nothing").await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_storage_errors_pass_through() {
        let mut repo = MockRepository::new();
        repo.expect_find_all()
            .returning(|| Err(StorageError::Io(std::io::Error::other("disk unavailable"))));

        let result = service(repo).get_all_items().await;
        assert!(matches!(result, Err(ServiceError::Storage(_))));
    }
}
