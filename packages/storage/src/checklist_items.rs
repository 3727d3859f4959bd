// ABOUTME: Checklist item storage layer using SQLite
// ABOUTME: Handles lookup, search, insert/update, batch save, and delete for checklist items

use async_trait::async_trait;
use listkeeper_core::ChecklistItem;
use sqlx::{sqlite::SqliteRow, Row, SqliteConnection, SqlitePool};
use tracing::debug;

use crate::repository::ChecklistItemRepository;
use crate::{StorageError, StorageResult};

pub struct SqliteChecklistItemRepository {
    pool: SqlitePool,
}

impl SqliteChecklistItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChecklistItemRepository for SqliteChecklistItemRepository {
    async fn find_all(&self) -> StorageResult<Vec<ChecklistItem>> {
        debug!("Fetching all checklist items");

        let rows = sqlx::query(
            "SELECT id, title, description, completed, version FROM checklist_items ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        rows.iter().map(row_to_item).collect()
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<ChecklistItem>> {
        debug!("Fetching checklist item: {}", id);

        let row = sqlx::query(
            "SELECT id, title, description, completed, version FROM checklist_items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        match row {
            Some(r) => Ok(Some(row_to_item(&r)?)),
            None => Ok(None),
        }
    }

    async fn find_by_title_containing_ignore_case(
        &self,
        keyword: &str,
    ) -> StorageResult<Vec<ChecklistItem>> {
        debug!("Searching checklist items by title: {:?}", keyword);

        let needle = keyword.to_lowercase();

        // LIKE folds ASCII only; fold Unicode case in Rust
        let items = self.find_all().await?;

        Ok(items
            .into_iter()
            .filter(|item| item.title.to_lowercase().contains(&needle))
            .collect())
    }

    async fn save(&self, item: ChecklistItem) -> StorageResult<ChecklistItem> {
        let mut conn = self.pool.acquire().await.map_err(StorageError::Sqlx)?;
        save_on(&mut *conn, item).await
    }

    async fn save_all(&self, items: Vec<ChecklistItem>) -> StorageResult<Vec<ChecklistItem>> {
        debug!("Saving batch of {} checklist items", items.len());

        let mut tx = self.pool.begin().await.map_err(StorageError::Sqlx)?;

        let mut saved = Vec::with_capacity(items.len());
        for item in items {
            saved.push(save_on(&mut *tx, item).await?);
        }

        tx.commit().await.map_err(StorageError::Sqlx)?;

        Ok(saved)
    }

    async fn delete(&self, item: &ChecklistItem) -> StorageResult<()> {
        let Some(id) = item.id else {
            return Ok(());
        };

        debug!("Deleting checklist item: {}", id);

        sqlx::query("DELETE FROM checklist_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(())
    }
}

/// Insert or update on a single connection so batches can share a transaction
async fn save_on(conn: &mut SqliteConnection, item: ChecklistItem) -> StorageResult<ChecklistItem> {
    match item.id {
        None => {
            debug!("Inserting checklist item: {}", item.title);

            let row = sqlx::query(
                r#"
                INSERT INTO checklist_items (title, description, completed, version)
                VALUES (?, ?, ?, ?)
                RETURNING id, title, description, completed, version
                "#,
            )
            .bind(&item.title)
            .bind(&item.description)
            .bind(item.completed)
            .bind(item.version)
            .fetch_one(&mut *conn)
            .await
            .map_err(StorageError::Sqlx)?;

            row_to_item(&row)
        }
        Some(id) => {
            debug!("Updating checklist item: {}", id);

            let row = sqlx::query(
                r#"
                UPDATE checklist_items
                SET title = ?, description = ?, completed = ?, version = ?
                WHERE id = ?
                RETURNING id, title, description, completed, version
                "#,
            )
            .bind(&item.title)
            .bind(&item.description)
            .bind(item.completed)
            .bind(item.version)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(StorageError::Sqlx)?;

            match row {
                Some(r) => row_to_item(&r),
                None => Err(StorageError::NotFound),
            }
        }
    }
}

/// Convert a database row to a ChecklistItem
fn row_to_item(row: &SqliteRow) -> StorageResult<ChecklistItem> {
    Ok(ChecklistItem {
        id: Some(row.try_get("id").map_err(StorageError::Sqlx)?),
        title: row.try_get("title").map_err(StorageError::Sqlx)?,
        description: row.try_get("description").map_err(StorageError::Sqlx)?,
        completed: row.try_get("completed").map_err(StorageError::Sqlx)?,
        version: row.try_get("version").map_err(StorageError::Sqlx)?,
    })
}
