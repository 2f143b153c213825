//! Tag service

use crate::{
    error::{AppError, AppResult},
    models::tag::{BulkTagUpdate, CreateTag, Tag, UpdateTag},
    repository::Repository,
    services::bulk,
};

#[derive(Clone)]
pub struct TagsService {
    repository: Repository,
}

impl TagsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Tag>> {
        self.repository.tags.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Tag>> {
        self.repository.tags.get_by_id(id).await
    }

    /// Create a tag; the name is an enforced unique field
    pub async fn create(&self, data: &CreateTag) -> AppResult<Tag> {
        if self.repository.tags.name_exists(&data.name).await? {
            return Err(AppError::DuplicateField(data.name.clone()));
        }
        self.repository.tags.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateTag) -> AppResult<Option<Tag>> {
        self.repository.tags.update(id, data).await
    }

    /// Bulk update with batch-level name uniqueness validation.
    ///
    /// Rejects the whole batch before any write on a duplicate name;
    /// afterwards elements are applied one by one (no cross-batch
    /// atomicity). Rows whose id matches nothing are skipped.
    pub async fn update_bulk(&self, items: &[BulkTagUpdate]) -> AppResult<Vec<Tag>> {
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        if let Some(duplicate) = bulk::find_duplicate_name(&names) {
            return Err(AppError::DuplicateField(duplicate.to_string()));
        }

        let mut updated = Vec::with_capacity(items.len());
        for item in items {
            if let Some(row) = self.repository.tags.update_bulk_item(item).await? {
                updated.push(row);
            }
        }
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<Option<Tag>> {
        self.repository.tags.delete(id).await
    }

    pub async fn delete_all(&self) -> AppResult<u64> {
        self.repository.tags.delete_all().await
    }
}
