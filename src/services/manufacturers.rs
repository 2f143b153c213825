//! Manufacturer service

use crate::{
    error::{AppError, AppResult},
    models::manufacturer::{BulkManufacturerUpdate, CreateManufacturer, Manufacturer, UpdateManufacturer},
    repository::Repository,
    services::{bulk, slug},
};

#[derive(Clone)]
pub struct ManufacturersService {
    repository: Repository,
}

impl ManufacturersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Manufacturer>> {
        self.repository.manufacturers.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Manufacturer>> {
        self.repository.manufacturers.get_by_id(id).await
    }

    /// Create a manufacturer with a generated unique slug
    pub async fn create(&self, data: &CreateManufacturer) -> AppResult<Manufacturer> {
        let slug = slug::generate(&data.name, |candidate| {
            let repo = self.repository.manufacturers.clone();
            async move { repo.slug_exists(&candidate).await }
        })
        .await?;
        self.repository.manufacturers.create(&slug, data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateManufacturer) -> AppResult<Option<Manufacturer>> {
        self.repository.manufacturers.update(id, data).await
    }

    /// Bulk update with batch-level name uniqueness validation.
    ///
    /// Rejects the whole batch before any write on a duplicate name;
    /// afterwards elements are applied one by one (no cross-batch
    /// atomicity). Rows whose id matches nothing are skipped.
    pub async fn update_bulk(&self, items: &[BulkManufacturerUpdate]) -> AppResult<Vec<Manufacturer>> {
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        if let Some(duplicate) = bulk::find_duplicate_name(&names) {
            return Err(AppError::DuplicateField(duplicate.to_string()));
        }

        let mut updated = Vec::with_capacity(items.len());
        for item in items {
            if let Some(row) = self.repository.manufacturers.update_bulk_item(item).await? {
                updated.push(row);
            }
        }
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<Option<Manufacturer>> {
        self.repository.manufacturers.delete(id).await
    }

    pub async fn delete_all(&self) -> AppResult<u64> {
        self.repository.manufacturers.delete_all().await
    }
}
