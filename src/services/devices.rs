//! Device service

use crate::{
    error::AppResult,
    models::device::{CreateDevice, Device, UpdateDevice},
    repository::Repository,
};

#[derive(Clone)]
pub struct DevicesService {
    repository: Repository,
}

impl DevicesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Device>> {
        self.repository.devices.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Device>> {
        self.repository.devices.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateDevice) -> AppResult<Device> {
        self.repository.devices.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateDevice) -> AppResult<Option<Device>> {
        self.repository.devices.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<Option<Device>> {
        self.repository.devices.delete(id).await
    }
}
