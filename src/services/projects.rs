//! Project service

use crate::{
    error::AppResult,
    models::project::{CreateProject, Project, UpdateProject},
    repository::Repository,
    services::slug,
};

#[derive(Clone)]
pub struct ProjectsService {
    repository: Repository,
}

impl ProjectsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Project>> {
        self.repository.projects.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Project>> {
        self.repository.projects.get_by_id(id).await
    }

    /// Create a project with a generated unique slug; the slug is immutable
    /// afterwards
    pub async fn create(&self, data: &CreateProject) -> AppResult<Project> {
        let slug = slug::generate(&data.name, |candidate| {
            let repo = self.repository.projects.clone();
            async move { repo.slug_exists(&candidate).await }
        })
        .await?;
        self.repository.projects.create(&slug, data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateProject) -> AppResult<Option<Project>> {
        self.repository.projects.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<Option<Project>> {
        self.repository.projects.delete(id).await
    }

    pub async fn delete_all(&self) -> AppResult<u64> {
        self.repository.projects.delete_all().await
    }
}
