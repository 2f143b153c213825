//! Projects repository

use chrono::Utc;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::enums::ProjectStatus,
    models::project::{CreateProject, Project, UpdateProject},
};

#[derive(Clone)]
pub struct ProjectsRepository {
    pool: Pool<Postgres>,
}

impl ProjectsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all projects
    pub async fn list(&self) -> AppResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a project by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Project>> {
        let row = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Existence check used by the slug generator
    pub async fn slug_exists(&self, slug: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE slug = $1")
            .bind(slug)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Create a project with a pre-generated slug
    pub async fn create(&self, slug: &str, data: &CreateProject) -> AppResult<Project> {
        let row = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects
                (slug, name, description, lead_contact, courses, timelapse,
                 status, devices, notes, images)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(slug)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.lead_contact)
        .bind(Json(&data.courses))
        .bind(data.timelapse.as_ref().map(Json))
        .bind(data.status.unwrap_or(ProjectStatus::NotStarted))
        .bind(Json(&data.devices))
        .bind(&data.notes)
        .bind(Json(&data.images))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update of a project; the slug never changes
    pub async fn update(&self, id: i32, data: &UpdateProject) -> AppResult<Option<Project>> {
        let now = Utc::now();
        let courses = data.courses.as_ref().map(Json);
        let timelapse = data.timelapse.as_ref().map(Json);
        let devices = data.devices.as_ref().map(Json);
        let images = data.images.as_ref().map(Json);

        let mut sets = vec!["modif_date = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.name, "name");
        add_field!(data.description, "description");
        add_field!(data.lead_contact, "lead_contact");
        add_field!(courses, "courses");
        add_field!(timelapse, "timelapse");
        add_field!(data.status, "status");
        add_field!(devices, "devices");
        add_field!(data.notes, "notes");
        add_field!(images, "images");

        let query = format!(
            "UPDATE projects SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Project>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.description);
        bind_field!(data.lead_contact);
        bind_field!(courses);
        bind_field!(timelapse);
        bind_field!(data.status);
        bind_field!(devices);
        bind_field!(data.notes);
        bind_field!(images);

        let row = builder.fetch_optional(&self.pool).await?;
        Ok(row)
    }

    /// Delete a project, returning the removed row if it existed
    pub async fn delete(&self, id: i32) -> AppResult<Option<Project>> {
        let row = sqlx::query_as::<_, Project>("DELETE FROM projects WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Delete every project, returning the number removed
    pub async fn delete_all(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM projects")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
