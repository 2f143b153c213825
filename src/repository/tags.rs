//! Tags repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::tag::{BulkTagUpdate, CreateTag, Tag, UpdateTag},
};

#[derive(Clone)]
pub struct TagsRepository {
    pool: Pool<Postgres>,
}

impl TagsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all tags
    pub async fn list(&self) -> AppResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, Tag>("SELECT * FROM tags ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a tag by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Tag>> {
        let row = sqlx::query_as::<_, Tag>("SELECT * FROM tags WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Unique-field pre-check for tag creation
    pub async fn name_exists(&self, name: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags WHERE name = $1")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Create a tag
    pub async fn create(&self, data: &CreateTag) -> AppResult<Tag> {
        let row = sqlx::query_as::<_, Tag>(
            "INSERT INTO tags (name) VALUES ($1) RETURNING *",
        )
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a tag's name
    pub async fn update(&self, id: i32, data: &UpdateTag) -> AppResult<Option<Tag>> {
        match &data.name {
            Some(name) => {
                let row = sqlx::query_as::<_, Tag>(
                    "UPDATE tags SET name = $2, modif_date = $3 WHERE id = $1 RETURNING *",
                )
                .bind(id)
                .bind(name)
                .bind(Utc::now())
                .fetch_optional(&self.pool)
                .await?;
                Ok(row)
            }
            None => self.get_by_id(id).await,
        }
    }

    /// Apply one element of a validated bulk update
    pub async fn update_bulk_item(&self, item: &BulkTagUpdate) -> AppResult<Option<Tag>> {
        let row = sqlx::query_as::<_, Tag>(
            "UPDATE tags SET name = $2, modif_date = $3 WHERE id = $1 RETURNING *",
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a tag, returning the removed row if it existed
    pub async fn delete(&self, id: i32) -> AppResult<Option<Tag>> {
        let row = sqlx::query_as::<_, Tag>("DELETE FROM tags WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Delete every tag, returning the number removed
    pub async fn delete_all(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM tags").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
