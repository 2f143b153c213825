//! Manufacturers repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::manufacturer::{BulkManufacturerUpdate, CreateManufacturer, Manufacturer, UpdateManufacturer},
};

#[derive(Clone)]
pub struct ManufacturersRepository {
    pool: Pool<Postgres>,
}

impl ManufacturersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all manufacturers
    pub async fn list(&self) -> AppResult<Vec<Manufacturer>> {
        let rows = sqlx::query_as::<_, Manufacturer>("SELECT * FROM manufacturers ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a manufacturer by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Manufacturer>> {
        let row = sqlx::query_as::<_, Manufacturer>("SELECT * FROM manufacturers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Existence check used by the slug generator
    pub async fn slug_exists(&self, slug: &str) -> AppResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM manufacturers WHERE slug = $1")
                .bind(slug)
                .fetch_one(&self.pool)
                .await?;
        Ok(count > 0)
    }

    /// Create a manufacturer with a pre-generated slug
    pub async fn create(&self, slug: &str, data: &CreateManufacturer) -> AppResult<Manufacturer> {
        let row = sqlx::query_as::<_, Manufacturer>(
            r#"
            INSERT INTO manufacturers (slug, name, notes)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(slug)
        .bind(&data.name)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update of a manufacturer; the slug never changes
    pub async fn update(&self, id: i32, data: &UpdateManufacturer) -> AppResult<Option<Manufacturer>> {
        let now = Utc::now();
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
        add_field!(data.notes, "notes");

        let query = format!(
            "UPDATE manufacturers SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Manufacturer>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.notes);

        let row = builder.fetch_optional(&self.pool).await?;
        Ok(row)
    }

    /// Apply one element of a validated bulk update
    pub async fn update_bulk_item(&self, item: &BulkManufacturerUpdate) -> AppResult<Option<Manufacturer>> {
        let row = sqlx::query_as::<_, Manufacturer>(
            r#"
            UPDATE manufacturers
            SET name = $2, notes = COALESCE($3, notes), modif_date = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.notes)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a manufacturer, returning the removed row if it existed
    pub async fn delete(&self, id: i32) -> AppResult<Option<Manufacturer>> {
        let row =
            sqlx::query_as::<_, Manufacturer>("DELETE FROM manufacturers WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row)
    }

    /// Delete every manufacturer, returning the number removed
    pub async fn delete_all(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM manufacturers")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
