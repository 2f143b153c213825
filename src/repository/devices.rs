//! Devices repository

use chrono::Utc;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::device::{CreateDevice, Device, UpdateDevice},
    models::enums::DeviceStatus,
};

#[derive(Clone)]
pub struct DevicesRepository {
    pool: Pool<Postgres>,
}

impl DevicesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all devices
    pub async fn list(&self) -> AppResult<Vec<Device>> {
        let rows = sqlx::query_as::<_, Device>("SELECT * FROM devices ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a device by ID; None maps to the soft 404 in the API layer
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Device>> {
        let row = sqlx::query_as::<_, Device>("SELECT * FROM devices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Create a device
    pub async fn create(&self, data: &CreateDevice) -> AppResult<Device> {
        let row = sqlx::query_as::<_, Device>(
            r#"
            INSERT INTO devices
                (name, manufacturer_id, tags, quantity, status,
                 documentation_links, images, notes, configuration)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(data.manufacturer_id)
        .bind(Json(&data.tags))
        .bind(data.quantity)
        .bind(data.status.unwrap_or(DeviceStatus::Available))
        .bind(Json(&data.documentation_links))
        .bind(Json(&data.images))
        .bind(&data.notes)
        .bind(&data.configuration)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update of a device
    pub async fn update(&self, id: i32, data: &UpdateDevice) -> AppResult<Option<Device>> {
        let now = Utc::now();
        let tags = data.tags.as_ref().map(Json);
        let documentation_links = data.documentation_links.as_ref().map(Json);
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
        add_field!(data.manufacturer_id, "manufacturer_id");
        add_field!(tags, "tags");
        add_field!(data.quantity, "quantity");
        add_field!(data.status, "status");
        add_field!(documentation_links, "documentation_links");
        add_field!(images, "images");
        add_field!(data.notes, "notes");
        add_field!(data.configuration, "configuration");

        let query = format!(
            "UPDATE devices SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Device>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.manufacturer_id);
        bind_field!(tags);
        bind_field!(data.quantity);
        bind_field!(data.status);
        bind_field!(documentation_links);
        bind_field!(images);
        bind_field!(data.notes);
        bind_field!(data.configuration);

        let row = builder.fetch_optional(&self.pool).await?;
        Ok(row)
    }

    /// Delete a device, returning the removed row if it existed
    pub async fn delete(&self, id: i32) -> AppResult<Option<Device>> {
        let row = sqlx::query_as::<_, Device>("DELETE FROM devices WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
