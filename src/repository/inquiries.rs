//! Inquiries repository

use chrono::Utc;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::enums::InquiryStatus,
    models::inquiry::{CreateInquiry, Inquiry, UpdateInquiry},
};

#[derive(Clone)]
pub struct InquiriesRepository {
    pool: Pool<Postgres>,
}

impl InquiriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all inquiries
    pub async fn list(&self) -> AppResult<Vec<Inquiry>> {
        let rows = sqlx::query_as::<_, Inquiry>("SELECT * FROM inquiries ORDER BY crea_date DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get an inquiry by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Inquiry>> {
        let row = sqlx::query_as::<_, Inquiry>("SELECT * FROM inquiries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Look up an inquiry by its confirmation token
    pub async fn get_by_token(&self, token: &str) -> AppResult<Option<Inquiry>> {
        let row =
            sqlx::query_as::<_, Inquiry>("SELECT * FROM inquiries WHERE confirmation_token = $1")
                .bind(token)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row)
    }

    /// Create an inquiry in the Unconfirmed state with the given token
    pub async fn create(&self, token: &str, data: &CreateInquiry) -> AppResult<Inquiry> {
        let row = sqlx::query_as::<_, Inquiry>(
            r#"
            INSERT INTO inquiries
                (requester_name, requester_email, devices, name, description,
                 lead_contact, courses, timelapse, notes, status, confirmation_token)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&data.requester_name)
        .bind(&data.requester_email)
        .bind(Json(&data.devices))
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.lead_contact)
        .bind(Json(&data.courses))
        .bind(data.timelapse.as_ref().map(Json))
        .bind(&data.notes)
        .bind(InquiryStatus::Unconfirmed)
        .bind(token)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update of inquiry metadata; status is set via `set_status`
    pub async fn update(&self, id: i32, data: &UpdateInquiry) -> AppResult<Option<Inquiry>> {
        let now = Utc::now();
        let devices = data.devices.as_ref().map(Json);
        let courses = data.courses.as_ref().map(Json);
        let timelapse = data.timelapse.as_ref().map(Json);

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

        add_field!(data.requester_name, "requester_name");
        add_field!(data.requester_email, "requester_email");
        add_field!(devices, "devices");
        add_field!(data.name, "name");
        add_field!(data.description, "description");
        add_field!(data.lead_contact, "lead_contact");
        add_field!(courses, "courses");
        add_field!(timelapse, "timelapse");
        add_field!(data.notes, "notes");

        let query = format!(
            "UPDATE inquiries SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Inquiry>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.requester_name);
        bind_field!(data.requester_email);
        bind_field!(devices);
        bind_field!(data.name);
        bind_field!(data.description);
        bind_field!(data.lead_contact);
        bind_field!(courses);
        bind_field!(timelapse);
        bind_field!(data.notes);

        let row = builder.fetch_optional(&self.pool).await?;
        Ok(row)
    }

    /// Set the lifecycle status of an inquiry
    pub async fn set_status(&self, id: i32, status: InquiryStatus) -> AppResult<Option<Inquiry>> {
        let row = sqlx::query_as::<_, Inquiry>(
            "UPDATE inquiries SET status = $2, modif_date = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete an inquiry, returning the removed row if it existed
    pub async fn delete(&self, id: i32) -> AppResult<Option<Inquiry>> {
        let row = sqlx::query_as::<_, Inquiry>("DELETE FROM inquiries WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
