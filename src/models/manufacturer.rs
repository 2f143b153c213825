//! Manufacturer model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// An equipment manufacturer
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Manufacturer {
    pub id: i32,
    /// Generated URL-safe identifier, immutable after creation
    pub slug: String,
    pub name: String,
    pub notes: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create manufacturer request; the slug is generated server-side
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateManufacturer {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub notes: Option<String>,
}

/// Partial manufacturer update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateManufacturer {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub notes: Option<String>,
}

/// One element of a bulk manufacturer update
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkManufacturerUpdate {
    pub id: i32,
    pub name: String,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ManufacturersResponse {
    pub success: bool,
    pub count: usize,
    pub manufacturers: Vec<Manufacturer>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ManufacturerResponse {
    pub success: bool,
    pub manufacturer: Option<Manufacturer>,
}
