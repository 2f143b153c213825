//! Device model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::DeviceStatus;

/// A piece of laboratory equipment
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: i32,
    pub name: String,
    /// Weak reference to a manufacturer; no cascading delete
    pub manufacturer_id: Option<i32>,
    /// Weak references to tags
    #[schema(value_type = Vec<i32>)]
    pub tags: Json<Vec<i32>>,
    /// Number of units owned
    pub quantity: i32,
    pub status: DeviceStatus,
    #[schema(value_type = Vec<String>)]
    pub documentation_links: Json<Vec<String>>,
    #[schema(value_type = Vec<String>)]
    pub images: Json<Vec<String>>,
    pub notes: Option<String>,
    pub configuration: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create device request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDevice {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub manufacturer_id: Option<i32>,
    #[serde(default)]
    pub tags: Vec<i32>,
    #[validate(range(min = 0, message = "quantity must be non-negative"))]
    #[serde(default)]
    pub quantity: i32,
    pub status: Option<DeviceStatus>,
    #[serde(default)]
    pub documentation_links: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub notes: Option<String>,
    pub configuration: Option<String>,
}

/// Partial device update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDevice {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub manufacturer_id: Option<i32>,
    pub tags: Option<Vec<i32>>,
    #[validate(range(min = 0, message = "quantity must be non-negative"))]
    pub quantity: Option<i32>,
    pub status: Option<DeviceStatus>,
    pub documentation_links: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub notes: Option<String>,
    pub configuration: Option<String>,
}

/// Envelope for device collection reads
#[derive(Debug, Serialize, ToSchema)]
pub struct DevicesResponse {
    pub success: bool,
    pub count: usize,
    pub devices: Vec<Device>,
}

/// Envelope for single-device reads and writes (soft 404: `device` is null)
#[derive(Debug, Serialize, ToSchema)]
pub struct DeviceResponse {
    pub success: bool,
    pub device: Option<Device>,
}
