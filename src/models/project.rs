//! Project model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::enums::ProjectStatus;

/// Project time range; start must not be after end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Timelapse {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Timelapse {
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }
}

pub fn validate_timelapse(t: &Timelapse) -> Result<(), ValidationError> {
    if t.is_valid() {
        Ok(())
    } else {
        Err(ValidationError::new("timelapse_start_after_end"))
    }
}

/// Reservation of a number of units of one device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceReservation {
    pub device_id: i32,
    pub quantity: i32,
}

/// A project that reserves devices for a time range
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    /// Generated URL-safe identifier, immutable after creation
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub lead_contact: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub courses: Json<Vec<String>>,
    #[schema(value_type = Option<Timelapse>)]
    pub timelapse: Option<Json<Timelapse>>,
    pub status: ProjectStatus,
    #[schema(value_type = Vec<DeviceReservation>)]
    pub devices: Json<Vec<DeviceReservation>>,
    pub notes: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub images: Json<Vec<String>>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

impl Project {
    /// URL path under which the project is reachable
    pub fn path(&self) -> String {
        format!("/projects/{}", self.slug)
    }
}

/// Create project request; the slug is generated server-side
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub lead_contact: Option<String>,
    #[serde(default)]
    pub courses: Vec<String>,
    #[validate(custom(function = "validate_timelapse"))]
    pub timelapse: Option<Timelapse>,
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub devices: Vec<DeviceReservation>,
    pub notes: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial project update request; the slug cannot be changed
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub lead_contact: Option<String>,
    pub courses: Option<Vec<String>>,
    #[validate(custom(function = "validate_timelapse"))]
    pub timelapse: Option<Timelapse>,
    pub status: Option<ProjectStatus>,
    pub devices: Option<Vec<DeviceReservation>>,
    pub notes: Option<String>,
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectsResponse {
    pub success: bool,
    pub count: usize,
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectResponse {
    pub success: bool,
    pub project: Option<Project>,
}
