//! API handlers for LabTrack REST endpoints

pub mod devices;
pub mod health;
pub mod histories;
pub mod images;
pub mod inquiries;
pub mod mailer;
pub mod manufacturers;
pub mod openapi;
pub mod projects;
pub mod tags;
pub mod users;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// `?id=` query parameter shared by the single-entity endpoints
#[derive(Debug, Deserialize, IntoParams)]
pub struct IdQuery {
    pub id: i32,
}

/// Soft-404 status: lookups report 404 for an absent resource while the
/// body still carries `success:true` and a null payload.
pub fn lookup_status<T>(found: &Option<T>) -> StatusCode {
    if found.is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Envelope for the delete-all endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteAllResponse {
    pub success: bool,
    /// Number of rows removed
    pub count: u64,
}
