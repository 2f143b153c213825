//! Inquiry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::InquiryStatus;
use super::project::{validate_timelapse, DeviceReservation, Timelapse};

/// A prospective project request awaiting confirmation and admin decision
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: i32,
    pub requester_name: String,
    pub requester_email: String,
    /// Requested device reservations
    #[schema(value_type = Vec<DeviceReservation>)]
    pub devices: Json<Vec<DeviceReservation>>,
    // Project metadata mirrored onto the Project created on acceptance
    pub name: String,
    pub description: Option<String>,
    pub lead_contact: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub courses: Json<Vec<String>>,
    #[schema(value_type = Option<Timelapse>)]
    pub timelapse: Option<Json<Timelapse>>,
    pub notes: Option<String>,
    pub status: InquiryStatus,
    /// Opaque token redeemed by the email confirmation endpoint
    pub confirmation_token: String,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Public inquiry submission
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiry {
    #[validate(length(min = 1, message = "requester name must not be empty"))]
    pub requester_name: String,
    #[validate(email(message = "requester email is not a valid address"))]
    pub requester_email: String,
    #[serde(default)]
    pub devices: Vec<DeviceReservation>,
    #[validate(length(min = 1, message = "project name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub lead_contact: Option<String>,
    #[serde(default)]
    pub courses: Vec<String>,
    #[validate(custom(function = "validate_timelapse"))]
    pub timelapse: Option<Timelapse>,
    pub notes: Option<String>,
}

/// Admin edit of an inquiry; status is driven by the lifecycle endpoints
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInquiry {
    #[validate(length(min = 1, message = "requester name must not be empty"))]
    pub requester_name: Option<String>,
    #[validate(email(message = "requester email is not a valid address"))]
    pub requester_email: Option<String>,
    pub devices: Option<Vec<DeviceReservation>>,
    #[validate(length(min = 1, message = "project name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub lead_contact: Option<String>,
    pub courses: Option<Vec<String>>,
    #[validate(custom(function = "validate_timelapse"))]
    pub timelapse: Option<Timelapse>,
    pub notes: Option<String>,
}

/// Token redemption request (Unconfirmed -> Pending)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmInquiry {
    pub token: String,
}

/// Admin decision on a pending inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum InquiryDecision {
    Accepted,
    Rejected,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecideInquiry {
    pub decision: InquiryDecision,
    /// Reason forwarded to the requester on rejection
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InquiriesResponse {
    pub success: bool,
    pub count: usize,
    pub inquiries: Vec<Inquiry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InquiryResponse {
    pub success: bool,
    pub inquiry: Option<Inquiry>,
}

/// Result of an accepted decision: the inquiry plus the created project
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResponse {
    pub success: bool,
    pub inquiry: Inquiry,
    pub project: Option<super::project::Project>,
}
