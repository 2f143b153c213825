//! Error types for the LabTrack server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
///
/// The soft 404 of CRUD lookups (HTTP 404 with `success:true` and a null
/// payload) is handled in the API layer and never goes through this type;
/// `NotFound` is the hard variant for resources that must exist.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Duplicate value for enforced unique field: {0}")]
    DuplicateField(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    #[error("Invalid confirmation token")]
    InvalidToken,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Identifier generation exhausted after {0} attempts")]
    GenerationExhausted(usize),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Email error: {0}")]
    Email(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

/// Error response body: `{success:false, error:<CODE>, message:<string>}`
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    /// Set on `ENFORCE_UNIQUE_FIELD` errors: the offending value
    #[serde(rename = "nonUniqueName", skip_serializing_if = "Option::is_none")]
    pub non_unique_name: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut non_unique_name = None;

        let (status, code, message) = match &self {
            AppError::DuplicateField(value) => {
                non_unique_name = Some(value.clone());
                (
                    StatusCode::BAD_REQUEST,
                    "ENFORCE_UNIQUE_FIELD",
                    format!("Value '{}' is already in use", value),
                )
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "BAD_VALUE", msg.clone()),
            AppError::InvalidTransition(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_TRANSITION", msg.clone())
            }
            AppError::InvalidToken => (
                StatusCode::NOT_FOUND,
                "INVALID_TOKEN",
                "No inquiry matches this confirmation token".to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::GenerationExhausted(attempts) => {
                tracing::error!("Slug generation exhausted after {} attempts", attempts);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_EXHAUSTED",
                    "Could not generate a unique identifier".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "Database error".to_string(),
                )
            }
            AppError::Email(msg) => {
                tracing::error!("Email error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "EMAIL_FAILURE",
                    "Could not send email".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            error: code.to_string(),
            message,
            non_unique_name,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
