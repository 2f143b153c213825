//! Mailer API endpoints
//!
//! Thin wrappers over the email service; the admin frontend drives these
//! directly. The lifecycle notifications (acceptance, rejection) are sent by
//! the inquiry service itself.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestEmailRequest {
    #[validate(email(message = "recipient is not a valid address"))]
    pub to: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InquiryConfirmationEmailRequest {
    /// Inquiry whose requester receives the confirmation link
    pub inquiry_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InquiryOpeningEmailRequest {
    /// Administrator address to notify
    #[validate(email(message = "recipient is not a valid address"))]
    pub to: String,
    pub inquiry_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MailerResponse {
    pub success: bool,
}

/// Send a test email to verify the SMTP configuration
#[utoipa::path(
    post,
    path = "/mailer/send-test-email",
    tag = "mailer",
    request_body = TestEmailRequest,
    responses(
        (status = 200, description = "Email sent", body = MailerResponse),
        (status = 502, description = "SMTP failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn send_test_email(
    State(state): State<crate::AppState>,
    Json(data): Json<TestEmailRequest>,
) -> AppResult<Json<MailerResponse>> {
    data.validate()?;
    state.services.email.send_test(&data.to).await?;
    Ok(Json(MailerResponse { success: true }))
}

/// Send the confirmation link to an inquiry's requester
#[utoipa::path(
    post,
    path = "/mailer/send-inquiry-confirmation-email",
    tag = "mailer",
    request_body = InquiryConfirmationEmailRequest,
    responses(
        (status = 200, description = "Email sent", body = MailerResponse),
        (status = 404, description = "Unknown inquiry", body = crate::error::ErrorResponse)
    )
)]
pub async fn send_inquiry_confirmation_email(
    State(state): State<crate::AppState>,
    Json(data): Json<InquiryConfirmationEmailRequest>,
) -> AppResult<Json<MailerResponse>> {
    let inquiry = state
        .services
        .inquiries
        .get_by_id(data.inquiry_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Inquiry {} not found", data.inquiry_id)))?;

    state
        .services
        .email
        .send_inquiry_confirmation(&inquiry.requester_email, &inquiry.confirmation_token)
        .await?;
    Ok(Json(MailerResponse { success: true }))
}

/// Notify an administrator that a new project inquiry awaits review
#[utoipa::path(
    post,
    path = "/mailer/send-new-project-inquiry-opening-email",
    tag = "mailer",
    request_body = InquiryOpeningEmailRequest,
    responses(
        (status = 200, description = "Email sent", body = MailerResponse),
        (status = 404, description = "Unknown inquiry", body = crate::error::ErrorResponse)
    )
)]
pub async fn send_new_project_inquiry_opening_email(
    State(state): State<crate::AppState>,
    Json(data): Json<InquiryOpeningEmailRequest>,
) -> AppResult<Json<MailerResponse>> {
    data.validate()?;
    let inquiry = state
        .services
        .inquiries
        .get_by_id(data.inquiry_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Inquiry {} not found", data.inquiry_id)))?;

    state
        .services
        .email
        .send_new_inquiry_opening(&data.to, &inquiry.name, &inquiry.requester_name)
        .await?;
    Ok(Json(MailerResponse { success: true }))
}
