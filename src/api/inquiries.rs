//! Inquiry API endpoints, including the lifecycle transitions

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::inquiry::{
        ConfirmInquiry, CreateInquiry, DecideInquiry, DecisionResponse, InquiriesResponse,
        InquiryResponse, UpdateInquiry,
    },
};

use super::{lookup_status, IdQuery};

/// List all inquiries
#[utoipa::path(
    get,
    path = "/inquiries",
    tag = "inquiries",
    responses(
        (status = 200, description = "Inquiry list", body = InquiriesResponse)
    )
)]
pub async fn list_inquiries(
    State(state): State<crate::AppState>,
) -> AppResult<Json<InquiriesResponse>> {
    let inquiries = state.services.inquiries.list().await?;
    Ok(Json(InquiriesResponse {
        success: true,
        count: inquiries.len(),
        inquiries,
    }))
}

/// Get an inquiry by ID
#[utoipa::path(
    get,
    path = "/inquiry",
    tag = "inquiries",
    params(IdQuery),
    responses(
        (status = 200, description = "Inquiry details", body = InquiryResponse),
        (status = 404, description = "Unknown inquiry (soft 404)", body = InquiryResponse)
    )
)]
pub async fn get_inquiry(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<(StatusCode, Json<InquiryResponse>)> {
    let inquiry = state.services.inquiries.get_by_id(query.id).await?;
    Ok((
        lookup_status(&inquiry),
        Json(InquiryResponse {
            success: true,
            inquiry,
        }),
    ))
}

/// Submit a new inquiry (public form); starts Unconfirmed
#[utoipa::path(
    post,
    path = "/inquiry",
    tag = "inquiries",
    request_body = CreateInquiry,
    responses(
        (status = 201, description = "Inquiry created", body = InquiryResponse)
    )
)]
pub async fn create_inquiry(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateInquiry>,
) -> AppResult<(StatusCode, Json<InquiryResponse>)> {
    data.validate()?;
    let inquiry = state.services.inquiries.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(InquiryResponse {
            success: true,
            inquiry: Some(inquiry),
        }),
    ))
}

/// Partially update an inquiry's metadata
#[utoipa::path(
    put,
    path = "/inquiry",
    tag = "inquiries",
    params(IdQuery),
    request_body = UpdateInquiry,
    responses(
        (status = 200, description = "Inquiry updated", body = InquiryResponse),
        (status = 404, description = "Unknown inquiry (soft 404)", body = InquiryResponse)
    )
)]
pub async fn update_inquiry(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
    Json(data): Json<UpdateInquiry>,
) -> AppResult<(StatusCode, Json<InquiryResponse>)> {
    data.validate()?;
    let inquiry = state.services.inquiries.update(query.id, &data).await?;
    Ok((
        lookup_status(&inquiry),
        Json(InquiryResponse {
            success: true,
            inquiry,
        }),
    ))
}

/// Delete an inquiry
#[utoipa::path(
    delete,
    path = "/inquiry",
    tag = "inquiries",
    params(IdQuery),
    responses(
        (status = 200, description = "Inquiry deleted", body = InquiryResponse),
        (status = 404, description = "Unknown inquiry (soft 404)", body = InquiryResponse)
    )
)]
pub async fn delete_inquiry(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<(StatusCode, Json<InquiryResponse>)> {
    let inquiry = state.services.inquiries.delete(query.id).await?;
    Ok((
        lookup_status(&inquiry),
        Json(InquiryResponse {
            success: true,
            inquiry,
        }),
    ))
}

/// Redeem a confirmation token: Unconfirmed -> Pending
#[utoipa::path(
    post,
    path = "/inquiry/confirm",
    tag = "inquiries",
    request_body = ConfirmInquiry,
    responses(
        (status = 200, description = "Inquiry confirmed", body = InquiryResponse),
        (status = 404, description = "Unknown token", body = crate::error::ErrorResponse)
    )
)]
pub async fn confirm_inquiry(
    State(state): State<crate::AppState>,
    Json(data): Json<ConfirmInquiry>,
) -> AppResult<Json<InquiryResponse>> {
    let inquiry = state.services.inquiries.confirm(&data.token).await?;
    Ok(Json(InquiryResponse {
        success: true,
        inquiry: Some(inquiry),
    }))
}

/// Apply an admin decision: Pending -> Accepted | Rejected.
/// Accepting creates a project seeded from the inquiry.
#[utoipa::path(
    post,
    path = "/inquiry/decision",
    tag = "inquiries",
    params(IdQuery),
    request_body = DecideInquiry,
    responses(
        (status = 200, description = "Decision applied", body = DecisionResponse),
        (status = 400, description = "Invalid transition", body = crate::error::ErrorResponse)
    )
)]
pub async fn decide_inquiry(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
    Json(data): Json<DecideInquiry>,
) -> AppResult<Json<DecisionResponse>> {
    let (inquiry, project) = state.services.inquiries.decide(query.id, &data).await?;
    Ok(Json(DecisionResponse {
        success: true,
        inquiry,
        project,
    }))
}
