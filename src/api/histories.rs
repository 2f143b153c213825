//! History API endpoints
//!
//! Reads return the resolved view (project references embedded, orphaned
//! entries omitted); writes operate on the stored documents.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::history::{
        AppendHistory, HistoriesResponse, HistoryDocumentResponse, HistoryResponse, UpdateHistory,
    },
};

use super::{lookup_status, DeleteAllResponse, IdQuery};

/// List all histories (resolved view)
#[utoipa::path(
    get,
    path = "/histories",
    tag = "histories",
    responses(
        (status = 200, description = "History list", body = HistoriesResponse)
    )
)]
pub async fn list_histories(
    State(state): State<crate::AppState>,
) -> AppResult<Json<HistoriesResponse>> {
    let histories = state.services.history.list_resolved().await?;
    Ok(Json(HistoriesResponse {
        success: true,
        count: histories.len(),
        histories,
    }))
}

/// Get one history by ID (resolved view)
#[utoipa::path(
    get,
    path = "/history",
    tag = "histories",
    params(IdQuery),
    responses(
        (status = 200, description = "History details", body = HistoryResponse),
        (status = 404, description = "Unknown history (soft 404)", body = HistoryResponse)
    )
)]
pub async fn get_history(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<(StatusCode, Json<HistoryResponse>)> {
    let history = state.services.history.get_resolved(query.id).await?;
    Ok((
        lookup_status(&history),
        Json(HistoryResponse {
            success: true,
            history,
        }),
    ))
}

/// Append entries to a device's history, creating the document on first use
#[utoipa::path(
    post,
    path = "/history",
    tag = "histories",
    request_body = AppendHistory,
    responses(
        (status = 200, description = "Entries appended", body = HistoryDocumentResponse)
    )
)]
pub async fn append_history(
    State(state): State<crate::AppState>,
    Json(data): Json<AppendHistory>,
) -> AppResult<Json<HistoryDocumentResponse>> {
    let history = state.services.history.append(&data).await?;
    Ok(Json(HistoryDocumentResponse {
        success: true,
        history: Some(history),
    }))
}

/// Replace a history document's entry list (admin maintenance)
#[utoipa::path(
    put,
    path = "/history",
    tag = "histories",
    params(IdQuery),
    request_body = UpdateHistory,
    responses(
        (status = 200, description = "History updated", body = HistoryDocumentResponse),
        (status = 404, description = "Unknown history (soft 404)", body = HistoryDocumentResponse)
    )
)]
pub async fn update_history(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
    Json(data): Json<UpdateHistory>,
) -> AppResult<(StatusCode, Json<HistoryDocumentResponse>)> {
    let history = state
        .services
        .history
        .replace(query.id, &data.entries)
        .await?;
    Ok((
        lookup_status(&history),
        Json(HistoryDocumentResponse {
            success: true,
            history,
        }),
    ))
}

/// Delete a history document
#[utoipa::path(
    delete,
    path = "/history",
    tag = "histories",
    params(IdQuery),
    responses(
        (status = 200, description = "History deleted", body = HistoryDocumentResponse),
        (status = 404, description = "Unknown history (soft 404)", body = HistoryDocumentResponse)
    )
)]
pub async fn delete_history(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<(StatusCode, Json<HistoryDocumentResponse>)> {
    let history = state.services.history.delete(query.id).await?;
    Ok((
        lookup_status(&history),
        Json(HistoryDocumentResponse {
            success: true,
            history,
        }),
    ))
}

/// Delete every history document
#[utoipa::path(
    delete,
    path = "/all-histories",
    tag = "histories",
    responses(
        (status = 200, description = "All histories deleted", body = DeleteAllResponse)
    )
)]
pub async fn delete_all_histories(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DeleteAllResponse>> {
    let count = state.services.history.delete_all().await?;
    Ok(Json(DeleteAllResponse {
        success: true,
        count,
    }))
}
