//! Tag API endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::tag::{BulkTagUpdate, CreateTag, TagResponse, TagsResponse, UpdateTag},
};

use super::{lookup_status, DeleteAllResponse, IdQuery};

/// List all tags
#[utoipa::path(
    get,
    path = "/tags",
    tag = "tags",
    responses(
        (status = 200, description = "Tag list", body = TagsResponse)
    )
)]
pub async fn list_tags(State(state): State<crate::AppState>) -> AppResult<Json<TagsResponse>> {
    let tags = state.services.tags.list().await?;
    Ok(Json(TagsResponse {
        success: true,
        count: tags.len(),
        tags,
    }))
}

/// Get a tag by ID
#[utoipa::path(
    get,
    path = "/tag",
    tag = "tags",
    params(IdQuery),
    responses(
        (status = 200, description = "Tag details", body = TagResponse),
        (status = 404, description = "Unknown tag (soft 404)", body = TagResponse)
    )
)]
pub async fn get_tag(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<(StatusCode, Json<TagResponse>)> {
    let tag = state.services.tags.get_by_id(query.id).await?;
    Ok((
        lookup_status(&tag),
        Json(TagResponse { success: true, tag }),
    ))
}

/// Create a tag; the name is an enforced unique field
#[utoipa::path(
    post,
    path = "/tag",
    tag = "tags",
    request_body = CreateTag,
    responses(
        (status = 201, description = "Tag created", body = TagResponse),
        (status = 400, description = "Name already in use", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_tag(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateTag>,
) -> AppResult<(StatusCode, Json<TagResponse>)> {
    data.validate()?;
    let tag = state.services.tags.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(TagResponse {
            success: true,
            tag: Some(tag),
        }),
    ))
}

/// Update a tag
#[utoipa::path(
    put,
    path = "/tag",
    tag = "tags",
    params(IdQuery),
    request_body = UpdateTag,
    responses(
        (status = 200, description = "Tag updated", body = TagResponse),
        (status = 404, description = "Unknown tag (soft 404)", body = TagResponse)
    )
)]
pub async fn update_tag(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
    Json(data): Json<UpdateTag>,
) -> AppResult<(StatusCode, Json<TagResponse>)> {
    data.validate()?;
    let tag = state.services.tags.update(query.id, &data).await?;
    Ok((
        lookup_status(&tag),
        Json(TagResponse { success: true, tag }),
    ))
}

/// Bulk-update tags; names must be unique within the batch
#[utoipa::path(
    put,
    path = "/tags",
    tag = "tags",
    request_body = Vec<BulkTagUpdate>,
    responses(
        (status = 200, description = "Batch applied", body = TagsResponse),
        (status = 400, description = "Duplicate name in batch", body = crate::error::ErrorResponse)
    )
)]
pub async fn bulk_update_tags(
    State(state): State<crate::AppState>,
    Json(items): Json<Vec<BulkTagUpdate>>,
) -> AppResult<Json<TagsResponse>> {
    let tags = state.services.tags.update_bulk(&items).await?;
    Ok(Json(TagsResponse {
        success: true,
        count: tags.len(),
        tags,
    }))
}

/// Delete a tag
#[utoipa::path(
    delete,
    path = "/tag",
    tag = "tags",
    params(IdQuery),
    responses(
        (status = 200, description = "Tag deleted", body = TagResponse),
        (status = 404, description = "Unknown tag (soft 404)", body = TagResponse)
    )
)]
pub async fn delete_tag(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<(StatusCode, Json<TagResponse>)> {
    let tag = state.services.tags.delete(query.id).await?;
    Ok((
        lookup_status(&tag),
        Json(TagResponse { success: true, tag }),
    ))
}

/// Delete every tag
#[utoipa::path(
    delete,
    path = "/all-tags",
    tag = "tags",
    responses(
        (status = 200, description = "All tags deleted", body = DeleteAllResponse)
    )
)]
pub async fn delete_all_tags(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DeleteAllResponse>> {
    let count = state.services.tags.delete_all().await?;
    Ok(Json(DeleteAllResponse {
        success: true,
        count,
    }))
}
