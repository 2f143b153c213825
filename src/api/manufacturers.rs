//! Manufacturer API endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::manufacturer::{
        BulkManufacturerUpdate, CreateManufacturer, ManufacturerResponse, ManufacturersResponse,
        UpdateManufacturer,
    },
};

use super::{lookup_status, DeleteAllResponse, IdQuery};

/// List all manufacturers
#[utoipa::path(
    get,
    path = "/manufacturers",
    tag = "manufacturers",
    responses(
        (status = 200, description = "Manufacturer list", body = ManufacturersResponse)
    )
)]
pub async fn list_manufacturers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ManufacturersResponse>> {
    let manufacturers = state.services.manufacturers.list().await?;
    Ok(Json(ManufacturersResponse {
        success: true,
        count: manufacturers.len(),
        manufacturers,
    }))
}

/// Get a manufacturer by ID
#[utoipa::path(
    get,
    path = "/manufacturer",
    tag = "manufacturers",
    params(IdQuery),
    responses(
        (status = 200, description = "Manufacturer details", body = ManufacturerResponse),
        (status = 404, description = "Unknown manufacturer (soft 404)", body = ManufacturerResponse)
    )
)]
pub async fn get_manufacturer(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<(StatusCode, Json<ManufacturerResponse>)> {
    let manufacturer = state.services.manufacturers.get_by_id(query.id).await?;
    Ok((
        lookup_status(&manufacturer),
        Json(ManufacturerResponse {
            success: true,
            manufacturer,
        }),
    ))
}

/// Create a manufacturer; a unique slug is generated from the name
#[utoipa::path(
    post,
    path = "/manufacturer",
    tag = "manufacturers",
    request_body = CreateManufacturer,
    responses(
        (status = 201, description = "Manufacturer created", body = ManufacturerResponse)
    )
)]
pub async fn create_manufacturer(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateManufacturer>,
) -> AppResult<(StatusCode, Json<ManufacturerResponse>)> {
    data.validate()?;
    let manufacturer = state.services.manufacturers.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(ManufacturerResponse {
            success: true,
            manufacturer: Some(manufacturer),
        }),
    ))
}

/// Partially update a manufacturer
#[utoipa::path(
    put,
    path = "/manufacturer",
    tag = "manufacturers",
    params(IdQuery),
    request_body = UpdateManufacturer,
    responses(
        (status = 200, description = "Manufacturer updated", body = ManufacturerResponse),
        (status = 404, description = "Unknown manufacturer (soft 404)", body = ManufacturerResponse)
    )
)]
pub async fn update_manufacturer(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
    Json(data): Json<UpdateManufacturer>,
) -> AppResult<(StatusCode, Json<ManufacturerResponse>)> {
    data.validate()?;
    let manufacturer = state
        .services
        .manufacturers
        .update(query.id, &data)
        .await?;
    Ok((
        lookup_status(&manufacturer),
        Json(ManufacturerResponse {
            success: true,
            manufacturer,
        }),
    ))
}

/// Bulk-update manufacturers; names must be unique within the batch
#[utoipa::path(
    put,
    path = "/manufacturers",
    tag = "manufacturers",
    request_body = Vec<BulkManufacturerUpdate>,
    responses(
        (status = 200, description = "Batch applied", body = ManufacturersResponse),
        (status = 400, description = "Duplicate name in batch", body = crate::error::ErrorResponse)
    )
)]
pub async fn bulk_update_manufacturers(
    State(state): State<crate::AppState>,
    Json(items): Json<Vec<BulkManufacturerUpdate>>,
) -> AppResult<Json<ManufacturersResponse>> {
    let manufacturers = state.services.manufacturers.update_bulk(&items).await?;
    Ok(Json(ManufacturersResponse {
        success: true,
        count: manufacturers.len(),
        manufacturers,
    }))
}

/// Delete a manufacturer
#[utoipa::path(
    delete,
    path = "/manufacturer",
    tag = "manufacturers",
    params(IdQuery),
    responses(
        (status = 200, description = "Manufacturer deleted", body = ManufacturerResponse),
        (status = 404, description = "Unknown manufacturer (soft 404)", body = ManufacturerResponse)
    )
)]
pub async fn delete_manufacturer(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<(StatusCode, Json<ManufacturerResponse>)> {
    let manufacturer = state.services.manufacturers.delete(query.id).await?;
    Ok((
        lookup_status(&manufacturer),
        Json(ManufacturerResponse {
            success: true,
            manufacturer,
        }),
    ))
}

/// Delete every manufacturer
#[utoipa::path(
    delete,
    path = "/all-manufacturers",
    tag = "manufacturers",
    responses(
        (status = 200, description = "All manufacturers deleted", body = DeleteAllResponse)
    )
)]
pub async fn delete_all_manufacturers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DeleteAllResponse>> {
    let count = state.services.manufacturers.delete_all().await?;
    Ok(Json(DeleteAllResponse {
        success: true,
        count,
    }))
}
