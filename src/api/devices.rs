//! Device API endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::device::{CreateDevice, DeviceResponse, DevicesResponse, UpdateDevice},
};

use super::{lookup_status, IdQuery};

/// List all devices
#[utoipa::path(
    get,
    path = "/devices",
    tag = "devices",
    responses(
        (status = 200, description = "Device list", body = DevicesResponse)
    )
)]
pub async fn list_devices(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DevicesResponse>> {
    let devices = state.services.devices.list().await?;
    Ok(Json(DevicesResponse {
        success: true,
        count: devices.len(),
        devices,
    }))
}

/// Get a device by ID
#[utoipa::path(
    get,
    path = "/device",
    tag = "devices",
    params(IdQuery),
    responses(
        (status = 200, description = "Device details", body = DeviceResponse),
        (status = 404, description = "Unknown device (soft 404)", body = DeviceResponse)
    )
)]
pub async fn get_device(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<(StatusCode, Json<DeviceResponse>)> {
    let device = state.services.devices.get_by_id(query.id).await?;
    Ok((
        lookup_status(&device),
        Json(DeviceResponse {
            success: true,
            device,
        }),
    ))
}

/// Create a device
#[utoipa::path(
    post,
    path = "/device",
    tag = "devices",
    request_body = CreateDevice,
    responses(
        (status = 201, description = "Device created", body = DeviceResponse)
    )
)]
pub async fn create_device(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateDevice>,
) -> AppResult<(StatusCode, Json<DeviceResponse>)> {
    data.validate()?;
    let device = state.services.devices.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(DeviceResponse {
            success: true,
            device: Some(device),
        }),
    ))
}

/// Partially update a device
#[utoipa::path(
    put,
    path = "/device",
    tag = "devices",
    params(IdQuery),
    request_body = UpdateDevice,
    responses(
        (status = 200, description = "Device updated", body = DeviceResponse),
        (status = 404, description = "Unknown device (soft 404)", body = DeviceResponse)
    )
)]
pub async fn update_device(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
    Json(data): Json<UpdateDevice>,
) -> AppResult<(StatusCode, Json<DeviceResponse>)> {
    data.validate()?;
    let device = state.services.devices.update(query.id, &data).await?;
    Ok((
        lookup_status(&device),
        Json(DeviceResponse {
            success: true,
            device,
        }),
    ))
}

/// Delete a device
#[utoipa::path(
    delete,
    path = "/device",
    tag = "devices",
    params(IdQuery),
    responses(
        (status = 200, description = "Device deleted", body = DeviceResponse),
        (status = 404, description = "Unknown device (soft 404)", body = DeviceResponse)
    )
)]
pub async fn delete_device(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<(StatusCode, Json<DeviceResponse>)> {
    let device = state.services.devices.delete(query.id).await?;
    Ok((
        lookup_status(&device),
        Json(DeviceResponse {
            success: true,
            device,
        }),
    ))
}
