//! Image upload endpoint
//!
//! Files land under the uploads root, partitioned by
//! `devices/<manufacturer>/<device>/` or `projects/<project>/`. Serving the
//! stored files is handled by the static route nested at `/images`.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    services::images::{ImageKind, MAX_UPLOAD_FILES},
};

/// Query parameters of the upload endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct UploadQuery {
    /// Target partition: `device` or `project`
    pub img_type: String,
    /// Manufacturer folder (device uploads)
    pub manufacturer: Option<String>,
    /// Device folder (device uploads)
    pub device: Option<String>,
    /// Project folder (project uploads)
    pub project: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    pub count: usize,
    /// Stored paths relative to the uploads root
    pub files: Vec<String>,
}

/// Upload up to 25 image files
#[utoipa::path(
    post,
    path = "/images/upload",
    tag = "images",
    params(UploadQuery),
    responses(
        (status = 200, description = "Files stored", body = UploadResponse),
        (status = 400, description = "Bad upload request", body = crate::error::ErrorResponse)
    )
)]
pub async fn upload_images(
    State(state): State<crate::AppState>,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let kind: ImageKind = query
        .img_type
        .parse()
        .map_err(|e: String| AppError::Validation(e))?;

    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {}", e)))?
    {
        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            // Non-file form fields are ignored
            continue;
        };
        if files.len() >= MAX_UPLOAD_FILES {
            return Err(AppError::Validation(format!(
                "At most {} files per upload",
                MAX_UPLOAD_FILES
            )));
        }
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {}", e)))?;

        let stored = match kind {
            ImageKind::Device => {
                let manufacturer = query.manufacturer.as_deref().ok_or_else(|| {
                    AppError::Validation("Device uploads require a manufacturer".to_string())
                })?;
                let device = query.device.as_deref().ok_or_else(|| {
                    AppError::Validation("Device uploads require a device".to_string())
                })?;
                state
                    .services
                    .images
                    .store_device_image(manufacturer, device, &filename, &data)
                    .await?
            }
            ImageKind::Project => {
                let project = query.project.as_deref().ok_or_else(|| {
                    AppError::Validation("Project uploads require a project".to_string())
                })?;
                state
                    .services
                    .images
                    .store_project_image(project, &filename, &data)
                    .await?
            }
        };
        files.push(stored);
    }

    Ok(Json(UploadResponse {
        success: true,
        count: files.len(),
        files,
    }))
}
