//! Project API endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::project::{CreateProject, ProjectResponse, ProjectsResponse, UpdateProject},
};

use super::{lookup_status, DeleteAllResponse, IdQuery};

/// List all projects
#[utoipa::path(
    get,
    path = "/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Project list", body = ProjectsResponse)
    )
)]
pub async fn list_projects(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ProjectsResponse>> {
    let projects = state.services.projects.list().await?;
    Ok(Json(ProjectsResponse {
        success: true,
        count: projects.len(),
        projects,
    }))
}

/// Get a project by ID
#[utoipa::path(
    get,
    path = "/project",
    tag = "projects",
    params(IdQuery),
    responses(
        (status = 200, description = "Project details", body = ProjectResponse),
        (status = 404, description = "Unknown project (soft 404)", body = ProjectResponse)
    )
)]
pub async fn get_project(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    let project = state.services.projects.get_by_id(query.id).await?;
    Ok((
        lookup_status(&project),
        Json(ProjectResponse {
            success: true,
            project,
        }),
    ))
}

/// Create a project; a unique slug is generated from the name
#[utoipa::path(
    post,
    path = "/project",
    tag = "projects",
    request_body = CreateProject,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse)
    )
)]
pub async fn create_project(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    data.validate()?;
    let project = state.services.projects.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse {
            success: true,
            project: Some(project),
        }),
    ))
}

/// Partially update a project; the slug is immutable
#[utoipa::path(
    put,
    path = "/project",
    tag = "projects",
    params(IdQuery),
    request_body = UpdateProject,
    responses(
        (status = 200, description = "Project updated", body = ProjectResponse),
        (status = 404, description = "Unknown project (soft 404)", body = ProjectResponse)
    )
)]
pub async fn update_project(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
    Json(data): Json<UpdateProject>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    data.validate()?;
    let project = state.services.projects.update(query.id, &data).await?;
    Ok((
        lookup_status(&project),
        Json(ProjectResponse {
            success: true,
            project,
        }),
    ))
}

/// Delete a project
#[utoipa::path(
    delete,
    path = "/project",
    tag = "projects",
    params(IdQuery),
    responses(
        (status = 200, description = "Project deleted", body = ProjectResponse),
        (status = 404, description = "Unknown project (soft 404)", body = ProjectResponse)
    )
)]
pub async fn delete_project(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    let project = state.services.projects.delete(query.id).await?;
    Ok((
        lookup_status(&project),
        Json(ProjectResponse {
            success: true,
            project,
        }),
    ))
}

/// Delete every project
#[utoipa::path(
    delete,
    path = "/all-projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects deleted", body = DeleteAllResponse)
    )
)]
pub async fn delete_all_projects(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DeleteAllResponse>> {
    let count = state.services.projects.delete_all().await?;
    Ok(Json(DeleteAllResponse {
        success: true,
        count,
    }))
}
