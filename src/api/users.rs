//! User API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::enums::UserRole,
    models::user::{
        CheckPassword, CheckPasswordResponse, CreateUser, FilteredUsersResponse, UpdateUser,
        UserResponse, UsersResponse,
    },
};

use super::{lookup_status, DeleteAllResponse, IdQuery};

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "User list", body = UsersResponse)
    )
)]
pub async fn list_users(State(state): State<crate::AppState>) -> AppResult<Json<UsersResponse>> {
    let users = state.services.users.list().await?;
    Ok(Json(UsersResponse {
        success: true,
        count: users.len(),
        users,
    }))
}

/// List users with credential material stripped
#[utoipa::path(
    get,
    path = "/filtered-users",
    tag = "users",
    responses(
        (status = 200, description = "Filtered user list", body = FilteredUsersResponse)
    )
)]
pub async fn list_filtered_users(
    State(state): State<crate::AppState>,
) -> AppResult<Json<FilteredUsersResponse>> {
    let users = state.services.users.list_filtered().await?;
    Ok(Json(FilteredUsersResponse {
        success: true,
        count: users.len(),
        users,
    }))
}

/// List users holding a role
#[utoipa::path(
    get,
    path = "/users/role/{role}",
    tag = "users",
    params(("role" = String, Path, description = "User role (admin or superAdmin)")),
    responses(
        (status = 200, description = "Users with the role", body = UsersResponse),
        (status = 400, description = "Unknown role", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_users_by_role(
    State(state): State<crate::AppState>,
    Path(role): Path<String>,
) -> AppResult<Json<UsersResponse>> {
    let role: UserRole = role
        .parse()
        .map_err(|e: String| AppError::Validation(e))?;
    let users = state.services.users.list_by_role(role).await?;
    Ok(Json(UsersResponse {
        success: true,
        count: users.len(),
        users,
    }))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/user",
    tag = "users",
    params(IdQuery),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 404, description = "Unknown user (soft 404)", body = UserResponse)
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.services.users.get_by_id(query.id).await?;
    Ok((
        lookup_status(&user),
        Json(UserResponse {
            success: true,
            user,
        }),
    ))
}

/// Create a user; the email is an enforced unique field
#[utoipa::path(
    post,
    path = "/user",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Email already in use", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    data.validate()?;
    let user = state.services.users.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            success: true,
            user: Some(user),
        }),
    ))
}

/// Partially update a user
#[utoipa::path(
    put,
    path = "/user",
    tag = "users",
    params(IdQuery),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "Unknown user (soft 404)", body = UserResponse)
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
    Json(data): Json<UpdateUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    data.validate()?;
    let user = state.services.users.update(query.id, &data).await?;
    Ok((
        lookup_status(&user),
        Json(UserResponse {
            success: true,
            user,
        }),
    ))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/user",
    tag = "users",
    params(IdQuery),
    responses(
        (status = 200, description = "User deleted", body = UserResponse),
        (status = 404, description = "Unknown user (soft 404)", body = UserResponse)
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.services.users.delete(query.id).await?;
    Ok((
        lookup_status(&user),
        Json(UserResponse {
            success: true,
            user,
        }),
    ))
}

/// Delete every user
#[utoipa::path(
    delete,
    path = "/all-users",
    tag = "users",
    responses(
        (status = 200, description = "All users deleted", body = DeleteAllResponse)
    )
)]
pub async fn delete_all_users(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DeleteAllResponse>> {
    let count = state.services.users.delete_all().await?;
    Ok(Json(DeleteAllResponse {
        success: true,
        count,
    }))
}

/// Check a user's password
#[utoipa::path(
    get,
    path = "/check-password",
    tag = "users",
    params(CheckPassword),
    responses(
        (status = 200, description = "Password check result", body = CheckPasswordResponse)
    )
)]
pub async fn check_password(
    State(state): State<crate::AppState>,
    Query(query): Query<CheckPassword>,
) -> AppResult<Json<CheckPasswordResponse>> {
    let user = state
        .services
        .users
        .check_password(&query.email, &query.password)
        .await?;
    Ok(Json(CheckPasswordResponse {
        success: true,
        valid: user.is_some(),
        user: user.map(Into::into),
    }))
}
