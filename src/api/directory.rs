//! User management and reference list endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{ChangePassword, NewReference, NewUser, ReferenceEntry, ReferenceKind, UpdateUser, User},
    AppState,
};

use super::Caller;

#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub total: usize,
}

fn reference_kind(raw: &str) -> AppResult<ReferenceKind> {
    raw.parse()
        .map_err(|e: String| AppError::BadRequest(e))
}

/// Profile of the authenticated user
#[utoipa::path(
    get,
    path = "/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn me(State(state): State<AppState>, Caller(credentials): Caller) -> AppResult<Json<User>> {
    let user = state.services.directory.current_user(&credentials).await?;
    Ok(Json(user))
}

/// List users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users", body = UserListResponse)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Caller(credentials): Caller,
) -> AppResult<Json<UserListResponse>> {
    let users = state.services.directory.users(&credentials).await?;
    Ok(Json(UserListResponse {
        total: users.len(),
        users: users.as_ref().clone(),
    }))
}

/// Add a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = NewUser,
    responses(
        (status = 201, description = "User added", body = User),
        (status = 400, description = "Invalid user", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_user(
    State(state): State<AppState>,
    Caller(credentials): Caller,
    Json(user): Json<NewUser>,
) -> AppResult<(StatusCode, Json<Option<User>>)> {
    let created = state.services.directory.add_user(&credentials, &user).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Caller(credentials): Caller,
    Path(id): Path<String>,
    Json(mut user): Json<UpdateUser>,
) -> AppResult<Json<Option<User>>> {
    user.id = id;
    let updated = state.services.directory.update_user(&credentials, &user).await?;
    Ok(Json(updated))
}

/// Change the caller's password
#[utoipa::path(
    post,
    path = "/users/me/password",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = ChangePassword,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Invalid password", body = crate::error::ErrorResponse)
    )
)]
pub async fn change_password(
    State(state): State<AppState>,
    Caller(credentials): Caller,
    Json(change): Json<ChangePassword>,
) -> AppResult<StatusCode> {
    state.services.directory.change_password(&credentials, &change).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List categories, departments or locations
#[utoipa::path(
    get,
    path = "/references/{kind}",
    tag = "references",
    security(("bearer_auth" = [])),
    params(("kind" = String, Path, description = "categories, departments or locations")),
    responses(
        (status = 200, description = "Reference entries", body = Vec<ReferenceEntry>),
        (status = 400, description = "Unknown list", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_references(
    State(state): State<AppState>,
    Caller(credentials): Caller,
    Path(kind): Path<String>,
) -> AppResult<Json<Vec<ReferenceEntry>>> {
    let kind = reference_kind(&kind)?;
    let entries = state.services.directory.references(&credentials, kind).await?;
    Ok(Json(entries.as_ref().clone()))
}

/// Add a category, department or location
#[utoipa::path(
    post,
    path = "/references/{kind}",
    tag = "references",
    security(("bearer_auth" = [])),
    params(("kind" = String, Path, description = "categories, departments or locations")),
    request_body = NewReference,
    responses(
        (status = 201, description = "Entry added", body = ReferenceEntry),
        (status = 400, description = "Invalid entry", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_reference(
    State(state): State<AppState>,
    Caller(credentials): Caller,
    Path(kind): Path<String>,
    Json(entry): Json<NewReference>,
) -> AppResult<(StatusCode, Json<Option<ReferenceEntry>>)> {
    let kind = reference_kind(&kind)?;
    let created = state
        .services
        .directory
        .create_reference(&credentials, kind, &entry)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Asset categories with their asset counts
#[utoipa::path(
    get,
    path = "/dashboard/categories",
    tag = "references",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Categories with counts", body = Vec<ReferenceEntry>)
    )
)]
pub async fn asset_categories(
    State(state): State<AppState>,
    Caller(credentials): Caller,
) -> AppResult<Json<Vec<ReferenceEntry>>> {
    let categories = state.services.directory.asset_categories(&credentials).await?;
    Ok(Json(categories))
}
