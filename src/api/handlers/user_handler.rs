//! User collection handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::ValidatedJson;
use crate::api::state::AppState;
use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::AppResult;
use crate::services::UserService;

/// Query parameters for listing users
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListUsersQuery {
    /// Exact role to filter by (case-sensitive)
    pub role: Option<String>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/:user_id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/user/{user_id}",
    tag = "Users",
    params(
        ("user_id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<u32>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(user_id).await?;
    Ok(Json(user))
}

/// List all users, optionally filtered by role
#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "List of users", body = Vec<User>)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users(query.role).await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 200, description = "Created user with assigned id", body = User),
        (status = 422, description = "Payload fails field constraints")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<Json<User>> {
    let user = state.user_service.create_user(payload).await?;
    Ok(Json(user))
}

/// Partially update a user
#[utoipa::path(
    put,
    path = "/user/{user_id}",
    tag = "Users",
    params(
        ("user_id" = u32, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 404, description = "User not found"),
        (status = 422, description = "Payload fails field constraints")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<u32>,
    ValidatedJson(payload): ValidatedJson<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = state.user_service.update_user(user_id, payload).await?;
    Ok(Json(user))
}

/// Delete a user, returning the removed record
#[utoipa::path(
    delete,
    path = "/user/{user_id}",
    tag = "Users",
    params(
        ("user_id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Deleted user", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<u32>,
) -> AppResult<Json<User>> {
    let user = state.user_service.delete_user(user_id).await?;
    Ok(Json(user))
}
