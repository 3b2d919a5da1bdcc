//! User handlers.

use axum::{
    extract::State,
    routing::get,
    Router,
};

use super::non_empty;
use crate::api::extractors::{EntityId, ValidatedJson};
use crate::api::AppState;
use crate::config::RESOURCE_USER;
use crate::domain::{CreateUser, UpdateUser, UserResponse};
use crate::errors::AppResult;
use crate::types::Envelope;

/// User management routes, mounted under `/users`
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List active users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active users", body = Vec<UserResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No users")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Envelope<Vec<UserResponse>>> {
    let users = non_empty(state.user_service.list_users().await?, RESOURCE_USER)?;
    Ok(Envelope::ok(
        "success to get users",
        users.into_iter().map(UserResponse::from).collect(),
    ))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 400, description = "Invalid id"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Envelope<UserResponse>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Envelope::ok("success to get user", UserResponse::from(user)))
}

/// Create a user with a full profile
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Unparsable body or missing field"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Email already in use"),
        (status = 422, description = "Invalid email or password too short")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<Envelope<UserResponse>> {
    let user = state.user_service.create_user(payload).await?;
    Ok(Envelope::created("user created successfully", UserResponse::from(user)))
}

/// Update a user; email and password are always required
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid id or body"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already in use"),
        (status = 422, description = "Invalid email or password too short")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(payload): ValidatedJson<UpdateUser>,
) -> AppResult<Envelope<UserResponse>> {
    let user = state.user_service.update_user(id, payload).await?;
    Ok(Envelope::ok("user updated successfully", UserResponse::from(user)))
}

/// Soft delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = UserResponse),
        (status = 400, description = "Invalid id"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Envelope<UserResponse>> {
    let user = state.user_service.delete_user(id).await?;
    Ok(Envelope::ok("user deleted successfully", UserResponse::from(user)))
}
