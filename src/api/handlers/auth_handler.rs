//! Signup and login handlers.

use axum::{extract::State, routing::post, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Login, SignUp, UserResponse};
use crate::errors::AppResult;
use crate::services::TokenResponse;
use crate::types::Envelope;

/// Public routes, mounted under `/users`
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register with email and password
#[utoipa::path(
    post,
    path = "/users/register",
    tag = "Authentication",
    request_body = SignUp,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Unparsable body"),
        (status = 409, description = "Email already in use"),
        (status = 422, description = "Invalid email or password too short")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignUp>,
) -> AppResult<Envelope<UserResponse>> {
    let user = state.auth_service.signup(payload).await?;
    Ok(Envelope::created(
        "user registered successfully",
        UserResponse::from(user),
    ))
}

/// Exchange credentials for an access token
#[utoipa::path(
    post,
    path = "/users/login",
    tag = "Authentication",
    request_body = Login,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Missing email or password"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<Login>,
) -> AppResult<Envelope<TokenResponse>> {
    let token = state.auth_service.login(payload).await?;
    Ok(Envelope::ok("success authorization", token))
}
