//! Application route configuration.

use axum::{extract::State, middleware, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{auth_routes, company_routes, position_routes, user_routes};
use super::middleware::auth_middleware;
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::ResourcePolicy;
use crate::errors::{AppError, AppResult};
use crate::types::Envelope;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Signup and login stay public whatever the user policy says
        .nest(
            "/users",
            auth_routes().merge(guarded(user_routes(), &state, config.users)),
        )
        .nest(
            "/company",
            guarded(
                company_routes(config.companies.allow_restore),
                &state,
                config.companies,
            ),
        )
        .nest(
            "/positions",
            guarded(
                position_routes(config.positions.allow_restore),
                &state,
                config.positions,
            ),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Put `router` behind the bearer middleware when the policy asks for it.
fn guarded(router: Router<AppState>, state: &AppState, policy: ResourcePolicy) -> Router<AppState> {
    if policy.require_auth {
        router.route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
    } else {
        router
    }
}

async fn root() -> Envelope<()> {
    Envelope::message("Welcome to the ERP API")
}

#[derive(Serialize)]
struct HealthStatus {
    database: &'static str,
}

/// Liveness plus a database round trip
async fn health(State(state): State<AppState>) -> AppResult<Envelope<HealthStatus>> {
    state.database.ping().await.map_err(|e| {
        tracing::error!("Health check failed: {}", e);
        AppError::Database(e)
    })?;

    Ok(Envelope::ok("healthy", HealthStatus { database: "up" }))
}
