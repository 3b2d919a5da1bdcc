//! Position handlers.

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Router,
};

use super::non_empty;
use crate::api::extractors::{EntityId, ValidatedJson};
use crate::api::AppState;
use crate::config::RESOURCE_POSITION;
use crate::domain::{CreatePosition, Position, UpdatePosition};
use crate::errors::AppResult;
use crate::types::Envelope;

/// Position routes, mounted under `/positions`
pub fn position_routes(allow_restore: bool) -> Router<AppState> {
    let router = Router::new()
        .route("/", get(list_positions))
        .route("/deleted", get(list_deleted_positions))
        .route("/create", post(create_position))
        .route("/update/:id", put(update_position))
        .route("/delete/:id", delete(delete_position))
        .route("/:id", get(get_position));

    if allow_restore {
        router.route("/restore/:id", put(restore_position))
    } else {
        router
    }
}

#[utoipa::path(
    get,
    path = "/positions",
    tag = "Positions",
    responses(
        (status = 200, description = "Active positions", body = Vec<Position>),
        (status = 404, description = "No positions")
    )
)]
pub async fn list_positions(State(state): State<AppState>) -> AppResult<Envelope<Vec<Position>>> {
    let positions = non_empty(state.position_service.list_positions().await?, RESOURCE_POSITION)?;
    Ok(Envelope::ok("success to get position", positions))
}

#[utoipa::path(
    get,
    path = "/positions/{id}",
    tag = "Positions",
    params(("id" = i32, Path, description = "Position ID")),
    responses(
        (status = 200, description = "Position", body = Position),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Position not found")
    )
)]
pub async fn get_position(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Envelope<Position>> {
    let position = state.position_service.get_position(id).await?;
    Ok(Envelope::ok("success to get position", position))
}

#[utoipa::path(
    post,
    path = "/positions/create",
    tag = "Positions",
    request_body = CreatePosition,
    responses(
        (status = 201, description = "Position created", body = Position),
        (status = 400, description = "Unparsable body or missing name or code"),
        (status = 409, description = "Name or code held by an active or soft-deleted position")
    )
)]
pub async fn create_position(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePosition>,
) -> AppResult<Envelope<Position>> {
    let position = state.position_service.create_position(payload).await?;
    Ok(Envelope::created("position created successfully", position))
}

#[utoipa::path(
    put,
    path = "/positions/update/{id}",
    tag = "Positions",
    params(("id" = i32, Path, description = "Position ID")),
    request_body = UpdatePosition,
    responses(
        (status = 200, description = "Position updated", body = Position),
        (status = 400, description = "Invalid id or body"),
        (status = 404, description = "Position not found"),
        (status = 409, description = "Name or code held by an active or soft-deleted position")
    )
)]
pub async fn update_position(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(payload): ValidatedJson<UpdatePosition>,
) -> AppResult<Envelope<Position>> {
    let position = state.position_service.update_position(id, payload).await?;
    Ok(Envelope::ok("position updated successfully", position))
}

#[utoipa::path(
    delete,
    path = "/positions/delete/{id}",
    tag = "Positions",
    params(("id" = i32, Path, description = "Position ID")),
    responses(
        (status = 200, description = "Position soft-deleted", body = Position),
        (status = 400, description = "Invalid id or position still in use"),
        (status = 404, description = "Position not found")
    )
)]
pub async fn delete_position(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Envelope<Position>> {
    let position = state.position_service.delete_position(id).await?;
    Ok(Envelope::ok("position deleted successfully", position))
}

#[utoipa::path(
    put,
    path = "/positions/restore/{id}",
    tag = "Positions",
    params(("id" = i32, Path, description = "Position ID")),
    responses(
        (status = 200, description = "Position restored (or nothing to restore)"),
        (status = 400, description = "Invalid id"),
        (status = 409, description = "Name or code now held by an active position")
    )
)]
pub async fn restore_position(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Envelope<()>> {
    state.position_service.restore_position(id).await?;
    Ok(Envelope::message("position restored successfully"))
}

#[utoipa::path(
    get,
    path = "/positions/deleted",
    tag = "Positions",
    responses(
        (status = 200, description = "Soft-deleted positions", body = Vec<Position>),
        (status = 404, description = "No soft-deleted positions")
    )
)]
pub async fn list_deleted_positions(
    State(state): State<AppState>,
) -> AppResult<Envelope<Vec<Position>>> {
    let positions = non_empty(
        state.position_service.list_deleted_positions().await?,
        RESOURCE_POSITION,
    )?;
    Ok(Envelope::ok("success to get deleted position", positions))
}
