//! Company handlers.

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Router,
};

use super::non_empty;
use crate::api::extractors::{EntityId, ValidatedJson};
use crate::api::AppState;
use crate::config::RESOURCE_COMPANY;
use crate::domain::{Company, CompanyInput};
use crate::errors::AppResult;
use crate::types::Envelope;

/// Company routes, mounted under `/company`
pub fn company_routes(allow_restore: bool) -> Router<AppState> {
    let router = Router::new()
        .route("/", get(list_companies))
        .route("/deleted", get(list_deleted_companies))
        .route("/create", post(create_company))
        .route("/update/:id", put(update_company))
        .route("/delete/:id", delete(delete_company))
        .route("/:id", get(get_company));

    if allow_restore {
        router.route("/restore/:id", put(restore_company))
    } else {
        router
    }
}

#[utoipa::path(
    get,
    path = "/company",
    tag = "Companies",
    responses(
        (status = 200, description = "Active companies", body = Vec<Company>),
        (status = 404, description = "No companies")
    )
)]
pub async fn list_companies(State(state): State<AppState>) -> AppResult<Envelope<Vec<Company>>> {
    let companies = non_empty(state.company_service.list_companies().await?, RESOURCE_COMPANY)?;
    Ok(Envelope::ok("success to get company", companies))
}

#[utoipa::path(
    get,
    path = "/company/{id}",
    tag = "Companies",
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company", body = Company),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Company not found")
    )
)]
pub async fn get_company(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Envelope<Company>> {
    let company = state.company_service.get_company(id).await?;
    Ok(Envelope::ok("success to get company", company))
}

#[utoipa::path(
    post,
    path = "/company/create",
    tag = "Companies",
    request_body = CompanyInput,
    responses(
        (status = 201, description = "Company created", body = Company),
        (status = 400, description = "Unparsable body or missing name"),
        (status = 409, description = "Name held by an active or soft-deleted company")
    )
)]
pub async fn create_company(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CompanyInput>,
) -> AppResult<Envelope<Company>> {
    let company = state.company_service.create_company(payload).await?;
    Ok(Envelope::created("company created successfully", company))
}

#[utoipa::path(
    put,
    path = "/company/update/{id}",
    tag = "Companies",
    params(("id" = i32, Path, description = "Company ID")),
    request_body = CompanyInput,
    responses(
        (status = 200, description = "Company updated", body = Company),
        (status = 400, description = "Invalid id or body"),
        (status = 404, description = "Company not found"),
        (status = 409, description = "Name held by an active or soft-deleted company")
    )
)]
pub async fn update_company(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(payload): ValidatedJson<CompanyInput>,
) -> AppResult<Envelope<Company>> {
    let company = state.company_service.update_company(id, payload).await?;
    Ok(Envelope::ok("company updated successfully", company))
}

#[utoipa::path(
    delete,
    path = "/company/delete/{id}",
    tag = "Companies",
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company soft-deleted", body = Company),
        (status = 400, description = "Invalid id or company still in use"),
        (status = 404, description = "Company not found")
    )
)]
pub async fn delete_company(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Envelope<Company>> {
    let company = state.company_service.delete_company(id).await?;
    Ok(Envelope::ok("company deleted successfully", company))
}

#[utoipa::path(
    put,
    path = "/company/restore/{id}",
    tag = "Companies",
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company restored (or nothing to restore)"),
        (status = 400, description = "Invalid id"),
        (status = 409, description = "Name now held by an active company")
    )
)]
pub async fn restore_company(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Envelope<()>> {
    state.company_service.restore_company(id).await?;
    Ok(Envelope::message("company restored successfully"))
}

#[utoipa::path(
    get,
    path = "/company/deleted",
    tag = "Companies",
    responses(
        (status = 200, description = "Soft-deleted companies", body = Vec<Company>),
        (status = 404, description = "No soft-deleted companies")
    )
)]
pub async fn list_deleted_companies(
    State(state): State<AppState>,
) -> AppResult<Envelope<Vec<Company>>> {
    let companies = non_empty(
        state.company_service.list_deleted_companies().await?,
        RESOURCE_COMPANY,
    )?;
    Ok(Envelope::ok("success to get deleted company", companies))
}
