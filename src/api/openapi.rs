//! OpenAPI documentation configuration.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, company_handler, position_handler, user_handler};
use crate::domain::{
    Company, CompanyInput, CreatePosition, CreateUser, Login, Position, SignUp, UpdatePosition,
    UpdateUser, UserResponse,
};
use crate::services::TokenResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ERP API",
        version = "0.1.0",
        description = "Users, companies and positions with soft delete and bearer-token auth"
    ),
    paths(
        auth_handler::register,
        auth_handler::login,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        company_handler::list_companies,
        company_handler::get_company,
        company_handler::create_company,
        company_handler::update_company,
        company_handler::delete_company,
        company_handler::restore_company,
        company_handler::list_deleted_companies,
        position_handler::list_positions,
        position_handler::get_position,
        position_handler::create_position,
        position_handler::update_position,
        position_handler::delete_position,
        position_handler::restore_position,
        position_handler::list_deleted_positions,
    ),
    components(schemas(
        SignUp,
        Login,
        TokenResponse,
        CreateUser,
        UpdateUser,
        UserResponse,
        Company,
        CompanyInput,
        Position,
        CreatePosition,
        UpdatePosition,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Signup and login"),
        (name = "Users", description = "User management"),
        (name = "Companies", description = "Company management"),
        (name = "Positions", description = "Position management")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by the user routes
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /users/login"))
                        .build(),
                ),
            );
        }
    }
}
