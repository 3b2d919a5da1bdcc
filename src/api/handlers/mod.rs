//! HTTP request handlers.

pub mod auth_handler;
pub mod company_handler;
pub mod position_handler;
pub mod user_handler;

pub use auth_handler::auth_routes;
pub use company_handler::company_routes;
pub use position_handler::position_routes;
pub use user_handler::user_routes;

use crate::errors::{AppError, AppResult};

/// List endpoints answer 404 rather than an empty array.
pub(crate) fn non_empty<T>(items: Vec<T>, resource: &str) -> AppResult<Vec<T>> {
    if items.is_empty() {
        Err(AppError::NotFound(resource.to_string()))
    } else {
        Ok(items)
    }
}
