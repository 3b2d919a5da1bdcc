//! Numeric path id extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::AppError;

pub const INVALID_ID_MESSAGE: &str = "invalid or missing ID parameter";

/// A positive integer taken from the `:id` path segment.
///
/// Anything else (missing, non-numeric, zero, negative) is rejected with
/// 400 before the handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request(INVALID_ID_MESSAGE))?;

        parse_id(&raw)
            .map(EntityId)
            .ok_or_else(|| AppError::bad_request(INVALID_ID_MESSAGE))
    }
}

fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|id| *id > 0)
}
