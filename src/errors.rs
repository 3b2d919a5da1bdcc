//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic conversion into the response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::types::Envelope;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token")]
    TokenMalformed,

    // Resource lifecycle
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    DuplicateActive(String),

    #[error("{0} already exists in soft deleted")]
    DuplicateSoftDeleted(String),

    #[error("{0} is still in use by user")]
    InUse(String),

    // Input
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    // Credential codec / token signing
    #[error("Credential encoding failed: {0}")]
    Encoding(String),

    #[error("Token signing failed: {0}")]
    Signing(String),

    // Persistence boundary
    #[error("Database error")]
    Database(#[from] DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized
            | AppError::InvalidCredentials
            | AppError::TokenExpired
            | AppError::TokenNotYetValid
            | AppError::TokenMalformed => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateActive(_) | AppError::DuplicateSoftDeleted(_) => {
                StatusCode::CONFLICT
            }
            AppError::InUse(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Encoding(_)
            | AppError::Signing(_)
            | AppError::Database(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Encoding(msg) | AppError::Signing(msg) | AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// True when the store rejected a write on a unique index.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            AppError::Database(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
        )
    }

    /// Re-label a unique-index rejection as an active duplicate of `resource`.
    /// Any other error passes through untouched.
    pub fn into_conflict(self, resource: &str) -> Self {
        if self.is_unique_violation() {
            AppError::DuplicateActive(resource.to_string())
        } else {
            self
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        Envelope::failure(self.status(), self.user_message()).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, resource: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, resource: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(resource.to_string()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
