use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Uniform response body returned by every endpoint, success or failure.
///
/// ```json
/// { "status": 201, "message": "company created successfully", "data": { ... }, "error": false }
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: u16,
    pub message: String,
    pub data: Option<T>,
    pub error: bool,
}

impl<T: Serialize> Envelope<T> {
    /// 200 with data
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::OK, message, Some(data))
    }

    /// 201 with data
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::CREATED, message, Some(data))
    }

    fn with_status(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data,
            error: status.is_client_error() || status.is_server_error(),
        }
    }
}

impl Envelope<()> {
    /// Success without a payload (`data: null`)
    pub fn message(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::OK, message, None)
    }

    /// Failure body; `error` is set from the status class.
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self::with_status(status, message, None)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
