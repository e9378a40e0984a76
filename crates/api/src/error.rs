//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
///
/// The response body is `{"detail": "<message>"}`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// No route matches the request path.
    #[error("Not Found")]
    NotFound,
    /// The path exists but not for the request method.
    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl ApiError {
    /// HTTP status code this error is answered with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "detail": self.to_string() });
        (self.status(), axum::Json(body)).into_response()
    }
}
