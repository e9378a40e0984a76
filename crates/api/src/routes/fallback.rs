//! Handlers for requests no route accepts.

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Any path without a registered route.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    tracing::debug!(%method, %uri, "no route matched");
    ApiError::NotFound
}

/// A known path requested with a method it does not serve.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    tracing::debug!(%method, %uri, "method not allowed");
    ApiError::MethodNotAllowed
}
