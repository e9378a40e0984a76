//! Root greeting endpoint.

use axum::Json;
use serde::Serialize;

/// Greeting returned from `GET /`.
pub const GREETING: &str = "FastAPI scalable app running";

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET / — returns the service greeting.
pub async fn greet() -> Json<RootResponse> {
    Json(RootResponse { message: GREETING })
}
