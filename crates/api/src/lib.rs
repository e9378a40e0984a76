//! Minimal HTTP service exposing a greeting and a health check.
//!
//! Every request passes through structured logging (tracing) and is counted
//! in Prometheus metrics served from `/metrics`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod shutdown;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

/// Creates the Axum application router with all routes.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::root::greet))
        .route("/health", get(routes::health::check))
        .merge(metrics_router)
        .method_not_allowed_fallback(routes::fallback::method_not_allowed)
        .fallback(routes::fallback::not_found)
        .layer(axum::middleware::from_fn(middleware::track_metrics))
        .layer(TraceLayer::new_for_http())
}
