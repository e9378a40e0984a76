//! Prometheus scrape endpoint.

use axum::extract::State;
use axum::http::header;
use metrics_exporter_prometheus::PrometheusHandle;

/// Text exposition format 0.0.4.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// GET /metrics
pub async fn render(
    State(handle): State<PrometheusHandle>,
) -> ([(header::HeaderName, &'static str); 1], String) {
    ([(header::CONTENT_TYPE, CONTENT_TYPE)], handle.render())
}
