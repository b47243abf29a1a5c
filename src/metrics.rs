//! Prometheus metrics for HTTP request tracking.
//!
//! Records a request counter and a latency histogram per route template.
//! Recording is a no-op until [`install_recorder`] has run.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::error::{Result, ServiceError};

// === Metric Name Constants ===

/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";

/// Path label for requests that matched no route.
pub const UNMATCHED_PATH: &str = "unmatched";

/// Initialize all metric descriptions.
/// Call this once after installing the recorder.
pub fn init_metrics() {
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Install the global Prometheus recorder and return its render handle.
pub fn install_recorder() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServiceError::Metrics(e.to_string()))?;
    init_metrics();
    Ok(handle)
}

/// Record a finished HTTP request.
pub fn record_http_request(start: Instant, method: &str, path: &str, status: u16) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    counter!(
        METRIC_HTTP_REQUESTS,
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(latency_ms);
}

/// Route template for a request, or [`UNMATCHED_PATH`].
///
/// Uses the template (`/greet/:name`) rather than the raw URI so label
/// cardinality stays bounded.
pub fn route_label(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_PATH.to_owned())
}

/// Middleware recording count and latency of every request.
pub async fn track_http(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = route_label(&req);

    let response = next.run(req).await;

    record_http_request(start, &method, &path, response.status().as_u16());
    response
}
