//! Metrics collection and exposition.
//!
//! # Metrics
//! - `budgetiq_http_requests_total` (counter): requests by method, route, status
//! - `budgetiq_http_request_duration_seconds` (histogram): latency distribution
//!
//! Labels use the matched route template, never the raw path, so unknown
//! URLs cannot blow up label cardinality.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const REQUESTS_TOTAL: &str = "budgetiq_http_requests_total";
pub const REQUEST_DURATION: &str = "budgetiq_http_request_duration_seconds";

/// Install the Prometheus recorder and serve it on `addr`.
///
/// Must run inside a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

/// Record a completed request.
pub fn record_request(method: &str, path: &str, status: u16, start_time: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!(REQUESTS_TOTAL, &labels).increment(1);
    metrics::histogram!(REQUEST_DURATION, &labels).record(start_time.elapsed().as_secs_f64());
}

/// Route-level middleware; install with `Router::route_layer` so
/// [`MatchedPath`] is populated.
pub async fn track_metrics(request: Request<Body>, next: Next) -> Response {
    let start_time = Instant::now();
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;
    record_request(&method, &path, response.status().as_u16(), start_time);
    response
}
