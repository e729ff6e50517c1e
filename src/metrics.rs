//! Request and upstream-call metrics.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Inbound HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Upstream request latency metric name.
pub const METRIC_UPSTREAM_LATENCY: &str = "upstream_request_latency_ms";
/// Upstream failures counter metric name.
pub const METRIC_UPSTREAM_FAILURES: &str = "upstream_failures_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");
    describe_histogram!(
        METRIC_UPSTREAM_LATENCY,
        "Upstream provider request latency in milliseconds"
    );
    describe_counter!(
        METRIC_UPSTREAM_FAILURES,
        "Total number of failed upstream provider requests"
    );

    debug!("Metrics initialized");
}

/// Count an inbound HTTP request by path and response status.
pub fn inc_http_request(path: &str, status: u16) {
    counter!(
        METRIC_HTTP_REQUESTS,
        "path" => path.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
}

/// Record latency of an upstream provider call.
pub fn record_upstream_latency(start: Instant, provider: &'static str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_UPSTREAM_LATENCY, "provider" => provider).record(latency_ms);
}

/// Count a failed upstream provider call.
pub fn inc_upstream_failure(provider: &'static str) {
    counter!(METRIC_UPSTREAM_FAILURES, "provider" => provider).increment(1);
}
