//! Metrics collection and exposition.
//!
//! # Metrics
//! - `guard_requests_total` (counter): ingest requests by status
//! - `guard_request_duration_seconds` (histogram): ingest latency
//! - `guard_validation_failures_total` (counter): failed validation rules
//! - `guard_error_responses_total` (counter): normalized error responses
//!   by status

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with its own HTTP listener. Failure to
/// install is logged, not fatal; the gateway runs without metrics.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record an ingest request outcome and its latency.
pub fn record_ingest(status: u16, start: Instant) {
    counter!("guard_requests_total", "status" => status.to_string()).increment(1);
    histogram!("guard_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Record failed validation rules (one increment per failed rule).
pub fn record_validation_failures(count: usize) {
    counter!("guard_validation_failures_total").increment(count as u64);
}

/// Record a normalized error response.
pub fn record_error_response(status: u16) {
    counter!("guard_error_responses_total", "status" => status.to_string()).increment(1);
}
