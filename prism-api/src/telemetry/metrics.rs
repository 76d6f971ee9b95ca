//! Prometheus Metrics Definitions
//!
//! Defines all PRISM metrics with appropriate labels and types.
//! Exposes a /metrics endpoint for Prometheus scraping.

use axum::{http::StatusCode, response::IntoResponse};
use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, Encoder, HistogramVec, TextEncoder,
};

use crate::error::{ApiError, ApiResult};

/// HTTP request latency buckets (seconds)
const HTTP_LATENCY_BUCKETS: &[f64] = &[
    0.001, 0.005, 0.010, 0.025, 0.050, 0.100, 0.250, 0.500, 1.0, 2.5, 5.0, 10.0,
];

/// Global metrics instance - initialized once on first use
pub static METRICS: Lazy<ApiResult<PrismMetrics>> = Lazy::new(PrismMetrics::new);

/// Outcome label for a profile lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    Found,
    NotFound,
    Error,
}

impl LookupOutcome {
    fn as_label(&self) -> &'static str {
        match self {
            LookupOutcome::Found => "found",
            LookupOutcome::NotFound => "not_found",
            LookupOutcome::Error => "error",
        }
    }
}

/// Container for all PRISM metrics.
#[derive(Clone)]
pub struct PrismMetrics {
    /// HTTP request counter - labels: method, path, status
    pub http_requests_total: CounterVec,

    /// HTTP request duration histogram - labels: method, path
    pub http_request_duration_seconds: HistogramVec,

    /// Profile lookup counter - labels: outcome
    pub profile_lookups_total: CounterVec,

    /// MSISDN validation counter - labels: result (valid/invalid)
    pub msisdn_validations_total: CounterVec,
}

impl PrismMetrics {
    /// Create and register all metrics with Prometheus.
    pub fn new() -> ApiResult<Self> {
        Ok(Self {
            http_requests_total: register_counter_vec!(
                "prism_http_requests_total",
                "Total number of HTTP requests",
                &["method", "path", "status"]
            )
            .map_err(|e| ApiError::internal_error(format!("Failed to register http_requests_total: {}", e)))?,

            http_request_duration_seconds: register_histogram_vec!(
                "prism_http_request_duration_seconds",
                "HTTP request duration in seconds",
                &["method", "path"],
                HTTP_LATENCY_BUCKETS.to_vec()
            )
            .map_err(|e| ApiError::internal_error(format!("Failed to register http_request_duration_seconds: {}", e)))?,

            profile_lookups_total: register_counter_vec!(
                "prism_profile_lookups_total",
                "Total customer profile lookups",
                &["outcome"]
            )
            .map_err(|e| ApiError::internal_error(format!("Failed to register profile_lookups_total: {}", e)))?,

            msisdn_validations_total: register_counter_vec!(
                "prism_msisdn_validations_total",
                "Total MSISDN validation requests",
                &["result"]
            )
            .map_err(|e| ApiError::internal_error(format!("Failed to register msisdn_validations_total: {}", e)))?,
        })
    }

    /// Record an HTTP request.
    pub fn record_http_request(&self, method: &str, path: &str, status: u16, duration_secs: f64) {
        let status_str = status.to_string();
        self.http_requests_total
            .with_label_values(&[method, path, &status_str])
            .inc();
        self.http_request_duration_seconds
            .with_label_values(&[method, path])
            .observe(duration_secs);
    }

    /// Record a profile lookup.
    pub fn record_lookup(&self, outcome: LookupOutcome) {
        self.profile_lookups_total
            .with_label_values(&[outcome.as_label()])
            .inc();
    }

    /// Record an MSISDN validation.
    pub fn record_validation(&self, valid: bool) {
        let result = if valid { "valid" } else { "invalid" };
        self.msisdn_validations_total
            .with_label_values(&[result])
            .inc();
    }
}

/// Run `f` against the global metrics, skipping silently if registration failed.
pub fn with_metrics(f: impl FnOnce(&PrismMetrics)) {
    if let Ok(metrics) = METRICS.as_ref() {
        f(metrics);
    }
}

/// Handler for GET /metrics endpoint.
///
/// Returns Prometheus text format metrics.
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Observability",
    responses(
        (status = 200, description = "Prometheus metrics in text format", content_type = "text/plain"),
        (status = 500, description = "Failed to encode metrics"),
    ),
)]
pub async fn metrics_handler() -> impl IntoResponse {
    // Make sure the PRISM collectors exist before the first scrape.
    Lazy::force(&METRICS);

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    match encoder.encode(&metric_families, &mut buffer) {
        Ok(_) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            buffer,
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode metrics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [("content-type", "text/plain")],
                format!("Failed to encode metrics: {}", e).into_bytes(),
            )
        }
    }
}
