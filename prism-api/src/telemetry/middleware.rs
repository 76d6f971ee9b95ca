//! Axum Middleware for HTTP Request Tracing and Metrics
//!
//! Wraps every HTTP request with a `tracing` span, records Prometheus
//! metrics, and logs request completion.

use axum::{extract::Request, middleware::Next, response::Response};
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Instant;
use tracing::{info_span, Instrument};

use super::metrics::with_metrics;

/// Static assets collapse to one label.
static STATIC_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/static/.+$").expect("Invalid static path regex"));

/// Normalize path for metrics/spans (replace asset names with a placeholder).
///
/// This prevents high-cardinality label explosion in Prometheus.
pub fn normalize_path(path: &str) -> String {
    if STATIC_PATH.is_match(path) {
        return "/static/{file}".to_string();
    }
    path.to_string()
}

/// Observability middleware for Axum.
///
/// Query strings are never logged: they carry subscriber numbers.
pub async fn observability_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let normalized_path = normalize_path(&path);

    let span = info_span!(
        "http_request",
        http.method = %method,
        http.route = %normalized_path,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    let status = response.status();

    with_metrics(|m| {
        m.record_http_request(
            method.as_str(),
            &normalized_path,
            status.as_u16(),
            duration.as_secs_f64(),
        )
    });

    if status.is_server_error() {
        tracing::warn!(
            method = %method,
            path = %normalized_path,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Request failed"
        );
    } else {
        tracing::info!(
            method = %method,
            path = %normalized_path,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Request completed"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_static_asset() {
        assert_eq!(normalize_path("/static/css/site.css"), "/static/{file}");
    }

    #[test]
    fn test_normalize_path_no_ids() {
        assert_eq!(normalize_path("/api/validateinput"), "/api/validateinput");
        assert_eq!(normalize_path("/health/ready"), "/health/ready");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/static"), "/static");
    }
}
