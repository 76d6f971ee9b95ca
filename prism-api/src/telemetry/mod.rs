//! PRISM Telemetry - Observability Infrastructure
//!
//! Structured logging through `tracing` and Prometheus metrics for the API
//! layer.

pub mod metrics;
pub mod middleware;
pub mod tracer;

pub use metrics::{metrics_handler, with_metrics, LookupOutcome, PrismMetrics, METRICS};
pub use middleware::{normalize_path, observability_middleware};
pub use tracer::{init_tracing, TelemetryConfig};
