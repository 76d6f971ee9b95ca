//! OpenAPI Specification for PRISM API
//!
//! Generated with utoipa from the route annotations and response types.

use utoipa::OpenApi;

use crate::error::{ApiError, ErrorCode};
use crate::routes::health::{ComponentHealth, HealthDetails, HealthResponse, HealthStatus};
use crate::routes::profile::{AttributeValue, ProfileResponse};
use crate::routes::{health, profile};
use crate::telemetry::metrics;

/// OpenAPI document for PRISM API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PRISM API",
        version = "0.1.0",
        description = "Customer profile lookup by MSISDN with marketing recommendations",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local Development")
    ),
    tags(
        (name = "Profiles", description = "MSISDN validation and customer profile lookup"),
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Observability", description = "Prometheus metrics")
    ),
    paths(
        profile::validate_input,
        profile::lookup_profile,
        profile::profile_details,
        health::ping,
        health::liveness,
        health::readiness,
        metrics::metrics_handler,
    ),
    components(
        schemas(
            ApiError, ErrorCode,
            ProfileResponse, AttributeValue,
            HealthResponse, HealthStatus, HealthDetails, ComponentHealth
        )
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate OpenAPI spec as JSON string.
    pub fn to_json() -> Result<String, serde_json::Error> {
        let openapi = Self::openapi();
        serde_json::to_string_pretty(&openapi)
    }
}
