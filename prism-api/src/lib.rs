//! PRISM API - HTTP Layer
//!
//! Serves the customer profile lookup over HTTP: MSISDN validation, profile
//! summaries read from the customer spreadsheet, a small HTML front end,
//! health probes, Prometheus metrics and an OpenAPI document.

pub mod config;
pub mod constants;
pub mod error;
pub mod macros;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod templates;

// Re-export commonly used types
pub use config::{ApiConfig, Environment};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use openapi::ApiDoc;
pub use routes::create_api_router;
pub use routes::profile::{AttributeValue, ProfileResponse};
pub use state::{AppState, SharedSource};
