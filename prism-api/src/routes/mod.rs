//! HTTP Routes Module
//!
//! Includes:
//! - HTML pages (index, greeting form, favicon, static assets)
//! - Profile API under /api (MSISDN validation, profile lookup)
//! - Health check endpoints (Kubernetes-compatible)
//! - Prometheus metrics and the OpenAPI document
//! - CORS support for browser-based clients

pub mod health;
pub mod pages;
pub mod profile;

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

use crate::config::ApiConfig;
use crate::openapi::ApiDoc;
use crate::state::AppState;
use crate::telemetry::{metrics_handler, observability_middleware};

/// Handler for /openapi.json endpoint.
async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

// ============================================================================
// CORS LAYER
// ============================================================================

/// Build the CORS layer from ApiConfig.
///
/// In development mode (empty origins), allows all origins.
/// In production mode, only allows configured origins.
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(config.cors_max_age_secs));

    if config.cors_origins.is_empty() {
        tracing::info!("CORS: Development mode - allowing all origins");
        cors.allow_origin(Any)
    } else {
        tracing::info!(
            "CORS: Production mode - allowing origins: {:?}",
            config.cors_origins
        );
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

// ============================================================================
// ROUTER
// ============================================================================

/// Create the complete application router.
///
/// - HTML pages at /, /hello, /favicon.ico and /static/*
/// - Profile API at /api/*
/// - Health checks at /health/*
/// - Metrics at /metrics
/// - OpenAPI spec at /openapi.json
/// - Swagger UI at /swagger-ui (when the swagger-ui feature is enabled)
pub fn create_api_router(state: AppState, api_config: &ApiConfig) -> Router {
    #[allow(unused_mut)]
    let mut router = Router::new()
        .merge(pages::create_router(&state))
        .nest("/api", profile::create_router(state.clone()))
        .nest("/health", health::create_router(state))
        .route("/metrics", get(metrics_handler))
        .route("/openapi.json", get(openapi_json));

    #[cfg(feature = "swagger-ui")]
    {
        use utoipa_swagger_ui::SwaggerUi;
        router = router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    let cors = build_cors_layer(api_config);

    // Execution order: CORS -> Observability -> Handler
    router.layer(from_fn(observability_middleware)).layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_builds_for_both_modes() {
        let _ = build_cors_layer(&ApiConfig::default());
        let _ = build_cors_layer(&ApiConfig {
            cors_origins: vec!["https://prism.example".to_string()],
            ..Default::default()
        });
    }
}
