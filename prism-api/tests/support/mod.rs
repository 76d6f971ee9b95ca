//! Shared helpers for PRISM API integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use prism_api::{create_api_router, ApiConfig, AppState};
use prism_storage::RecordSource;
use tower::ServiceExt;

/// Router over `source` with development defaults.
pub fn test_app(source: impl RecordSource + 'static, static_dir: &Path) -> Router {
    let state = AppState::new(Arc::new(source), static_dir);
    create_api_router(state, &ApiConfig::default())
}

/// Issue a GET and return status plus raw body.
pub async fn get_raw(app: &Router, uri: &str) -> Result<(StatusCode, Vec<u8>), String> {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .map_err(|e| e.to_string())?,
        )
        .await
        .map_err(|e| e.to_string())?;
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .map_err(|e| e.to_string())?;
    Ok((status, body.to_vec()))
}

/// Issue a GET and parse the body as JSON.
pub async fn get_json(app: &Router, uri: &str) -> Result<(StatusCode, serde_json::Value), String> {
    let (status, body) = get_raw(app, uri).await?;
    let json = serde_json::from_slice(&body)
        .map_err(|e| format!("Body is not JSON ({}): {:?}", e, String::from_utf8_lossy(&body)))?;
    Ok((status, json))
}
