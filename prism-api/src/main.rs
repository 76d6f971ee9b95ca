//! PRISM API Server Entry Point
//!
//! Bootstraps configuration, opens the customer spreadsheet and starts the
//! Axum HTTP server.

use std::sync::Arc;

use axum::Router;
use prism_api::telemetry::{init_tracing, TelemetryConfig};
use prism_api::{create_api_router, ApiConfig, ApiError, ApiResult, AppState};
use prism_storage::{RecordSource, SpreadsheetSource};

#[tokio::main]
async fn main() -> ApiResult<()> {
    let telemetry_config = TelemetryConfig::default();
    init_tracing(&telemetry_config)?;

    let api_config = ApiConfig::from_env()?;
    api_config.validate_for_production()?;

    let source = SpreadsheetSource::open(api_config.data_path.clone())?;
    if let Err(e) = source.check_available() {
        // Lookups re-read the file, so a later fix is picked up without a restart.
        tracing::warn!(error = %e, "Customer data source not available at startup");
    }
    tracing::info!(source = %source.describe(), "Customer data source configured");

    let state = AppState::new(Arc::new(source), api_config.static_dir.clone());
    let app: Router = create_api_router(state, &api_config);

    let addr = api_config.bind_addr()?;
    tracing::info!(%addr, "Starting PRISM API server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
