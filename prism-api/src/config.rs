//! API Configuration Module
//!
//! Server, data source, and CORS settings. Configuration is loaded from
//! environment variables with defaults suitable for local development.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_BIND_HOST, DEFAULT_CORS_MAX_AGE_SECS, DEFAULT_DATA_PATH, DEFAULT_PORT,
    DEFAULT_STATIC_DIR,
};
use crate::error::{ApiError, ApiResult};

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

/// API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    // ========================================================================
    // Server
    // ========================================================================
    /// Host to bind, e.g. "0.0.0.0".
    pub bind_host: String,

    /// Port to bind.
    pub port: u16,

    pub environment: Environment,

    // ========================================================================
    // Data
    // ========================================================================
    /// Spreadsheet holding the customer table (.csv, .xlsx, .xls, .ods).
    pub data_path: PathBuf,

    /// Directory served under /static (favicon, stylesheets).
    pub static_dir: PathBuf,

    // ========================================================================
    // CORS
    // ========================================================================
    /// Allowed CORS origins. Empty means allow all origins (dev mode).
    pub cors_origins: Vec<String>,

    /// Max age for CORS preflight cache in seconds.
    pub cors_max_age_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_host: DEFAULT_BIND_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: Environment::Development,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            cors_origins: Vec::new(),
            cors_max_age_secs: DEFAULT_CORS_MAX_AGE_SECS,
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `PRISM_API_BIND`: Host to bind (default: 0.0.0.0)
    /// - `PORT` or `PRISM_API_PORT`: Port to bind (default: 8000)
    /// - `PRISM_ENVIRONMENT`: "production" enables strict checks
    /// - `PRISM_DATA_PATH`: Customer spreadsheet (default: data/customers.csv)
    /// - `PRISM_STATIC_DIR`: Static asset directory (default: static)
    /// - `PRISM_CORS_ORIGINS`: Comma-separated allowed origins (empty = allow all)
    /// - `PRISM_CORS_MAX_AGE_SECS`: Preflight cache duration (default: 86400)
    pub fn from_env() -> ApiResult<Self> {
        let defaults = Self::default();

        let port = match std::env::var("PORT")
            .ok()
            .or_else(|| std::env::var("PRISM_API_PORT").ok())
        {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ApiError::invalid_input(format!("Invalid port value: {}", value)))?,
            None => defaults.port,
        };

        let cors_origins = std::env::var("PRISM_CORS_ORIGINS")
            .ok()
            .map(|s| parse_origins(&s))
            .unwrap_or_default();

        Ok(Self {
            bind_host: std::env::var("PRISM_API_BIND").unwrap_or(defaults.bind_host),
            port,
            environment: std::env::var("PRISM_ENVIRONMENT")
                .map(|e| Environment::parse(&e))
                .unwrap_or(defaults.environment),
            data_path: std::env::var("PRISM_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            static_dir: std::env::var("PRISM_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            cors_origins,
            cors_max_age_secs: std::env::var("PRISM_CORS_MAX_AGE_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.cors_max_age_secs),
        })
    }

    /// Socket address the server listens on.
    pub fn bind_addr(&self) -> ApiResult<SocketAddr> {
        let addr = format!("{}:{}", self.bind_host, self.port);
        addr.parse::<SocketAddr>().map_err(|e| {
            ApiError::invalid_input(format!("Invalid bind address {}: {}", addr, e))
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Reject settings that are only acceptable in development.
    pub fn validate_for_production(&self) -> ApiResult<()> {
        if !self.is_production() {
            return Ok(());
        }
        if self.cors_origins.is_empty() {
            return Err(ApiError::invalid_input(
                "CORS origins not configured for production. Set PRISM_CORS_ORIGINS.",
            ));
        }
        if !self.data_path.is_file() {
            return Err(ApiError::invalid_input(format!(
                "Customer data file {} does not exist",
                self.data_path.display()
            )));
        }
        Ok(())
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect()
}
