//! Constants for PRISM API

// ============================================================================
// SERVER
// ============================================================================

/// Default bind host
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

// ============================================================================
// DATA
// ============================================================================

/// Default customer spreadsheet location
pub const DEFAULT_DATA_PATH: &str = "data/customers.csv";

/// Default static asset directory
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Favicon file name inside the static directory
pub const FAVICON_FILE: &str = "favicon.ico";

// ============================================================================
// CORS
// ============================================================================

/// Default CORS max age in seconds (24 hours)
pub const DEFAULT_CORS_MAX_AGE_SECS: u64 = 86400;

// ============================================================================
// TELEMETRY
// ============================================================================

/// Default service name reported in logs
pub const DEFAULT_SERVICE_NAME: &str = "prism-api";

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "prism_api=debug,tower_http=debug,info";
