//! Error types for PRISM operations

use thiserror::Error;

/// Record source errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Data source unavailable at {path}: {reason}")]
    SourceUnavailable { path: String, reason: String },

    #[error("Required column missing from data source: {column}")]
    MissingColumn { column: String },

    #[error("Malformed data source at row {row}: {reason}")]
    Malformed { row: usize, reason: String },

    #[error("Unsupported data source format: {extension}")]
    UnsupportedFormat { extension: String },
}

/// Validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display_source_unavailable() {
        let err = StorageError::SourceUnavailable {
            path: "data/customers.csv".to_string(),
            reason: "No such file or directory".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Data source unavailable"));
        assert!(msg.contains("data/customers.csv"));
    }

    #[test]
    fn test_storage_error_display_missing_column() {
        let err = StorageError::MissingColumn {
            column: "vip".to_string(),
        };
        assert!(err.to_string().contains("vip"));
    }

    #[test]
    fn test_validation_error_display_required_field() {
        let err = ValidationError::RequiredFieldMissing {
            field: "msisdn".to_string(),
        };
        assert_eq!(err.to_string(), "Required field missing: msisdn");
    }

    #[test]
    fn test_validation_error_display_invalid_value() {
        let err = ValidationError::InvalidValue {
            field: "msisdn".to_string(),
            reason: "expected 9 digits".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("msisdn"));
        assert!(msg.contains("expected 9 digits"));
    }
}
