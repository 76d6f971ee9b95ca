//! End-to-end tests for the PRISM HTTP surface.

mod support;

use axum::http::StatusCode;
use prism_core::{summarize, Attribute, CustomerRecord, TriState};
use prism_storage::SpreadsheetSource;
use prism_test_utils::fixtures::*;
use serde_json::Value;

use support::{get_json, get_raw, test_app};

// ============================================================================
// VALIDATION
// ============================================================================

#[tokio::test]
async fn validate_input_accepts_and_rejects() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let app = test_app(sample_source(), dir.path());

    let cases = [
        ("650000000", true),
        ("699999999", true),
        ("640000000", false),
        ("6500000", false),
        ("6500000000", false),
        ("65000000a", false),
        ("", false),
    ];
    for (msisdn, expected) in cases {
        let (status, json) = get_json(&app, &format!("/api/validateinput?msisdn={msisdn}")).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, Value::Bool(expected), "msisdn {msisdn:?}");
    }

    // A missing parameter is invalid input, not an error.
    let (status, json) = get_json(&app, "/api/validateinput").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, Value::Bool(false));
    Ok(())
}

// ============================================================================
// PROFILE LOOKUP
// ============================================================================

#[tokio::test]
async fn profile_lookup_returns_rendered_text() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let app = test_app(sample_source(), dir.path());

    let (status, json) = get_json(&app, &format!("/api/profile?msisdn={MIXED_MSISDN}")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, Value::String(summarize(&mixed_record())));
    Ok(())
}

#[tokio::test]
async fn profile_lookup_not_found_is_null() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let app = test_app(sample_source(), dir.path());

    for uri in [
        format!("/api/profile?msisdn={ABSENT_MSISDN}"),
        "/api/profile?msisdn=".to_string(),
        "/api/profile".to_string(),
    ] {
        let (status, json) = get_json(&app, &uri).await?;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(json, Value::Null, "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn profile_lookup_is_idempotent() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let path = write_csv_table(dir.path(), "customers.csv", &sample_records())
        .map_err(|e| e.to_string())?;
    let source = SpreadsheetSource::open(path).map_err(|e| e.to_string())?;
    let app = test_app(source, dir.path());

    let uri = format!("/api/profile?msisdn={ALL_NO_MSISDN}");
    let first = get_raw(&app, &uri).await?;
    let second = get_raw(&app, &uri).await?;
    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn profile_lookup_sees_file_changes() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let path = write_csv_table(dir.path(), "customers.csv", &[all_no_record()])
        .map_err(|e| e.to_string())?;
    let source = SpreadsheetSource::open(path).map_err(|e| e.to_string())?;
    let app = test_app(source, dir.path());

    let uri = format!("/api/profile?msisdn={ALL_NO_MSISDN}");
    let (_, before) = get_json(&app, &uri).await?;

    let updated = CustomerRecord::new(ALL_NO_MSISDN).with(Attribute::Roaming, TriState::Yes);
    write_csv_table(dir.path(), "customers.csv", std::slice::from_ref(&updated))
        .map_err(|e| e.to_string())?;
    let (_, after) = get_json(&app, &uri).await?;

    assert_ne!(before, after);
    assert_eq!(after, Value::String(summarize(&updated)));
    Ok(())
}

#[tokio::test]
async fn missing_data_file_is_server_error() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let source = SpreadsheetSource::open(dir.path().join("missing.csv")).map_err(|e| e.to_string())?;
    let app = test_app(source, dir.path());

    let (status, json) = get_json(&app, &format!("/api/profile?msisdn={MIXED_MSISDN}")).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "DATA_SOURCE_ERROR");

    let (status, json) = get_json(&app, "/health/ready").await?;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], "unhealthy");
    Ok(())
}

#[tokio::test]
async fn profile_details_found_and_not_found() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let app = test_app(sample_source(), dir.path());

    let (status, json) =
        get_json(&app, &format!("/api/profile/details?msisdn={ALL_YES_MSISDN}")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["msisdn"], ALL_YES_MSISDN);
    assert_eq!(json["descriptions"].as_array().map(Vec::len), Some(Attribute::COUNT));
    assert_eq!(json["recommendations"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["summary"], Value::String(summarize(&all_yes_record())));

    let (status, json) =
        get_json(&app, &format!("/api/profile/details?msisdn={ABSENT_MSISDN}")).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "RECORD_NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn profile_details_rejects_bad_msisdn() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let app = test_app(sample_source(), dir.path());

    for (query, code) in [
        ("?msisdn=640000000", "INVALID_FORMAT"),
        ("?msisdn=65000000a", "INVALID_FORMAT"),
        ("?msisdn=", "MISSING_FIELD"),
        ("", "MISSING_FIELD"),
    ] {
        let (status, json) = get_json(&app, &format!("/api/profile/details{query}")).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{query}");
        assert_eq!(json["code"], code, "{query}");
        assert_eq!(json["details"]["field"], "msisdn", "{query}");

        // The plain lookup stays lenient for the same input.
        let (status, json) = get_json(&app, &format!("/api/profile{query}")).await?;
        assert_eq!(status, StatusCode::OK, "{query}");
        assert_eq!(json, Value::Null, "{query}");
    }
    Ok(())
}

// ============================================================================
// PAGES, HEALTH, OBSERVABILITY
// ============================================================================

#[tokio::test]
async fn index_page_and_static_assets() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    std::fs::create_dir_all(dir.path().join("css")).map_err(|e| e.to_string())?;
    std::fs::write(dir.path().join("css/site.css"), "body { margin: 0; }")
        .map_err(|e| e.to_string())?;
    let app = test_app(sample_source(), dir.path());

    let (status, body) = get_raw(&app, "/").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("<form"));

    let (status, body) = get_raw(&app, "/static/css/site.css").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"body { margin: 0; }");

    let (status, _) = get_raw(&app, "/static/nope.css").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn health_endpoints() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let app = test_app(sample_source(), dir.path());

    let (status, body) = get_raw(&app, "/health/ping").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"pong");

    let (status, json) = get_json(&app, "/health/live").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");

    let (status, json) = get_json(&app, "/health/ready").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["details"]["data_source"]["status"], "healthy");
    Ok(())
}

#[tokio::test]
async fn metrics_and_openapi_exposed() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let app = test_app(sample_source(), dir.path());

    get_json(&app, &format!("/api/profile?msisdn={MIXED_MSISDN}")).await?;

    let (status, body) = get_raw(&app, "/metrics").await?;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8_lossy(&body);
    assert!(text.contains("prism_profile_lookups_total"));
    assert!(text.contains("prism_http_requests_total"));

    let (status, json) = get_json(&app, "/openapi.json").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/api/profile"].is_object());
    Ok(())
}
