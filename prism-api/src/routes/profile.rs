//! Customer Profile REST API Routes
//!
//! MSISDN validation and profile lookup. Lookups read the customer table on
//! tokio's blocking pool; nothing is cached between requests.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use prism_core::{
    is_valid_msisdn, Attribute, CustomerRecord, Msisdn, ProfileClassifier, TriState,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{ApiError, ApiResult};
use crate::state::{AppState, SharedSource};
use crate::telemetry::{with_metrics, LookupOutcome};

// ============================================================================
// TYPES
// ============================================================================

/// Query string carrying the subscriber number.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MsisdnQuery {
    /// Nine-digit subscriber number, e.g. 650000000. A missing value is
    /// treated as empty.
    #[serde(default)]
    pub msisdn: String,
}

/// One attribute of a customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttributeValue {
    /// Column name, e.g. `mobile_money`.
    pub name: String,
    /// One of `yes`, `no`, `unknown`.
    pub value: String,
}

/// Structured profile for a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub msisdn: String,
    pub attributes: Vec<AttributeValue>,
    pub descriptions: Vec<String>,
    pub recommendations: Vec<String>,
    /// Same text `/api/profile` returns.
    pub summary: String,
}

impl ProfileResponse {
    fn build(record: &CustomerRecord, classifier: &ProfileClassifier) -> Self {
        let profile = classifier.classify(record);
        Self {
            msisdn: record.msisdn.clone(),
            attributes: record
                .iter()
                .map(|(attribute, value): (Attribute, TriState)| AttributeValue {
                    name: attribute.column_name().to_string(),
                    value: value.as_str().to_string(),
                })
                .collect(),
            descriptions: profile.descriptions.iter().map(|s| s.to_string()).collect(),
            recommendations: profile
                .recommendations
                .iter()
                .map(|s| s.to_string())
                .collect(),
            summary: profile.render(),
        }
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

/// GET /api/validateinput - Check an MSISDN against the accepted format
#[utoipa::path(
    get,
    path = "/api/validateinput",
    tag = "Profiles",
    params(MsisdnQuery),
    responses(
        (status = 200, description = "true when the MSISDN is well-formed", body = bool),
    ),
)]
pub async fn validate_input(Query(query): Query<MsisdnQuery>) -> Json<bool> {
    let valid = is_valid_msisdn(&query.msisdn);
    with_metrics(|m| m.record_validation(valid));
    tracing::debug!(valid, "MSISDN validated");
    Json(valid)
}

/// GET /api/profile - Rendered profile summary, or null when not found
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "Profiles",
    params(MsisdnQuery),
    responses(
        (status = 200, description = "Profile summary text, null when no record matches", body = String),
        (status = 500, description = "Customer data source could not be read", body = ApiError),
    ),
)]
pub async fn lookup_profile(
    State(source): State<SharedSource>,
    State(classifier): State<ProfileClassifier>,
    Query(query): Query<MsisdnQuery>,
) -> ApiResult<Json<Option<String>>> {
    let record = find_record(source, query.msisdn).await?;
    Ok(Json(record.map(|r| classifier.classify(&r).render())))
}

/// GET /api/profile/details - Structured profile
///
/// Unlike `/api/profile`, a malformed or missing MSISDN is a 400.
#[utoipa::path(
    get,
    path = "/api/profile/details",
    tag = "Profiles",
    params(MsisdnQuery),
    responses(
        (status = 200, description = "Structured customer profile", body = ProfileResponse),
        (status = 400, description = "MSISDN missing or malformed", body = ApiError),
        (status = 404, description = "No customer record matches", body = ApiError),
        (status = 500, description = "Customer data source could not be read", body = ApiError),
    ),
)]
pub async fn profile_details(
    State(source): State<SharedSource>,
    State(classifier): State<ProfileClassifier>,
    Query(query): Query<MsisdnQuery>,
) -> ApiResult<Json<ProfileResponse>> {
    let msisdn = Msisdn::parse(&query.msisdn)?;
    let record = find_record(source, msisdn.as_str().to_string())
        .await?
        .ok_or_else(|| ApiError::record_not_found(msisdn.as_str()))?;
    Ok(Json(ProfileResponse::build(&record, &classifier)))
}

/// Look a customer up on the blocking pool and count the outcome.
async fn find_record(source: SharedSource, msisdn: String) -> ApiResult<Option<CustomerRecord>> {
    let result = tokio::task::spawn_blocking(move || source.find_record(&msisdn)).await?;

    let outcome = match &result {
        Ok(Some(_)) => LookupOutcome::Found,
        Ok(None) => LookupOutcome::NotFound,
        Err(_) => LookupOutcome::Error,
    };
    with_metrics(|m| m.record_lookup(outcome));
    tracing::debug!(outcome = ?outcome, "Profile lookup finished");

    Ok(result?)
}

// ============================================================================
// ROUTER
// ============================================================================

/// Create the profile API router (mounted under /api).
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/validateinput", get(validate_input))
        .route("/profile", get(lookup_profile))
        .route("/profile/details", get(profile_details))
        .with_state(state)
}
