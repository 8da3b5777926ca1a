//! License handlers — create, test, validate, check.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use chrono::Utc;

use crate::dto::request::{CheckQuery, CreateLicenseRequest, TestLicenseRequest, ValidateRequest};
use crate::dto::response::{CheckResponse, CreatedResponse, TestLicenseResponse};
use crate::error::ApiError;
use crate::handlers::{parse_body, require};
use crate::state::AppState;

/// POST /create
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreatedResponse>, ApiError> {
    let req: CreateLicenseRequest = parse_body(&body)?;

    let license = state.licenses.create(req.expiration.as_deref()).await?;

    Ok(Json(CreatedResponse {
        license_key: license.key,
    }))
}

/// POST /test
pub async fn create_test(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TestLicenseResponse>, ApiError> {
    let req: TestLicenseRequest = parse_body(&body)?;
    let mac = require(&req.mac, "Missing mac in body")?;

    let license = state.licenses.create_test(mac).await?;

    Ok(Json(TestLicenseResponse {
        expires: license.expiration_string(),
        license_key: license.key,
    }))
}

/// POST /validate
///
/// Answers with a plain-text outcome.
pub async fn validate(State(state): State<AppState>, body: Bytes) -> Result<String, ApiError> {
    let req: ValidateRequest = parse_body(&body)?;
    let key = require(&req.key, "Missing key or mac in body")?;
    let mac = require(&req.mac, "Missing key or mac in body")?;

    let outcome = state.licenses.validate(key, mac).await?;

    Ok(outcome.message().to_string())
}

/// GET /check?key=
pub async fn check(
    State(state): State<AppState>,
    Query(query): Query<CheckQuery>,
) -> Result<Json<CheckResponse>, ApiError> {
    let key = require(&query.key, "Missing key query parameter")?;

    let license = state.licenses.check(key).await?;
    let now = Utc::now();

    Ok(Json(CheckResponse {
        expiration: license.expiration_string(),
        is_expired: license.is_expired(now),
        days_remaining: license.days_remaining(now),
        bound_mac: license.bound_mac.clone(),
        is_test: license.is_test,
        purchase_date: license.purchase_date,
        last_extended: license.last_extended,
        license_key: license.key,
    }))
}
