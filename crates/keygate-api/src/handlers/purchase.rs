//! Payment-gated handlers — purchase and extend.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use crate::dto::request::{ExtendRequest, PurchaseRequest};
use crate::dto::response::{ExtendResponse, PurchaseResponse};
use crate::error::ApiError;
use crate::handlers::{parse_body, require};
use crate::state::AppState;

/// POST /purchase
pub async fn purchase(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PurchaseResponse>, ApiError> {
    let req: PurchaseRequest = parse_body(&body)?;
    let tx_hash = require(&req.tx_hash, "Missing tx_hash in body")?;
    let mac = req.mac.clone().filter(|mac| !mac.is_empty());

    let receipt = state.purchases.purchase(tx_hash, mac).await?;

    Ok(Json(PurchaseResponse {
        expires: receipt.license.expiration_string(),
        license_key: receipt.license.key,
        amount_paid: receipt.amount_usdt,
        days_granted: receipt.days_granted,
    }))
}

/// POST /extend
pub async fn extend(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ExtendResponse>, ApiError> {
    let req: ExtendRequest = parse_body(&body)?;
    let tx_hash = require(&req.tx_hash, "Missing tx_hash or license_key in body")?;
    let license_key = require(&req.license_key, "Missing tx_hash or license_key in body")?;

    let receipt = state.purchases.extend(tx_hash, license_key).await?;

    Ok(Json(ExtendResponse {
        new_expiration: receipt.license.expiration_string(),
        license_key: receipt.license.key,
        days_added: receipt.days_added,
        amount_paid: receipt.amount_usdt,
        extended_from: receipt.extended_from.as_str().to_string(),
    }))
}
