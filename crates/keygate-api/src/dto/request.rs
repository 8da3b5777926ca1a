//! Request DTOs.
//!
//! Fields the client must send are still declared `Option` so that a
//! missing field surfaces as the route's documented 400 with its exact
//! message, not as a body-deserialization rejection.

use serde::{Deserialize, Serialize};

/// `POST /create` request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateLicenseRequest {
    /// Expiration override as `YYYY-MM-DD`; defaults to 14 days out.
    pub expiration: Option<String>,
}

/// `POST /test` request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestLicenseRequest {
    /// Device identifier the trial license is bound to.
    pub mac: Option<String>,
}

/// `POST /validate` request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateRequest {
    /// License key to validate.
    pub key: Option<String>,
    /// Device identifier presenting the license.
    pub mac: Option<String>,
}

/// `POST /purchase` request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchaseRequest {
    /// Hash of the payment transaction.
    pub tx_hash: Option<String>,
    /// Optional device identifier to pre-bind the license to.
    pub mac: Option<String>,
}

/// `POST /extend` request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtendRequest {
    /// Hash of the payment transaction.
    pub tx_hash: Option<String>,
    /// License to extend.
    pub license_key: Option<String>,
}

/// `GET /check` query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckQuery {
    /// License key to inspect.
    pub key: Option<String>,
}
