//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `POST /create` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// The freshly generated license key.
    pub license_key: String,
}

/// `POST /test` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestLicenseResponse {
    /// The freshly generated license key.
    pub license_key: String,
    /// Expiration date as `YYYY-MM-DD`.
    pub expires: String,
}

/// `POST /purchase` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseResponse {
    /// The freshly generated license key.
    pub license_key: String,
    /// Expiration date as `YYYY-MM-DD`.
    pub expires: String,
    /// Verified payment amount in display units.
    pub amount_paid: f64,
    /// Days of entitlement the payment bought.
    pub days_granted: u32,
}

/// `POST /extend` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendResponse {
    /// The extended license key.
    pub license_key: String,
    /// New expiration date as `YYYY-MM-DD`.
    pub new_expiration: String,
    /// Days added by the payment.
    pub days_added: u32,
    /// Verified payment amount in display units.
    pub amount_paid: f64,
    /// Basis of the extension: `"previous_expiration"` or `"today"`.
    pub extended_from: String,
}

/// `GET /check` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    /// The license key.
    pub license_key: String,
    /// Expiration date as `YYYY-MM-DD`.
    pub expiration: String,
    /// Whether the license is past its expiration.
    pub is_expired: bool,
    /// Whole days until expiration, 0 when expired.
    pub days_remaining: i64,
    /// Device the license is bound to, if any.
    pub bound_mac: Option<String>,
    /// Whether this is a trial license.
    pub is_test: bool,
    /// When the license was purchased, for paid licenses.
    pub purchase_date: Option<DateTime<Utc>>,
    /// When the license was last extended, if ever.
    pub last_extended: Option<DateTime<Utc>>,
}

/// `GET /health` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when the record store answers, `"degraded"` otherwise.
    pub status: String,
}
