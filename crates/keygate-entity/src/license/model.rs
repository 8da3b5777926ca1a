//! License entity model.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A software license record.
///
/// Serialized as JSON into the record store under its `key`. The
/// `bound_mac` field transitions `None` → `Some` exactly once (first
/// successful validation wins) and the expiration date only ever moves
/// forward; a license is never deleted by normal operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    /// Opaque unique identifier, also the store lookup key.
    pub key: String,
    /// Device identifier the license is bound to; `None` until first
    /// successful validation.
    pub bound_mac: Option<String>,
    /// UTC calendar date after which the license is inactive.
    pub expiration: NaiveDate,
    /// Whether this is a 7-day trial license. Informational only.
    #[serde(default)]
    pub is_test: bool,
    /// When the paid license was purchased.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<DateTime<Utc>>,
    /// Transaction that paid for the license.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    /// Amount paid at purchase, in display units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_usdt: Option<f64>,
    /// When the license was most recently extended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_extended: Option<DateTime<Utc>>,
    /// Transaction that paid for the most recent extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_tx_hash: Option<String>,
    /// Amount paid for the most recent extension, in display units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_amount: Option<f64>,
}

impl License {
    /// Create an unbound license with a fresh key and the given expiration.
    pub fn new(expiration: NaiveDate) -> Self {
        Self {
            key: Uuid::new_v4().to_string(),
            bound_mac: None,
            expiration,
            is_test: false,
            purchase_date: None,
            tx_hash: None,
            amount_usdt: None,
            last_extended: None,
            extension_tx_hash: None,
            extension_amount: None,
        }
    }

    /// The instant the license expires: its expiration date at 00:00 UTC.
    pub fn expiration_instant(&self) -> DateTime<Utc> {
        self.expiration.and_time(NaiveTime::MIN).and_utc()
    }

    /// Whether the license is expired at the given instant.
    ///
    /// The comparison is date-only on the license side: once midnight of
    /// the expiration date has passed, the license is inactive.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiration_instant() < now
    }

    /// Whole days remaining until expiration (ceiling), floored at 0.
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        let seconds = (self.expiration_instant() - now).num_seconds();
        if seconds <= 0 {
            0
        } else {
            (seconds + 86_399) / 86_400
        }
    }

    /// The expiration date rendered as `YYYY-MM-DD`.
    pub fn expiration_string(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.expiration.year(),
            self.expiration.month(),
            self.expiration.day()
        )
    }
}
