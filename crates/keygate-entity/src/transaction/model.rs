//! Idempotency marker recording that a transaction hash has been consumed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a consumed transaction paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxAction {
    /// The transaction issued a new license.
    Issue,
    /// The transaction extended an existing license.
    Extend,
}

impl std::fmt::Display for TxAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Issue => write!(f, "issue"),
            Self::Extend => write!(f, "extend"),
        }
    }
}

/// Marker persisted once per accepted payment, keyed by transaction hash.
///
/// At most one marker exists per transaction identifier; its presence is a
/// hard precondition failure for reprocessing. Markers are never mutated
/// or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedTransaction {
    /// License the transaction was applied to.
    pub license_key: String,
    /// Whether the transaction issued or extended the license.
    pub action: TxAction,
    /// When the transaction was consumed.
    pub processed_at: DateTime<Utc>,
}

impl ProcessedTransaction {
    /// Create a marker stamped with the current time.
    pub fn new(license_key: impl Into<String>, action: TxAction) -> Self {
        Self {
            license_key: license_key.into(),
            action,
            processed_at: Utc::now(),
        }
    }
}
