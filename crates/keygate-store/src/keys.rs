//! Record key builders.
//!
//! Centralising key construction prevents typos and makes it easy to
//! find every key shape the application uses. License records are
//! stored under their bare key; idempotency markers share the same
//! namespace under a `tx:` prefix, so the license scan must filter
//! them out.

/// Prefix distinguishing idempotency markers from license records.
const TX_MARKER_PREFIX: &str = "tx:";

/// Record key for the idempotency marker of a transaction hash.
pub fn tx_marker(tx_hash: &str) -> String {
    format!("{TX_MARKER_PREFIX}{tx_hash}")
}

/// Whether a store key names an idempotency marker rather than a license.
pub fn is_tx_marker(key: &str) -> bool {
    key.starts_with(TX_MARKER_PREFIX)
}
