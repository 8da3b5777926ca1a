//! At-most-once consumption of transaction hashes.

use std::sync::Arc;

use tracing::warn;

use keygate_core::error::AppError;
use keygate_core::result::AppResult;
use keygate_core::traits::record_store::RecordStore;
use keygate_entity::transaction::{ProcessedTransaction, TxAction};
use keygate_store::keys;

/// Guards each transaction hash against being applied more than once,
/// across both issuance and extension.
///
/// The check and the marker write are separate store operations with the
/// license mutation in between; the marker write uses `put_if_absent`,
/// which narrows but does not close the race window between two
/// concurrent requests carrying the same hash.
#[derive(Debug, Clone)]
pub struct IdempotencyGuard {
    /// Record store port.
    store: Arc<dyn RecordStore>,
}

impl IdempotencyGuard {
    /// Create a guard over a record store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Fail with a conflict if the hash has already been consumed.
    pub async fn ensure_unused(&self, tx_hash: &str) -> AppResult<()> {
        if self.store.get(&keys::tx_marker(tx_hash)).await?.is_some() {
            return Err(AppError::conflict(
                "Transaction has already been used for a license",
            ));
        }
        Ok(())
    }

    /// Record the marker; called immediately after the ledger mutation.
    pub async fn record(
        &self,
        tx_hash: &str,
        license_key: &str,
        action: TxAction,
    ) -> AppResult<()> {
        let marker = ProcessedTransaction::new(license_key, action);
        let json = serde_json::to_string(&marker)?;

        let written = self
            .store
            .put_if_absent(&keys::tx_marker(tx_hash), &json)
            .await?;
        if !written {
            warn!(tx_hash, "Concurrent request recorded this transaction first");
        }
        Ok(())
    }
}
