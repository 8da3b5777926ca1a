//! Orchestration of the paid flows: verify, price, claim, apply, record.

use std::sync::Arc;

use tracing::info;

use keygate_core::error::AppError;
use keygate_core::result::AppResult;
use keygate_chain::verifier::PaymentVerifier;
use keygate_entity::license::License;
use keygate_entity::transaction::TxAction;

use crate::idempotency::IdempotencyGuard;
use crate::license::service::{ExtensionBasis, LicenseService};
use crate::pricing;

/// Result of a successful `/purchase`.
#[derive(Debug, Clone)]
pub struct PurchaseReceipt {
    /// The freshly issued license.
    pub license: License,
    /// Amount paid, in display units.
    pub amount_usdt: f64,
    /// Days of entitlement the payment bought.
    pub days_granted: u32,
}

/// Result of a successful `/extend`.
#[derive(Debug, Clone)]
pub struct ExtensionReceipt {
    /// The extended license.
    pub license: License,
    /// Days added to the license.
    pub days_added: u32,
    /// Amount paid, in display units.
    pub amount_usdt: f64,
    /// Which date the extension was computed from.
    pub extended_from: ExtensionBasis,
}

/// Drives a transaction hash through verification, pricing, the
/// idempotency guard, and the license ledger.
///
/// The marker is recorded only after the ledger mutation succeeds; a
/// failure in between leaves the transaction replayable (the documented
/// gap of the two-step write sequence).
#[derive(Debug, Clone)]
pub struct PurchaseService {
    /// Payment verifier.
    verifier: Arc<PaymentVerifier>,
    /// License ledger.
    licenses: Arc<LicenseService>,
    /// Transaction idempotency guard.
    guard: Arc<IdempotencyGuard>,
}

impl PurchaseService {
    /// Create a purchase service.
    pub fn new(
        verifier: Arc<PaymentVerifier>,
        licenses: Arc<LicenseService>,
        guard: Arc<IdempotencyGuard>,
    ) -> Self {
        Self {
            verifier,
            licenses,
            guard,
        }
    }

    /// Issue a new license against a verified payment.
    pub async fn purchase(
        &self,
        tx_hash: &str,
        mac: Option<String>,
    ) -> AppResult<PurchaseReceipt> {
        let payment = self.verifier.verify(tx_hash).await?;
        let days = Self::days_for(payment.amount_usdt(), payment.amount)?;

        self.guard.ensure_unused(tx_hash).await?;

        let license = self
            .licenses
            .create_from_payment(tx_hash, payment.amount_usdt(), days, mac)
            .await?;
        self.guard
            .record(tx_hash, &license.key, TxAction::Issue)
            .await?;

        info!(
            tx_hash,
            key = %license.key,
            amount = payment.amount_usdt(),
            days,
            "Purchase completed"
        );
        Ok(PurchaseReceipt {
            license,
            amount_usdt: payment.amount_usdt(),
            days_granted: days,
        })
    }

    /// Extend an existing license against a verified payment.
    pub async fn extend(&self, tx_hash: &str, license_key: &str) -> AppResult<ExtensionReceipt> {
        let payment = self.verifier.verify(tx_hash).await?;
        let days = Self::days_for(payment.amount_usdt(), payment.amount)?;

        self.guard.ensure_unused(tx_hash).await?;

        let (license, basis) = self
            .licenses
            .extend(license_key, days, tx_hash, payment.amount_usdt())
            .await?;
        self.guard
            .record(tx_hash, &license.key, TxAction::Extend)
            .await?;

        info!(
            tx_hash,
            key = %license.key,
            amount = payment.amount_usdt(),
            days,
            basis = basis.as_str(),
            "Extension completed"
        );
        Ok(ExtensionReceipt {
            license,
            days_added: days,
            amount_usdt: payment.amount_usdt(),
            extended_from: basis,
        })
    }

    fn days_for(
        display_amount: f64,
        amount: keygate_chain::transfer::TokenAmount,
    ) -> AppResult<u32> {
        pricing::grant_days(amount).ok_or_else(|| {
            AppError::payment(format!(
                "Payment of {display_amount} USDT is below the {} USDT minimum",
                pricing::MINIMUM_USDT
            ))
        })
    }
}
