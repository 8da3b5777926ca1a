//! Payment verification: transaction hash in, verified transfer out.

use std::sync::Arc;

use tracing::debug;

use keygate_core::config::chain::ChainConfig;

use crate::client::LedgerQuery;
use crate::error::ChainError;
use crate::transfer::{TokenAmount, TransferCall};

/// Result code of a cleanly executed contract call.
const CONTRACT_RET_SUCCESS: &str = "SUCCESS";

/// Contract action type of a smart-contract invocation.
const TRIGGER_SMART_CONTRACT: &str = "TriggerSmartContract";

/// A payment that passed every check: a successful transfer of the
/// configured token to the configured payee.
#[derive(Debug, Clone, Copy)]
pub struct VerifiedPayment {
    /// Transfer amount in the token's minor units.
    pub amount: TokenAmount,
}

impl VerifiedPayment {
    /// The amount scaled to display units.
    pub fn amount_usdt(&self) -> f64 {
        self.amount.as_usdt()
    }
}

/// Verifies that a transaction hash proves a specific token transfer.
///
/// Checks, in order: the transaction exists, executed successfully, is a
/// smart-contract invocation of the configured token contract, carries a
/// `transfer(address,uint256)` call, and pays the configured payee.
/// Performs exactly one ledger-query call per verification.
#[derive(Debug, Clone)]
pub struct PaymentVerifier {
    /// Ledger-query port.
    ledger: Arc<dyn LedgerQuery>,
    /// Hex form of the accepted token contract.
    usdt_contract: String,
    /// Rendered address payments must be sent to.
    payee_address: String,
}

impl PaymentVerifier {
    /// Create a verifier over a ledger-query port.
    pub fn new(ledger: Arc<dyn LedgerQuery>, config: &ChainConfig) -> Self {
        Self {
            ledger,
            usdt_contract: config.usdt_contract.clone(),
            payee_address: config.payee_address.clone(),
        }
    }

    /// Verify the payment behind `tx_hash`.
    pub async fn verify(&self, tx_hash: &str) -> Result<VerifiedPayment, ChainError> {
        let record = self
            .ledger
            .transaction_by_hash(tx_hash)
            .await?
            .ok_or(ChainError::TxNotFound)?;

        let receipt = record.ret.first().ok_or_else(|| {
            ChainError::Upstream("transaction record has no execution receipt".to_string())
        })?;
        if receipt.contract_ret != CONTRACT_RET_SUCCESS {
            return Err(ChainError::TransactionFailed(receipt.contract_ret.clone()));
        }

        let invocation = record.raw_data.contract.first().ok_or_else(|| {
            ChainError::Upstream("transaction record has no contract action".to_string())
        })?;
        if invocation.contract_type != TRIGGER_SMART_CONTRACT {
            return Err(ChainError::WrongContractType(
                invocation.contract_type.clone(),
            ));
        }

        let value = &invocation.parameter.value;
        if value.contract_address != self.usdt_contract {
            return Err(ChainError::WrongContract(value.contract_address.clone()));
        }

        let transfer = TransferCall::decode(&value.data)?;
        if transfer.recipient != self.payee_address {
            return Err(ChainError::WrongRecipient(transfer.recipient));
        }

        debug!(
            tx_hash,
            minor_units = transfer.amount.minor_units(),
            "Payment verified"
        );

        Ok(VerifiedPayment {
            amount: transfer.amount,
        })
    }
}
