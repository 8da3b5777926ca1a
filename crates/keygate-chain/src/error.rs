//! Typed failures of the payment-verification pipeline.

use thiserror::Error;

use keygate_core::error::{AppError, ErrorKind};

/// Everything that can go wrong between a transaction hash and a
/// verified payment.
#[derive(Debug, Clone, Error)]
pub enum ChainError {
    /// The ledger-query service has no record of the transaction.
    #[error("Transaction not found")]
    TxNotFound,
    /// The transaction executed but did not succeed on-chain.
    #[error("Transaction failed on-chain ({0})")]
    TransactionFailed(String),
    /// The transaction's first contract action is not a smart-contract
    /// invocation.
    #[error("Transaction is not a contract call ({0})")]
    WrongContractType(String),
    /// The invoked contract is not the configured token contract.
    #[error("Transaction is for a different contract ({0})")]
    WrongContract(String),
    /// The call data's method selector is not `transfer(address,uint256)`.
    #[error("Unsupported contract method ({0})")]
    UnsupportedMethod(String),
    /// The transfer recipient is not the configured payee.
    #[error("Transfer recipient {0} does not match the configured payee")]
    WrongRecipient(String),
    /// The call data could not be decoded at all.
    #[error("Malformed call data: {0}")]
    MalformedCallData(String),
    /// The ledger-query service was unreachable or answered with an
    /// unexpected shape.
    #[error("Ledger query failed: {0}")]
    Upstream(String),
}

impl From<ChainError> for AppError {
    fn from(err: ChainError) -> Self {
        let kind = match &err {
            ChainError::TxNotFound => ErrorKind::NotFound,
            ChainError::Upstream(_) => ErrorKind::Upstream,
            _ => ErrorKind::Payment,
        };
        AppError::new(kind, err.to_string())
    }
}
