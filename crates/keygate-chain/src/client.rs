//! Ledger-query client: fetches confirmed transaction details by hash.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use keygate_core::config::chain::ChainConfig;
use keygate_core::error::{AppError, ErrorKind};

use crate::error::ChainError;

/// Port for the external ledger-query service.
///
/// Exists so the verifier (and the HTTP layer above it) can be exercised
/// without a network.
#[async_trait]
pub trait LedgerQuery: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch the confirmed transaction record for a hash.
    /// `Ok(None)` means the ledger has no record of the transaction.
    async fn transaction_by_hash(
        &self,
        tx_hash: &str,
    ) -> Result<Option<TransactionRecord>, ChainError>;
}

/// One confirmed transaction as returned by the ledger-query service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionRecord {
    /// Execution receipts; the first one carries the result code.
    #[serde(default)]
    pub ret: Vec<ExecutionReceipt>,
    /// The signed payload of the transaction.
    #[serde(default)]
    pub raw_data: RawData,
}

/// Result of executing the transaction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecutionReceipt {
    /// Result code, `"SUCCESS"` when the contract executed cleanly.
    #[serde(rename = "contractRet", default)]
    pub contract_ret: String,
}

/// The transaction's signed payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawData {
    /// Contract actions; exactly one for ordinary transfers.
    #[serde(default)]
    pub contract: Vec<ContractInvocation>,
}

/// One contract action inside a transaction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractInvocation {
    /// Action type, `"TriggerSmartContract"` for token transfers.
    #[serde(rename = "type", default)]
    pub contract_type: String,
    /// Action parameters.
    #[serde(default)]
    pub parameter: ContractParameter,
}

/// Parameter wrapper of a contract action.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractParameter {
    /// The actual parameter values.
    #[serde(default)]
    pub value: ContractValue,
}

/// Values of a smart-contract invocation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractValue {
    /// Hex form of the invoked contract's address.
    #[serde(default)]
    pub contract_address: String,
    /// Call-data blob as a hex string.
    #[serde(default)]
    pub data: String,
}

/// Response envelope of `GET /v1/transactions/{hash}`.
#[derive(Debug, Default, Deserialize)]
struct TransactionEnvelope {
    /// Matching transactions; empty means unknown hash.
    #[serde(default)]
    data: Vec<TransactionRecord>,
}

/// HTTP client for the TronGrid-style ledger-query API.
///
/// Performs exactly one bounded request per lookup and never retries;
/// transient failure surfaces as [`ChainError::Upstream`].
#[derive(Debug, Clone)]
pub struct TronGridClient {
    /// Underlying HTTP client with the configured timeout.
    http: reqwest::Client,
    /// Base URL of the ledger-query service, without trailing slash.
    base_url: String,
}

impl TronGridClient {
    /// Build a client from chain configuration.
    pub fn new(config: &ChainConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Upstream, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl LedgerQuery for TronGridClient {
    async fn transaction_by_hash(
        &self,
        tx_hash: &str,
    ) -> Result<Option<TransactionRecord>, ChainError> {
        let url = format!("{}/v1/transactions/{tx_hash}", self.base_url);
        debug!(%url, "Querying ledger for transaction");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ChainError::Upstream(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ChainError::Upstream(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        let envelope: TransactionEnvelope = response
            .json()
            .await
            .map_err(|e| ChainError::Upstream(format!("unexpected response shape: {e}")))?;

        Ok(envelope.data.into_iter().next())
    }
}
