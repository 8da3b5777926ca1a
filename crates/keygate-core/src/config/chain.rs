//! Blockchain / ledger-query configuration.

use serde::{Deserialize, Serialize};

/// Settings for the ledger-query service and the expected payment shape.
///
/// The token's decimal count is deliberately **not** configurable: the
/// 10^6 minor-unit scaling is a design constant of the USDT contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Base URL of the ledger-query service.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Hex form of the token contract whose transfers are accepted.
    #[serde(default = "default_usdt_contract")]
    pub usdt_contract: String,
    /// Rendered address that payments must be sent to.
    #[serde(default)]
    pub payee_address: String,
    /// Timeout for the single outbound ledger-query call, in seconds.
    /// The call is never retried.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            usdt_contract: default_usdt_contract(),
            payee_address: String::new(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.trongrid.io".to_string()
}

fn default_usdt_contract() -> String {
    // USDT (TRC20) mainnet contract in hex form.
    "41a614f803b6fd780986a42c78ec9c7f77e6ded13c".to_string()
}

fn default_timeout() -> u64 {
    10
}
