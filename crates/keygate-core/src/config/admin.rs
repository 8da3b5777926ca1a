//! Admin endpoint protection configuration.

use serde::{Deserialize, Serialize};

/// Protection applied to the admin license-creation endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Shared secret expected in the `X-Admin-Key` request header.
    #[serde(default)]
    pub admin_key: String,
    /// Source IPs allowed to call admin endpoints. Empty = allow all.
    #[serde(default)]
    pub allowed_ips: Vec<String>,
}
