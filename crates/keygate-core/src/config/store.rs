//! Record store configuration.

use serde::{Deserialize, Serialize};

/// Record store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store provider: `"memory"` or `"redis"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Prefix applied to every record key (namespacing for shared backends).
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    /// Redis backend settings (used when `provider = "redis"`).
    #[serde(default)]
    pub redis: RedisStoreConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            key_prefix: default_key_prefix(),
            redis: RedisStoreConfig::default(),
        }
    }
}

/// Redis backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisStoreConfig {
    /// Redis connection URL.
    #[serde(default = "default_redis_url")]
    pub url: String,
}

impl Default for RedisStoreConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_key_prefix() -> String {
    "keygate".to_string()
}

fn default_redis_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}
