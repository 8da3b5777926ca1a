//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use keygate_core::config::store::StoreConfig;
use keygate_core::error::AppError;
use keygate_core::result::AppResult;
use keygate_core::traits::record_store::RecordStore;

/// Store manager that wraps the configured record store provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner record store provider.
    inner: Arc<dyn RecordStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub async fn new(config: &StoreConfig) -> AppResult<Self> {
        let inner: Arc<dyn RecordStore> = match config.provider.as_str() {
            #[cfg(feature = "redis-backend")]
            "redis" => {
                info!("Initializing Redis record store");
                let client =
                    crate::redis::RedisClient::connect(&config.redis, &config.key_prefix).await?;
                Arc::new(crate::redis::RedisRecordStore::new(client))
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory record store");
                Arc::new(crate::memory::MemoryRecordStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: memory, redis"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn RecordStore>) -> Self {
        Self { inner: provider }
    }

    /// Get a shared handle to the inner provider.
    pub fn provider(&self) -> Arc<dyn RecordStore> {
        Arc::clone(&self.inner)
    }
}

#[async_trait]
impl RecordStore for StoreManager {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: &str) -> AppResult<()> {
        self.inner.put(key, value).await
    }

    async fn put_if_absent(&self, key: &str, value: &str) -> AppResult<bool> {
        self.inner.put_if_absent(key, value).await
    }

    async fn list_keys(&self) -> AppResult<Vec<String>> {
        self.inner.list_keys().await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}
