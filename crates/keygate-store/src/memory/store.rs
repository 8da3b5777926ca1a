//! In-memory record store implementation using dashmap.

use async_trait::async_trait;
use dashmap::DashMap;

use keygate_core::result::AppResult;
use keygate_core::traits::record_store::RecordStore;

/// In-memory record store backed by a concurrent hash map.
///
/// State does not survive a restart; intended for tests and single-node
/// evaluation deployments.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    /// The underlying record map.
    records: DashMap<String, String>,
}

impl MemoryRecordStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.records.get(key).map(|entry| entry.value().clone()))
    }

    async fn put(&self, key: &str, value: &str) -> AppResult<()> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn put_if_absent(&self, key: &str, value: &str) -> AppResult<bool> {
        match self.records.entry(key.to_string()) {
            dashmap::Entry::Occupied(_) => Ok(false),
            dashmap::Entry::Vacant(vacant) => {
                vacant.insert(value.to_string());
                Ok(true)
            }
        }
    }

    async fn list_keys(&self) -> AppResult<Vec<String>> {
        Ok(self
            .records
            .iter()
            .map(|entry| entry.key().clone())
            .collect())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
