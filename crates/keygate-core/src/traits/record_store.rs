//! Record store trait for pluggable key/value persistence backends.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for the key/value record store that owns all license state.
///
/// All values are serialized as JSON strings. The store offers plain
/// read-then-write access only; callers must not assume any transactional
/// coupling between a `get` and a subsequent `put`. [`put_if_absent`] is
/// the one conditional primitive, for backends that can express it
/// atomically (best-effort on backends that cannot).
///
/// [`put_if_absent`]: RecordStore::put_if_absent
#[async_trait]
pub trait RecordStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store a value under a key, overwriting any existing value.
    async fn put(&self, key: &str, value: &str) -> AppResult<()>;

    /// Store a value only if the key does not already exist.
    /// Returns `true` if the value was written, `false` if the key was taken.
    async fn put_if_absent(&self, key: &str, value: &str) -> AppResult<bool>;

    /// List every key currently present in the store.
    async fn list_keys(&self) -> AppResult<Vec<String>>;

    /// Check that the store backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
