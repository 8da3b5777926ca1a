//! Redis record store implementation.

use async_trait::async_trait;
use redis::AsyncCommands;

use keygate_core::error::{AppError, ErrorKind};
use keygate_core::result::AppResult;
use keygate_core::traits::record_store::RecordStore;

use super::client::RedisClient;

/// Redis-backed record store.
///
/// Records never expire: unlike a cache, the store is the system of
/// record for licenses, so no TTL is ever set.
#[derive(Debug, Clone)]
pub struct RedisRecordStore {
    /// Redis client.
    client: RedisClient,
}

impl RedisRecordStore {
    /// Create a new Redis record store.
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Map a Redis error to an AppError.
    fn map_err(e: redis::RedisError) -> AppError {
        AppError::with_source(ErrorKind::Storage, format!("Redis error: {e}"), e)
    }
}

#[async_trait]
impl RecordStore for RedisRecordStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: Option<String> = conn.get(&full_key).await.map_err(Self::map_err)?;
        Ok(result)
    }

    async fn put(&self, key: &str, value: &str) -> AppResult<()> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let _: () = conn.set(&full_key, value).await.map_err(Self::map_err)?;
        Ok(())
    }

    async fn put_if_absent(&self, key: &str, value: &str) -> AppResult<bool> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let written: bool = conn
            .set_nx(&full_key, value)
            .await
            .map_err(Self::map_err)?;
        Ok(written)
    }

    async fn list_keys(&self) -> AppResult<Vec<String>> {
        let pattern = self.client.prefixed_key("*");
        let mut conn = self.client.conn_mut();

        let mut keys = Vec::new();
        let mut cursor: u64 = 0;
        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(500)
                .query_async(&mut conn)
                .await
                .map_err(Self::map_err)?;

            keys.extend(
                batch
                    .iter()
                    .map(|k| self.client.strip_prefix(k).to_string()),
            );

            cursor = next;
            if cursor == 0 {
                break;
            }
        }

        Ok(keys)
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut conn = self.client.conn_mut();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(Self::map_err)?;
        Ok(pong == "PONG")
    }
}
