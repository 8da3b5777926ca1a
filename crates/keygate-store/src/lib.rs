//! # keygate-store
//!
//! [`RecordStore`] implementations for Keygate: an in-memory store for
//! tests and single-node deployments, and a Redis-backed store for
//! anything that must survive a restart. The backend is selected by
//! configuration through [`provider::StoreManager`].
//!
//! [`RecordStore`]: keygate_core::traits::RecordStore

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;
