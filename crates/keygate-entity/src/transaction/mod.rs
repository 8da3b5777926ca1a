//! Processed-transaction idempotency marker.

pub mod model;

pub use model::{ProcessedTransaction, TxAction};
