//! # keygate-entity
//!
//! Domain entity models for Keygate: the [`License`] record and the
//! [`ProcessedTransaction`] idempotency marker. Both are owned by the
//! external record store; this crate only defines their shapes and the
//! derived read-only projections.
//!
//! [`License`]: license::License
//! [`ProcessedTransaction`]: transaction::ProcessedTransaction

pub mod license;
pub mod transaction;

pub use license::License;
pub use transaction::{ProcessedTransaction, TxAction};
