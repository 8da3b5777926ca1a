//! Payment-gated issuance and extension.

pub mod service;

pub use service::{ExtensionReceipt, PurchaseReceipt, PurchaseService};
