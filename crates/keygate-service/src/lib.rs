//! # keygate-service
//!
//! Business logic for Keygate: the license-lifecycle state machine, the
//! payment-to-duration grant schedule, transaction idempotency, and the
//! purchase/extension orchestration tying them to payment verification.

pub mod idempotency;
pub mod license;
pub mod pricing;
pub mod purchase;

pub use idempotency::IdempotencyGuard;
pub use license::service::LicenseService;
pub use purchase::service::PurchaseService;
