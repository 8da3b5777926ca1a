//! License lifecycle state machine.

pub mod service;

pub use service::{ExtensionBasis, LicenseService, ValidationOutcome};
