//! # keygate-chain
//!
//! Payment-proof verification against the TRON ledger: decoding a
//! transaction's `transfer(address,uint256)` call data into a typed
//! transfer, and checking execution success, contract identity, and
//! recipient against the configured payment shape.
//!
//! The only I/O in this crate is the single outbound ledger-query call
//! in [`client::TronGridClient`]; everything else is pure.

pub mod address;
pub mod client;
pub mod error;
pub mod transfer;
pub mod verifier;

pub use error::ChainError;
pub use verifier::{PaymentVerifier, VerifiedPayment};
