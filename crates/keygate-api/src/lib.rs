//! # keygate-api
//!
//! HTTP surface of Keygate: the Axum router, request/response DTOs, the
//! admin gate, and the mapping from domain errors to status codes.
//!
//! Success bodies are JSON except `/validate`, which answers with a
//! plain-text outcome; failures are a status code plus human-readable
//! text with no structured body.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
