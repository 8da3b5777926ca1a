//! Route handlers.

pub mod health;
pub mod license;
pub mod purchase;

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use keygate_core::error::AppError;

/// Parse a request body into its typed schema before dispatch.
///
/// An absent body is treated as the empty object so that field-presence
/// checks produce the route's documented 400 message; malformed JSON is
/// a 400 of its own.
pub(crate) fn parse_body<T: DeserializeOwned + Default>(bytes: &Bytes) -> Result<T, AppError> {
    if bytes.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(bytes)
        .map_err(|e| AppError::validation(format!("Invalid JSON body: {e}")))
}

/// Presence check for a required request field.
///
/// Treats an absent field and an empty string the same way, preserving
/// the route's documented 400 message.
pub(crate) fn require<'a>(
    field: &'a Option<String>,
    message: &'static str,
) -> Result<&'a str, AppError> {
    match field.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::validation(message)),
    }
}
