//! Rendering of on-chain recipient fields as public addresses.
//!
//! A `transfer(address,uint256)` call carries its recipient as a 32-byte
//! big-endian-padded field: 12 bytes of padding followed by the 20-byte
//! network address. The public form prepends the chain's one-byte
//! address version and renders the 21 bytes with the URL-safe base64
//! alphabet, unpadded.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::ChainError;

/// Version byte prepended to every raw 20-byte address.
pub const ADDRESS_VERSION: u8 = 0x41;

/// Length of the padded recipient field in a transfer call.
const PADDED_FIELD_LEN: usize = 32;

/// Leading padding bytes in the recipient field.
const PADDING_LEN: usize = 12;

/// Render the 32-byte padded recipient field of a transfer call as a
/// public address string.
///
/// Pure and deterministic; the only failure mode is a field of the
/// wrong length.
pub fn recipient_from_padded(field: &[u8]) -> Result<String, ChainError> {
    if field.len() != PADDED_FIELD_LEN {
        return Err(ChainError::MalformedCallData(format!(
            "recipient field must be {PADDED_FIELD_LEN} bytes, got {}",
            field.len()
        )));
    }

    let mut raw = Vec::with_capacity(1 + PADDED_FIELD_LEN - PADDING_LEN);
    raw.push(ADDRESS_VERSION);
    raw.extend_from_slice(&field[PADDING_LEN..]);

    Ok(URL_SAFE_NO_PAD.encode(raw))
}
