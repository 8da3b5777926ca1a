//! Decoding of `transfer(address,uint256)` call data.

use crate::address;
use crate::error::ChainError;

/// 4-byte method selector of `transfer(address,uint256)`.
pub const TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];

/// Minor units per display unit of the token (USDT carries 6 decimals).
/// A design constant of the accepted contract, not configurable.
pub const MINOR_UNITS_PER_USDT: u128 = 1_000_000;

/// Minimum call-data length in hex characters: 4-byte selector plus two
/// 32-byte arguments.
const MIN_CALL_DATA_HEX_LEN: usize = 136;

/// A token amount in minor units, kept at the full 256-bit width of the
/// `uint256` argument.
///
/// Represented as a `(hi, lo)` pair of `u128` halves; the consumers of
/// this type (pricing and display scaling) saturate to `u128`, which is
/// already ~3.4e26 display units of headroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAmount {
    hi: u128,
    lo: u128,
}

impl TokenAmount {
    /// The largest representable amount, `2^256 - 1`.
    pub const MAX: TokenAmount = TokenAmount {
        hi: u128::MAX,
        lo: u128::MAX,
    };

    /// Build an amount from the 32-byte big-endian argument field.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut hi = [0u8; 16];
        let mut lo = [0u8; 16];
        hi.copy_from_slice(&bytes[..16]);
        lo.copy_from_slice(&bytes[16..]);
        Self {
            hi: u128::from_be_bytes(hi),
            lo: u128::from_be_bytes(lo),
        }
    }

    /// Build an amount that fits in `u128` minor units.
    pub fn from_minor_units(minor: u128) -> Self {
        Self { hi: 0, lo: minor }
    }

    /// Minor units as `u128`, saturating for amounts beyond its range.
    pub fn minor_units(&self) -> u128 {
        if self.hi != 0 { u128::MAX } else { self.lo }
    }

    /// The amount scaled to display units.
    pub fn as_usdt(&self) -> f64 {
        self.minor_units() as f64 / MINOR_UNITS_PER_USDT as f64
    }
}

/// A decoded `transfer(address,uint256)` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCall {
    /// Rendered recipient address.
    pub recipient: String,
    /// Transfer amount in the token's minor units.
    pub amount: TokenAmount,
}

impl TransferCall {
    /// Decode a call-data hex blob into a typed transfer.
    ///
    /// The input must be hex of at least 136 characters; the leading
    /// selector must be `a9059cbb`, any other method is rejected as
    /// [`ChainError::UnsupportedMethod`].
    pub fn decode(call_data: &str) -> Result<Self, ChainError> {
        if call_data.len() < MIN_CALL_DATA_HEX_LEN {
            return Err(ChainError::MalformedCallData(format!(
                "call data must be at least {MIN_CALL_DATA_HEX_LEN} hex chars, got {}",
                call_data.len()
            )));
        }

        let bytes = hex::decode(call_data)
            .map_err(|e| ChainError::MalformedCallData(format!("invalid hex: {e}")))?;

        if bytes[..4] != TRANSFER_SELECTOR {
            return Err(ChainError::UnsupportedMethod(hex::encode(&bytes[..4])));
        }

        let recipient = address::recipient_from_padded(&bytes[4..36])?;

        let mut amount_bytes = [0u8; 32];
        amount_bytes.copy_from_slice(&bytes[36..68]);

        Ok(Self {
            recipient,
            amount: TokenAmount::from_be_bytes(amount_bytes),
        })
    }
}
