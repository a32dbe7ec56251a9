//! Hex quantity codec.
//!
//! # Responsibilities
//! - Decode `0x`-prefixed hex quantities from the wire into [`U256`]
//! - Encode quantities back into canonical wire form
//!
//! # Design Decisions
//! - Empty string, bare `0x`, and `0x0` all decode to zero
//! - Canonical encoding strips leading zeros; zero encodes as `0x0`

use alloy::primitives::U256;
use thiserror::Error;

/// A quantity string that could not be decoded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuantityError {
    /// The value lacks the mandatory `0x` prefix.
    #[error("quantity '{0}' is missing the 0x prefix")]
    MissingPrefix(String),

    /// The digits after the prefix are not valid hexadecimal.
    #[error("quantity '{0}' contains invalid hex digits")]
    InvalidDigits(String),
}

/// Decode a `0x`-prefixed hex quantity to an unsigned integer.
pub fn decode_quantity(raw: &str) -> Result<U256, QuantityError> {
    if raw.is_empty() {
        return Ok(U256::ZERO);
    }

    let digits = raw
        .strip_prefix("0x")
        .ok_or_else(|| QuantityError::MissingPrefix(raw.to_string()))?;
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }

    U256::from_str_radix(digits, 16).map_err(|_| QuantityError::InvalidDigits(raw.to_string()))
}

/// Encode an unsigned integer in canonical wire form.
pub fn encode_quantity(value: U256) -> String {
    if value.is_zero() {
        "0x0".to_string()
    } else {
        format!("0x{value:x}")
    }
}
