//! # Error Types
//!
//! Errors raised while parsing or decoding wire-level values.

use shared_crypto::CryptoError;
use thiserror::Error;

/// Errors that can occur when constructing shared types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// Hex string could not be decoded.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded bytes have the wrong length.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Compact target has the sign bit set with a non-zero mantissa.
    #[error("Compact target {0:#010x} is negative")]
    NegativeTarget(u32),

    /// Compact target does not fit in 256 bits.
    #[error("Compact target {0:#010x} overflows 256 bits")]
    TargetOverflow(u32),
}

impl From<hex::FromHexError> for TypeError {
    fn from(err: hex::FromHexError) -> Self {
        TypeError::InvalidHex(err.to_string())
    }
}

impl From<CryptoError> for TypeError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::InvalidDigestLength { expected, actual } => {
                TypeError::InvalidLength { expected, actual }
            }
        }
    }
}
