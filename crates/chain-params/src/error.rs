//! Error types for the chain parameter registry

use thiserror::Error;

use crate::domain::NetworkId;

/// Result type alias for chain parameter operations
pub type Result<T> = std::result::Result<T, ChainParamsError>;

/// Errors that can occur while building or selecting chain parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainParamsError {
    /// Mutually exclusive network flags were requested together
    #[error("Configuration conflict: {0}")]
    ConfigurationConflict(String),

    /// A computed consensus constant differs from its hardcoded value
    #[error("Constant integrity failure on {network}: {field} expected {expected}, computed {actual}")]
    ConstantIntegrityFailure {
        /// Network whose constants failed the check
        network: NetworkId,
        /// Which constant failed
        field: &'static str,
        /// Hardcoded value
        expected: String,
        /// Value derived at startup
        actual: String,
    },

    /// A hardcoded constant could not be decoded
    #[error("Malformed constant on {network}: {field}: {reason}")]
    MalformedConstant {
        /// Network owning the constant
        network: NetworkId,
        /// Which constant is malformed
        field: &'static str,
        /// Decoder error
        reason: String,
    },

    /// Network identifier is not one of main/test/regtest
    #[error("Unknown network identifier: {0:?}")]
    UnknownNetworkIdentifier(String),

    /// A different network is already active for this process
    #[error("Network already selected: active {active}, requested {requested}")]
    NetworkAlreadySelected {
        /// Network currently active
        active: NetworkId,
        /// Network the caller tried to activate
        requested: NetworkId,
    },

    /// Parameters were read before any network was selected
    #[error("No network selected")]
    NetworkNotSelected,
}

impl ChainParamsError {
    /// Check if error is fatal (process must not continue)
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ConstantIntegrityFailure { .. }
                | Self::MalformedConstant { .. }
                | Self::UnknownNetworkIdentifier(_)
        )
    }

    /// Check if error is retryable. Every failure here is deterministic,
    /// so retrying with the same inputs reproduces it.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
