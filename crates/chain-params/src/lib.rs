//! # Chain Parameters
//!
//! Per-network consensus constants and the self-verifying genesis block.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ NetworkSelector   (write-once active network)             │
//! │        │                                                  │
//! │ ChainParamsRegistry   main ─▶ test ─▶ regtest             │
//! │        │                      (layered overrides)         │
//! │ GenesisBuilder ── merkle ── shared-types encoding         │
//! │ SeedAddressGenerator ── TimeSource / RandomSource ports   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup
//!
//! ```rust
//! use chain_params::adapters::{SystemTimeSource, ThreadRandomSource};
//! use chain_params::{ChainParamsRegistry, NetworkId, NetworkSelector};
//!
//! let registry = ChainParamsRegistry::build(&SystemTimeSource::new(), &ThreadRandomSource::new())
//!     .expect("hardcoded constants verify");
//! let selector = NetworkSelector::new(registry);
//! let params = selector.select(NetworkId::Regtest).unwrap();
//! assert_eq!(params.subsidy_halving_interval, 150);
//! ```
//!
//! Building the registry fails with
//! [`ChainParamsError::ConstantIntegrityFailure`] if any computed genesis
//! hash or Merkle root differs from its hardcoded value.

#![warn(missing_docs)]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use domain::*;
pub use error::{ChainParamsError, Result};
pub use ports::{FlagSource, RandomSource, TimeSource};
pub use primitive_types::U256;
pub use shared_types::{Block, BlockHeader, CompactTarget, Hash256, Transaction};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
