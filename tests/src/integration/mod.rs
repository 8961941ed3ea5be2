//! # Integration Tests
//!
//! Exercise shared-crypto, shared-types and chain-params together.

pub mod genesis_vectors;
pub mod network_selection;
pub mod seed_staleness;
pub mod wire_format;
