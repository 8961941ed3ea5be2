//! # Shared Crypto - Digest Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256 | Single-round digest |
//! | `hashing` | SHA-256d | Transaction ids, Merkle nodes, block identity |
//!
//! Every transaction and block identifier in the Unpay protocol is the
//! double SHA-256 of the canonical serialization. The proof-of-work digest is
//! a separate concern and does not live here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{digest_from_slice, sha256, sha256d, sha256d_concat, Digest256, Sha256dHasher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
