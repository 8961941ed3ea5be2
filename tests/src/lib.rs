//! # Unpay Test Suite
//!
//! Cross-crate tests for the chain parameter core.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/
//! │   ├── genesis_vectors.rs    # hardcoded genesis identities per network
//! │   ├── network_selection.rs  # layered parameters and selection rules
//! │   ├── seed_staleness.rs     # bootstrap peer timestamps
//! │   └── wire_format.rs        # byte-exact genesis encoding
//! └── benches/
//!     └── genesis_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p chain-tests
//! cargo bench -p chain-tests
//! ```
//!
//! Tests that touch the process-wide selection live in
//! `crates/node-runtime/tests/`, one binary per scenario.

pub mod integration;
