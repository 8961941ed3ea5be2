//! Outbound ports (driven ports)
//!
//! Interfaces the registry depends on. Adapters for production live in
//! `crate::adapters`; deterministic doubles live in `crate::test_utils`.

/// Abstract interface for getting the current time.
pub trait TimeSource: Send + Sync {
    /// Current Unix time in seconds.
    fn now(&self) -> u64;
}

/// Abstract interface for uniform random numbers.
pub trait RandomSource: Send + Sync {
    /// Uniform value in `0..bound`. Returns 0 when `bound` is 0.
    fn below(&self, bound: u64) -> u64;
}

/// Abstract interface for reading startup flags (command line or environment).
pub trait FlagSource {
    /// Boolean flag, or `default` if absent.
    fn get_bool(&self, name: &str, default: bool) -> bool;

    /// String flag, if present.
    fn get_str(&self, name: &str) -> Option<String>;
}

/// Flag names consumed by network selection.
pub mod flags {
    /// Selects the test network.
    pub const TESTNET: &str = "testnet";
    /// Selects the regression-test network.
    pub const REGTEST: &str = "regtest";
    /// Selects a network by name (`main`, `test`, `regtest`).
    pub const NETWORK: &str = "network";
}
