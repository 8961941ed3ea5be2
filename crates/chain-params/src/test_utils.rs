//! Test utilities for the parameter registry.
//!
//! Deterministic implementations of the outbound ports.
//! Enable with the `test-utils` feature flag.
//!
//! # Example
//!
//! ```rust
//! use chain_params::test_utils::FixedTimeSource;
//! use chain_params::TimeSource;
//!
//! let time_source = FixedTimeSource::new(1000);
//! assert_eq!(time_source.now(), 1000);
//! ```

use std::collections::HashMap;

use crate::ports::{FlagSource, RandomSource, TimeSource};

/// A time source that returns a fixed timestamp.
#[derive(Debug, Clone)]
pub struct FixedTimeSource {
    timestamp: u64,
}

impl FixedTimeSource {
    /// Create a new fixed time source with the given timestamp (in seconds).
    pub fn new(timestamp: u64) -> Self {
        Self { timestamp }
    }

    /// Get the configured timestamp value.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> u64 {
        self.timestamp
    }
}

/// Random source that always returns the same value (reduced modulo the bound).
#[derive(Debug, Clone)]
pub struct FixedRandomSource {
    value: u64,
}

impl FixedRandomSource {
    /// Create a fixed random source that always returns the given value.
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    /// Random source returning the largest value below any bound.
    pub fn max() -> Self {
        Self::new(u64::MAX)
    }
}

impl RandomSource for FixedRandomSource {
    fn below(&self, bound: u64) -> u64 {
        if bound == 0 {
            0
        } else if self.value == u64::MAX {
            bound - 1
        } else {
            self.value % bound
        }
    }
}

/// In-memory flag source.
#[derive(Debug, Clone, Default)]
pub struct MapFlagSource {
    values: HashMap<String, String>,
}

impl MapFlagSource {
    /// Empty flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a boolean flag.
    pub fn with_bool(mut self, name: &str, value: bool) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }

    /// Set a string flag.
    pub fn with_str(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }
}

impl FlagSource for MapFlagSource {
    fn get_bool(&self, name: &str, default: bool) -> bool {
        self.values
            .get(name)
            .and_then(|v| crate::adapters::env::parse_bool(v))
            .unwrap_or(default)
    }

    fn get_str(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
