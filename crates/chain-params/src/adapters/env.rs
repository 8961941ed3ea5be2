//! Environment-variable flag source.
//!
//! Flag `name` is read from `<PREFIX><NAME>`, e.g. `testnet` from
//! `UNPAY_TESTNET`. Booleans accept `1/true/yes/on` and `0/false/no/off`;
//! anything else falls back to the default.

use crate::ports::FlagSource;

/// Default variable prefix.
pub const DEFAULT_ENV_PREFIX: &str = "UNPAY_";

/// Reads flags from process environment variables.
#[derive(Debug, Clone)]
pub struct EnvFlagSource {
    prefix: String,
}

impl EnvFlagSource {
    /// Source using [`DEFAULT_ENV_PREFIX`].
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_ENV_PREFIX)
    }

    /// Source using a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn var_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name.to_ascii_uppercase())
    }
}

impl Default for EnvFlagSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a boolean flag value.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl FlagSource for EnvFlagSource {
    fn get_bool(&self, name: &str, default: bool) -> bool {
        std::env::var(self.var_name(name))
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or(default)
    }

    fn get_str(&self, name: &str) -> Option<String> {
        std::env::var(self.var_name(name)).ok()
    }
}
