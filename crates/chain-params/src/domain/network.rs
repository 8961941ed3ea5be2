//! Network identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ChainParamsError;

/// The three network variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// Production network
    Main,
    /// Public test network
    Test,
    /// Local regression-test network
    Regtest,
}

impl NetworkId {
    /// All variants in layering order (each builds on the previous one).
    pub const ALL: [NetworkId; 3] = [NetworkId::Main, NetworkId::Test, NetworkId::Regtest];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkId::Main => "main",
            NetworkId::Test => "test",
            NetworkId::Regtest => "regtest",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkId {
    type Err = ChainParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(NetworkId::Main),
            "test" | "testnet" => Ok(NetworkId::Test),
            "regtest" => Ok(NetworkId::Regtest),
            _ => Err(ChainParamsError::UnknownNetworkIdentifier(s.to_string())),
        }
    }
}
