//! # Node Configuration
//!
//! Command-line flags layered over `UNPAY_*` environment variables. A flag
//! set on the command line always wins; the environment only fills gaps.
//!
//! | Setting | CLI | Environment |
//! |---------|-----|-------------|
//! | test network | `--testnet` | `UNPAY_TESTNET` |
//! | regtest network | `--regtest` | `UNPAY_REGTEST` |
//! | network by name | `--network` | `UNPAY_NETWORK` |
//! | log filter | `--log-level` | `UNPAY_LOG`, then `RUST_LOG` |

use chain_params::adapters::EnvFlagSource;
use chain_params::ports::flags;
use chain_params::FlagSource;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Default log filter.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Environment flag name for the log filter.
pub const LOG_FLAG: &str = "log";

/// Complete node configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeConfig {
    /// Network selection flags.
    pub network: NetworkFlags,
    /// Logging configuration.
    pub logging: LoggingConfig,
    /// Print the active parameters and exit.
    pub print_params: bool,
}

/// Network selection flags, as seen by chain parameter selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkFlags {
    /// Test network requested.
    pub testnet: bool,
    /// Regtest network requested.
    pub regtest: bool,
    /// Network requested by name.
    pub name: Option<String>,
}

impl FlagSource for NetworkFlags {
    fn get_bool(&self, name: &str, default: bool) -> bool {
        match name {
            flags::TESTNET => self.testnet,
            flags::REGTEST => self.regtest,
            _ => default,
        }
    }

    fn get_str(&self, name: &str) -> Option<String> {
        match name {
            flags::NETWORK => self.name.clone(),
            _ => None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Explicit filter directive. `None` defers to `RUST_LOG`, then
    /// [`DEFAULT_LOG_FILTER`].
    pub filter: Option<String>,
}

impl LoggingConfig {
    /// Build the subscriber filter.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        match &self.filter {
            Some(directive) => EnvFilter::try_new(directive)
                .map_err(|e| ConfigError::InvalidLogFilter(directive.clone(), e.to_string())),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Log filter directive could not be parsed.
    #[error("Invalid log filter {0:?}: {1}")]
    InvalidLogFilter(String, String),
}

/// Load configuration from the command line and the environment.
pub fn load_config(cli: &Cli) -> NodeConfig {
    load_config_with(cli, &EnvFlagSource::new())
}

/// Load configuration from the command line and an explicit fallback source.
pub fn load_config_with(cli: &Cli, env: &dyn FlagSource) -> NodeConfig {
    NodeConfig {
        network: NetworkFlags {
            testnet: cli.testnet || env.get_bool(flags::TESTNET, false),
            regtest: cli.regtest || env.get_bool(flags::REGTEST, false),
            name: cli.network.clone().or_else(|| env.get_str(flags::NETWORK)),
        },
        logging: LoggingConfig {
            filter: cli.log_level.clone().or_else(|| env.get_str(LOG_FLAG)),
        },
        print_params: cli.print_params,
    }
}
