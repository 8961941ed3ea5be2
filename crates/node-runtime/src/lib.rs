//! # Node Runtime Library
//!
//! Startup plumbing for the node binary, exposed for testing.
//!
//! - `cli` - command-line arguments (clap)
//! - `config` - CLI flags layered over environment variables
//! - `logging` - tracing subscriber setup
//! - `context` - chain parameter bootstrap and the application context

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod context;
pub mod logging;

pub use cli::Cli;
pub use config::{load_config, load_config_with, ConfigError, LoggingConfig, NetworkFlags, NodeConfig};
pub use context::NodeContext;
pub use logging::init_tracing;
