//! Tracing subscriber setup.

use anyhow::{anyhow, Result};

use crate::config::LoggingConfig;

/// Install the global fmt subscriber. Call once, before anything logs.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = config.env_filter()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
