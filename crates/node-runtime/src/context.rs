//! # Node Context
//!
//! The explicit application context threaded through the runtime. It holds
//! the loaded configuration and a reference to the active parameter set,
//! which is also published as the process-wide selection.
//!
//! ## Startup Sequence
//!
//! 1. Build every network's parameters (genesis self-checks run here)
//! 2. Resolve the requested network from flags (conflicts abort here)
//! 3. Install the process-wide selector and activate the network

use anyhow::{Context, Result};
use tracing::info;

use chain_params::adapters::{SystemTimeSource, ThreadRandomSource};
use chain_params::{
    resolve_network, ChainParamsRegistry, NetworkId, NetworkSelector, ParameterSet,
    RandomSource, TimeSource,
};

use crate::config::NodeConfig;

/// Startup state shared with downstream subsystems.
#[derive(Debug, Clone)]
pub struct NodeContext {
    config: NodeConfig,
    params: &'static ParameterSet,
}

impl NodeContext {
    /// Bootstrap with the system clock and thread RNG.
    pub fn bootstrap(config: NodeConfig) -> Result<Self> {
        Self::bootstrap_with(config, &SystemTimeSource::new(), &ThreadRandomSource::new())
    }

    /// Bootstrap with explicit time and random sources.
    pub fn bootstrap_with(
        config: NodeConfig,
        time: &dyn TimeSource,
        random: &dyn RandomSource,
    ) -> Result<Self> {
        let registry = ChainParamsRegistry::build(time, random)
            .context("chain parameter self-check failed")?;

        let network = resolve_network(&config.network).context("invalid network selection")?;

        let selector = NetworkSelector::new(registry)
            .install_global()
            .context("failed to install network selector")?;
        let params = selector
            .select(network)
            .with_context(|| format!("failed to activate {network}"))?;

        Ok(Self { config, params })
    }

    /// Loaded configuration.
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Active network.
    pub fn network(&self) -> NetworkId {
        self.params.network_id
    }

    /// Active parameters.
    pub fn params(&self) -> &'static ParameterSet {
        self.params
    }

    /// Log the active parameters.
    pub fn log_summary(&self) {
        let p = self.params;
        info!("===========================================");
        info!("  Unpay Node Runtime v{}", env!("CARGO_PKG_VERSION"));
        info!("  Network: {}", p.network_id);
        info!("===========================================");
        info!("Genesis:    {}", p.genesis_hash());
        info!("Magic:      {:02x?}", p.magic);
        info!("P2P Port:   {}", p.default_port);
        info!("RPC Port:   {}", p.rpc_port);
        info!("Data Dir:   {}", p.data_dir.as_deref().unwrap_or("(base)"));
        info!(
            dns_seeds = p.dns_seeds.len(),
            fixed_seeds = p.fixed_seeds.len(),
            require_rpc_password = p.require_rpc_password,
            "Bootstrap peers"
        );
    }
}
