//! Network selection
//!
//! A [`NetworkSelector`] owns the verified registry and a write-once
//! active-network cell. It can be threaded through an application context,
//! or installed once as the process-wide selector behind
//! [`active_parameters`].
//!
//! Selection is write-once: re-selecting the active network is a no-op,
//! selecting a different one fails with
//! [`ChainParamsError::NetworkAlreadySelected`].

use once_cell::sync::OnceCell;
use tracing::{error, info};

use crate::domain::params::ParameterSet;
use crate::domain::registry::ChainParamsRegistry;
use crate::domain::NetworkId;
use crate::ports::{flags, FlagSource};
use crate::{ChainParamsError, Result};

static GLOBAL: OnceCell<NetworkSelector> = OnceCell::new();

/// Resolve the requested network from startup flags.
///
/// `testnet` and `regtest` are mutually exclusive. A `network` name, if
/// given, must agree with whichever of them is set. No flags means main.
pub fn resolve_network(source: &dyn FlagSource) -> Result<NetworkId> {
    let testnet = source.get_bool(flags::TESTNET, false);
    let regtest = source.get_bool(flags::REGTEST, false);

    let from_bools = match (testnet, regtest) {
        (true, true) => {
            error!("Both testnet and regtest requested");
            return Err(ChainParamsError::ConfigurationConflict(
                "testnet and regtest are mutually exclusive".to_string(),
            ));
        }
        (true, false) => Some(NetworkId::Test),
        (false, true) => Some(NetworkId::Regtest),
        (false, false) => None,
    };

    let from_name = source
        .get_str(flags::NETWORK)
        .map(|name| name.parse::<NetworkId>())
        .transpose()?;

    match (from_bools, from_name) {
        (Some(a), Some(b)) if a != b => Err(ChainParamsError::ConfigurationConflict(format!(
            "network {} conflicts with --{}",
            b,
            if a == NetworkId::Test { flags::TESTNET } else { flags::REGTEST }
        ))),
        (Some(id), _) | (None, Some(id)) => Ok(id),
        (None, None) => Ok(NetworkId::Main),
    }
}

/// Registry plus the write-once active network.
#[derive(Debug)]
pub struct NetworkSelector {
    registry: ChainParamsRegistry,
    active: OnceCell<NetworkId>,
}

impl NetworkSelector {
    /// Wrap a built registry. No network is active yet.
    pub fn new(registry: ChainParamsRegistry) -> Self {
        Self {
            registry,
            active: OnceCell::new(),
        }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &ChainParamsRegistry {
        &self.registry
    }

    /// Activate `id`.
    pub fn select(&self, id: NetworkId) -> Result<&ParameterSet> {
        let active = *self.active.get_or_init(|| {
            info!(network = %id, "Network selected");
            id
        });
        if active != id {
            return Err(ChainParamsError::NetworkAlreadySelected {
                active,
                requested: id,
            });
        }
        Ok(self.registry.get(active))
    }

    /// Activate a network by name. Unrecognized names fail with
    /// [`ChainParamsError::UnknownNetworkIdentifier`].
    pub fn select_by_name(&self, name: &str) -> Result<&ParameterSet> {
        self.select(name.parse()?)
    }

    /// Resolve flags and activate the result. On a conflict nothing is
    /// activated.
    pub fn select_from_flags(&self, source: &dyn FlagSource) -> Result<&ParameterSet> {
        self.select(resolve_network(source)?)
    }

    /// Active network, if any.
    pub fn active_network(&self) -> Option<NetworkId> {
        self.active.get().copied()
    }

    /// Parameters of the active network.
    pub fn active(&self) -> Result<&ParameterSet> {
        self.active_network()
            .map(|id| self.registry.get(id))
            .ok_or(ChainParamsError::NetworkNotSelected)
    }

    /// Install as the process-wide selector. Fails if one is already
    /// installed.
    pub fn install_global(self) -> Result<&'static NetworkSelector> {
        GLOBAL.set(self).map_err(|_| {
            ChainParamsError::ConfigurationConflict(
                "global network selector already installed".to_string(),
            )
        })?;
        global()
    }
}

/// The process-wide selector, if installed.
pub fn global() -> Result<&'static NetworkSelector> {
    GLOBAL.get().ok_or(ChainParamsError::NetworkNotSelected)
}

/// Activate `id` on the process-wide selector.
pub fn select_network(id: NetworkId) -> Result<&'static ParameterSet> {
    global()?.select(id)
}

/// Parameters of the process-wide active network.
pub fn active_parameters() -> Result<&'static ParameterSet> {
    global()?.active()
}
