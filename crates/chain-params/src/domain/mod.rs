//! Domain layer: genesis construction, parameter sets and selection.

pub mod genesis;
pub mod merkle;
pub mod network;
pub mod params;
pub mod registry;
pub mod seeds;
pub mod selector;

pub use genesis::{
    build_genesis, create_genesis_coinbase, ExpectedGenesis, GenesisBlock, GenesisBuilder,
    GenesisInputs, COINBASE_SCRIPT_NUM, COINBASE_SENTINEL, GENESIS_VERSION,
};
pub use merkle::{compute_merkle_root, MerkleRoot};
pub use network::NetworkId;
pub use params::{
    AddressPrefixes, Base58Type, DnsSeed, ParameterSet, ParameterSummary, INITIAL_SUBSIDY,
};
pub use registry::{main_genesis_inputs, main_pow_limit, regtest_pow_limit, ChainParamsRegistry};
pub use seeds::{decode_seed_ip, PeerAddress, SeedAddressGenerator, ONE_WEEK_SECS};
pub use selector::{
    active_parameters, global, resolve_network, select_network, NetworkSelector,
};
