//! Per-network parameter bundle

use primitive_types::U256;
use serde::Serialize;
use shared_types::{Amount, Hash256, COIN};

use crate::domain::genesis::GenesisBlock;
use crate::domain::seeds::PeerAddress;
use crate::domain::NetworkId;

/// Block subsidy before the first halving.
pub const INITIAL_SUBSIDY: Amount = 50 * COIN;

/// Address kinds that carry a network-specific encoding prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base58Type {
    /// Pay-to-public-key-hash address.
    PubkeyAddress,
    /// Pay-to-script-hash address.
    ScriptAddress,
    /// Wallet-import private key.
    SecretKey,
    /// Extended public key.
    ExtPublicKey,
    /// Extended private key.
    ExtSecretKey,
    /// Hierarchical-deterministic coin type index.
    ExtCoinType,
}

/// Address-prefix table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddressPrefixes {
    /// Public-key address version byte.
    pub pubkey_address: u8,
    /// Script address version byte.
    pub script_address: u8,
    /// Private-key version byte.
    pub secret_key: u8,
    /// Extended public key version.
    pub ext_public_key: [u8; 4],
    /// Extended private key version.
    pub ext_secret_key: [u8; 4],
    /// Coin type index (hardened).
    pub ext_coin_type: u32,
}

impl AddressPrefixes {
    /// Prefix bytes for `kind`. The coin type renders as four big-endian bytes.
    pub fn get(&self, kind: Base58Type) -> Vec<u8> {
        match kind {
            Base58Type::PubkeyAddress => vec![self.pubkey_address],
            Base58Type::ScriptAddress => vec![self.script_address],
            Base58Type::SecretKey => vec![self.secret_key],
            Base58Type::ExtPublicKey => self.ext_public_key.to_vec(),
            Base58Type::ExtSecretKey => self.ext_secret_key.to_vec(),
            Base58Type::ExtCoinType => self.ext_coin_type.to_be_bytes().to_vec(),
        }
    }
}

/// A DNS seed entry. The host is never resolved here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    /// Operator label.
    pub label: String,
    /// Seed hostname.
    pub host: String,
}

impl DnsSeed {
    /// Create a seed entry.
    pub fn new(label: &str, host: &str) -> Self {
        Self {
            label: label.to_string(),
            host: host.to_string(),
        }
    }
}

/// Consensus and network constants of one network.
///
/// Built once by the registry and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSet {
    /// Which network this is.
    pub network_id: NetworkId,
    /// Message-start bytes.
    pub magic: [u8; 4],
    /// Default peer-to-peer port.
    pub default_port: u16,
    /// Default control-service (RPC) port.
    pub rpc_port: u16,
    /// Highest target a valid block hash may reach.
    pub pow_limit: U256,
    /// Blocks between subsidy halvings.
    pub subsidy_halving_interval: u64,
    /// Address-prefix table.
    pub prefixes: AddressPrefixes,
    /// Legacy alert public key.
    pub alert_pubkey: Vec<u8>,
    /// DNS seeds, in query order.
    pub dns_seeds: Vec<DnsSeed>,
    /// Fixed bootstrap peers.
    pub fixed_seeds: Vec<PeerAddress>,
    /// Verified genesis block.
    pub genesis: GenesisBlock,
    /// Data-directory name under the base directory. `None` for main.
    pub data_dir: Option<String>,
    /// Whether the control service refuses to start without a password.
    pub require_rpc_password: bool,
}

impl ParameterSet {
    /// Identity hash of the genesis block.
    pub fn genesis_hash(&self) -> Hash256 {
        self.genesis.hash()
    }

    /// Prefix bytes for an address kind.
    pub fn base58_prefix(&self, kind: Base58Type) -> Vec<u8> {
        self.prefixes.get(kind)
    }

    /// Block subsidy at `height`: halved every `subsidy_halving_interval`
    /// blocks, zero once the shift would empty the value.
    pub fn block_subsidy(&self, height: u64) -> Amount {
        let halvings = height / self.subsidy_halving_interval.max(1);
        if halvings >= 64 {
            return 0;
        }
        INITIAL_SUBSIDY >> halvings
    }

    /// Serializable report of this parameter set.
    pub fn summary(&self) -> ParameterSummary {
        ParameterSummary {
            network: self.network_id,
            magic: hex::encode(self.magic),
            default_port: self.default_port,
            rpc_port: self.rpc_port,
            pow_limit: u256_hex(self.pow_limit),
            subsidy_halving_interval: self.subsidy_halving_interval,
            genesis_hash: self.genesis.hash().to_string(),
            merkle_root: self.genesis.merkle_root().to_string(),
            genesis_bits: self.genesis.header().bits.to_consensus(),
            prefixes: self.prefixes,
            dns_seeds: self.dns_seeds.clone(),
            fixed_seed_count: self.fixed_seeds.len(),
            data_dir: self.data_dir.clone(),
            require_rpc_password: self.require_rpc_password,
        }
    }
}

fn u256_hex(value: U256) -> String {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    hex::encode(bytes)
}

/// Flat, display-oriented view of a [`ParameterSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSummary {
    /// Network identifier.
    pub network: NetworkId,
    /// Magic bytes as hex.
    pub magic: String,
    /// Default peer port.
    pub default_port: u16,
    /// Default RPC port.
    pub rpc_port: u16,
    /// Difficulty ceiling as 64 hex digits.
    pub pow_limit: String,
    /// Halving interval.
    pub subsidy_halving_interval: u64,
    /// Genesis hash, display order.
    pub genesis_hash: String,
    /// Genesis Merkle root, display order.
    pub merkle_root: String,
    /// Genesis compact bits.
    pub genesis_bits: u32,
    /// Address prefixes.
    pub prefixes: AddressPrefixes,
    /// DNS seeds.
    pub dns_seeds: Vec<DnsSeed>,
    /// Number of fixed seeds.
    pub fixed_seed_count: usize,
    /// Data-directory override.
    pub data_dir: Option<String>,
    /// RPC password requirement.
    pub require_rpc_password: bool,
}
