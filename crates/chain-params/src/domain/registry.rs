//! Parameter registry
//!
//! Builds the three parameter sets by layered override:
//!
//! ```text
//! main ──clone──▶ test (overrides) ──clone──▶ regtest (overrides)
//! ```
//!
//! Every layer re-derives and re-checks its genesis block. After all three
//! exist, the gating fields (magic, peer port, RPC port) are checked for
//! pairwise distinctness.

use primitive_types::U256;
use shared_types::CompactTarget;
use tracing::{debug, info};

use crate::domain::genesis::{ExpectedGenesis, GenesisBuilder, GenesisInputs};
use crate::domain::params::{AddressPrefixes, DnsSeed, ParameterSet, INITIAL_SUBSIDY};
use crate::domain::seeds::SeedAddressGenerator;
use crate::domain::NetworkId;
use crate::ports::{RandomSource, TimeSource};
use crate::{ChainParamsError, Result};

const GENESIS_MESSAGE: &str =
    "23 June 2015, Samsung heir apologizes over MERS outbreak at its hospital";
const GENESIS_PUBKEY: &str = "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f";
const GENESIS_BITS: u32 = 0x1e0f_fff0;
const GENESIS_MERKLE_ROOT: &str =
    "6e56cf9e2477064c15d6fceb458c882484f5cfd94907d657c2140831beacb74c";

/// Main network constants.
pub mod mainnet {
    /// Message-start bytes.
    pub const MAGIC: [u8; 4] = [0xbf, 0x0c, 0x6b, 0xbd];
    /// Peer port.
    pub const DEFAULT_PORT: u16 = 3338;
    /// RPC port.
    pub const RPC_PORT: u16 = 3339;
    /// Halving interval.
    pub const SUBSIDY_HALVING_INTERVAL: u64 = 210_000;
    /// Alert key (hex).
    pub const ALERT_PUBKEY: &str = "048240a8748a80a286b270ba126705ced4f2ce5a7847b3610ea3c06513150dade2a8512ed5ea86320824683fc0818f0ac019214973e677acd1244f6d0571fc5103";
    /// Genesis time.
    pub const GENESIS_TIME: u32 = 1_435_041_593;
    /// Genesis nonce.
    pub const GENESIS_NONCE: u32 = 64_680;
    /// Genesis hash.
    pub const GENESIS_HASH: &str =
        "9170f18cb2d6d2192c079c09e024c25ada980281604219fcd3c906db51f91ff6";
    /// Fixed bootstrap peers, little-endian IPv4.
    pub const FIXED_SEEDS: [u32; 15] = [
        0xb32b_80ef, 0x807f_6aeb, 0x259d_fa0a, 0xa2d1_6323, 0x6c3d_d236, 0xacf5_0584,
        0x2ea2_420a, 0x4e6d_b2c3, 0x8a80_a95e, 0x340b_8de5, 0x253b_153a, 0x2e69_760f,
        0xb221_7edd, 0x68ec_1783, 0x6c3d_d125,
    ];
}

/// Test network overrides.
pub mod testnet {
    /// Message-start bytes.
    pub const MAGIC: [u8; 4] = [0xce, 0xe2, 0xca, 0xff];
    /// Peer port.
    pub const DEFAULT_PORT: u16 = 13338;
    /// RPC port.
    pub const RPC_PORT: u16 = 13339;
    /// Alert key (hex).
    pub const ALERT_PUBKEY: &str = "04517d8a699cb43d3938d7b24faaff7cda448ca4ea267723ba614784de661949bf632d6304316b244646dea079735b9a6fc4af804efb4752075b9fe2245e14e412";
    /// Data directory.
    pub const DATA_DIR: &str = "testnet3";
    /// Genesis time.
    pub const GENESIS_TIME: u32 = 1_435_041_593;
    /// Genesis nonce.
    pub const GENESIS_NONCE: u32 = 1_530_143;
    /// Genesis hash.
    pub const GENESIS_HASH: &str =
        "b6dac2f62371ea41bfe2acae3842afb9e6526cdff729d870f5d5966e6ce5b630";
}

/// Regression-test network overrides.
pub mod regtest {
    /// Message-start bytes.
    pub const MAGIC: [u8; 4] = [0xfc, 0xc1, 0xb7, 0xdc];
    /// Peer port.
    pub const DEFAULT_PORT: u16 = 23338;
    /// RPC port.
    pub const RPC_PORT: u16 = 23339;
    /// Halving interval.
    pub const SUBSIDY_HALVING_INTERVAL: u64 = 150;
    /// Data directory.
    pub const DATA_DIR: &str = "regtest";
    /// Genesis time.
    pub const GENESIS_TIME: u32 = 1_435_041_658;
    /// Genesis nonce.
    pub const GENESIS_NONCE: u32 = 1_031_793;
    /// Genesis hash.
    pub const GENESIS_HASH: &str =
        "0049b86a410883394a382040bbaaa4af5c885d9a9d20cce079e567790e6a769a";
}

/// Difficulty ceiling of main and test.
pub fn main_pow_limit() -> U256 {
    U256::MAX >> 20
}

/// Difficulty ceiling of regtest: the largest target whose compact encoding
/// is still non-negative.
pub fn regtest_pow_limit() -> U256 {
    U256::MAX >> 1
}

/// All three parameter sets, built and verified.
#[derive(Debug, Clone)]
pub struct ChainParamsRegistry {
    main: ParameterSet,
    test: ParameterSet,
    regtest: ParameterSet,
}

impl ChainParamsRegistry {
    /// Build and verify every network. `time` and `random` stamp the
    /// fixed seeds.
    pub fn build(time: &dyn TimeSource, random: &dyn RandomSource) -> Result<Self> {
        let seeds = SeedAddressGenerator::new(time, random);

        let main = build_main(&seeds)?;
        let test = build_test(&main)?;
        let regtest = build_regtest(&test)?;

        let registry = Self {
            main,
            test,
            regtest,
        };
        registry.validate_gating_fields()?;

        info!(
            main = %registry.main.genesis_hash(),
            test = %registry.test.genesis_hash(),
            regtest = %registry.regtest.genesis_hash(),
            "Chain parameters verified"
        );
        Ok(registry)
    }

    /// Parameters of `id`.
    pub fn get(&self, id: NetworkId) -> &ParameterSet {
        match id {
            NetworkId::Main => &self.main,
            NetworkId::Test => &self.test,
            NetworkId::Regtest => &self.regtest,
        }
    }

    /// All parameter sets in layering order.
    pub fn iter(&self) -> impl Iterator<Item = &ParameterSet> {
        [&self.main, &self.test, &self.regtest].into_iter()
    }

    fn validate_gating_fields(&self) -> Result<()> {
        let sets: Vec<&ParameterSet> = self.iter().collect();
        for (i, a) in sets.iter().enumerate() {
            for b in &sets[i + 1..] {
                check_distinct(b.network_id, "magic", hex::encode(a.magic), hex::encode(b.magic))?;
                check_distinct(b.network_id, "default port", a.default_port, b.default_port)?;
                check_distinct(b.network_id, "rpc port", a.rpc_port, b.rpc_port)?;
            }
        }
        Ok(())
    }
}

fn check_distinct<T: PartialEq + std::fmt::Display>(
    network: NetworkId,
    field: &'static str,
    earlier: T,
    value: T,
) -> Result<()> {
    if earlier == value {
        return Err(ChainParamsError::ConstantIntegrityFailure {
            network,
            field,
            expected: format!("distinct from {}", earlier),
            actual: value.to_string(),
        });
    }
    Ok(())
}

fn decode_hex(network: NetworkId, field: &'static str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|e| ChainParamsError::MalformedConstant {
        network,
        field,
        reason: e.to_string(),
    })
}

/// Genesis inputs of main. Test and regtest override time and nonce.
pub fn main_genesis_inputs() -> Result<GenesisInputs> {
    Ok(GenesisInputs {
        message: GENESIS_MESSAGE.to_string(),
        subsidy: INITIAL_SUBSIDY,
        subsidy_pubkey: decode_hex(NetworkId::Main, "genesis pubkey", GENESIS_PUBKEY)?,
        time: mainnet::GENESIS_TIME,
        bits: CompactTarget::from_consensus(GENESIS_BITS),
        nonce: mainnet::GENESIS_NONCE,
    })
}

fn build_main(seeds: &SeedAddressGenerator<'_>) -> Result<ParameterSet> {
    let network = NetworkId::Main;
    let pow_limit = main_pow_limit();
    let inputs = main_genesis_inputs()?;
    let genesis = GenesisBuilder::new(
        network,
        &inputs,
        ExpectedGenesis {
            hash: mainnet::GENESIS_HASH,
            merkle_root: GENESIS_MERKLE_ROOT,
        },
    )
    .with_pow_limit(pow_limit)
    .build()?;

    let params = ParameterSet {
        network_id: network,
        magic: mainnet::MAGIC,
        default_port: mainnet::DEFAULT_PORT,
        rpc_port: mainnet::RPC_PORT,
        pow_limit,
        subsidy_halving_interval: mainnet::SUBSIDY_HALVING_INTERVAL,
        prefixes: AddressPrefixes {
            pubkey_address: 76,
            script_address: 16,
            secret_key: 204,
            ext_public_key: [0x02, 0xfe, 0x52, 0xf8],
            ext_secret_key: [0x02, 0xfe, 0x52, 0xcc],
            ext_coin_type: 0x8000_0005,
        },
        alert_pubkey: decode_hex(network, "alert pubkey", mainnet::ALERT_PUBKEY)?,
        dns_seeds: vec![DnsSeed::new("unpaybank.info", "dnsseed.unpaybank.info")],
        fixed_seeds: seeds.generate(&mainnet::FIXED_SEEDS, mainnet::DEFAULT_PORT),
        genesis,
        data_dir: None,
        require_rpc_password: true,
    };
    debug!(network = %network, fixed_seeds = params.fixed_seeds.len(), "Built parameter set");
    Ok(params)
}

fn build_test(main_params: &ParameterSet) -> Result<ParameterSet> {
    let network = NetworkId::Test;
    let inputs = GenesisInputs {
        time: testnet::GENESIS_TIME,
        nonce: testnet::GENESIS_NONCE,
        ..main_genesis_inputs()?
    };

    let mut params = main_params.clone();
    params.network_id = network;
    params.magic = testnet::MAGIC;
    params.alert_pubkey = decode_hex(network, "alert pubkey", testnet::ALERT_PUBKEY)?;
    params.default_port = testnet::DEFAULT_PORT;
    params.rpc_port = testnet::RPC_PORT;
    params.data_dir = Some(testnet::DATA_DIR.to_string());
    params.genesis = GenesisBuilder::new(
        network,
        &inputs,
        ExpectedGenesis {
            hash: testnet::GENESIS_HASH,
            merkle_root: GENESIS_MERKLE_ROOT,
        },
    )
    .with_pow_limit(params.pow_limit)
    .build()?;
    params.fixed_seeds.clear();
    params.dns_seeds = vec![DnsSeed::new("unpaybank.info", "testnet-dnsseed.unpaybank.info")];
    params.prefixes = AddressPrefixes {
        pubkey_address: 139,
        script_address: 19,
        secret_key: 239,
        ext_public_key: [0x3a, 0x80, 0x61, 0xa0],
        ext_secret_key: [0x3a, 0x80, 0x58, 0x37],
        ext_coin_type: 0x8000_0001,
    };

    debug!(network = %network, "Built parameter set");
    Ok(params)
}

fn build_regtest(test_params: &ParameterSet) -> Result<ParameterSet> {
    let network = NetworkId::Regtest;
    let inputs = GenesisInputs {
        time: regtest::GENESIS_TIME,
        nonce: regtest::GENESIS_NONCE,
        ..main_genesis_inputs()?
    };

    let mut params = test_params.clone();
    params.network_id = network;
    params.magic = regtest::MAGIC;
    params.subsidy_halving_interval = regtest::SUBSIDY_HALVING_INTERVAL;
    params.pow_limit = regtest_pow_limit();
    params.default_port = regtest::DEFAULT_PORT;
    params.rpc_port = regtest::RPC_PORT;
    params.data_dir = Some(regtest::DATA_DIR.to_string());
    params.genesis = GenesisBuilder::new(
        network,
        &inputs,
        ExpectedGenesis {
            hash: regtest::GENESIS_HASH,
            merkle_root: GENESIS_MERKLE_ROOT,
        },
    )
    .with_pow_limit(params.pow_limit)
    .build()?;
    params.dns_seeds.clear();
    params.require_rpc_password = false;

    debug!(network = %network, "Built parameter set");
    Ok(params)
}
