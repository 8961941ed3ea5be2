//! Genesis Block Creation
//!
//! Builds the genesis block of a network from its fixed inputs and checks the
//! result against the hardcoded hash and Merkle root of that network.
//!
//! ## Pipeline
//!
//! 1. Coinbase: one null-outpoint input whose script carries the sentinel
//!    integer, the script number 4 and the message bytes; one
//!    pay-to-public-key output carrying the subsidy
//! 2. Transaction id: double SHA-256 of the canonical encoding
//! 3. Merkle root over the single transaction id
//! 4. Header: version 1, null parent, root, time, bits, nonce
//! 5. Block hash: double SHA-256 of the 80-byte header
//!
//! The check in [`GenesisBuilder::build`] is the executable definition of
//! each network's identity. A mismatch is a fatal startup error.

use primitive_types::U256;
use shared_types::{
    Amount, Block, BlockHeader, CompactTarget, Hash256, OutPoint, Script, ScriptBuilder,
    Transaction, TxIn, TxOut,
};
use tracing::{debug, error};

use crate::domain::merkle::compute_merkle_root;
use crate::domain::NetworkId;
use crate::{ChainParamsError, Result};

/// Leading integer of the genesis coinbase script. Carried over verbatim;
/// it has no meaning inside this crate beyond being hashed.
pub const COINBASE_SENTINEL: i64 = 486_604_799;

/// Script number pushed after the sentinel.
pub const COINBASE_SCRIPT_NUM: i64 = 4;

/// Header version of every genesis block.
pub const GENESIS_VERSION: i32 = 1;

/// Inputs that fully determine a genesis block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisInputs {
    /// Message embedded in the coinbase script.
    pub message: String,
    /// Value of the single coinbase output.
    pub subsidy: Amount,
    /// Public key paid by the coinbase output (uncompressed SEC1).
    pub subsidy_pubkey: Vec<u8>,
    /// Header timestamp (Unix seconds).
    pub time: u32,
    /// Header compact difficulty target.
    pub bits: CompactTarget,
    /// Header nonce, precomputed offline.
    pub nonce: u32,
}

/// Hardcoded identity of a network's genesis block, in display hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedGenesis {
    /// Block hash.
    pub hash: &'static str,
    /// Merkle root.
    pub merkle_root: &'static str,
}

/// A genesis block together with its identity hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisBlock {
    block: Block,
    hash: Hash256,
}

impl GenesisBlock {
    /// The full block.
    pub fn block(&self) -> &Block {
        &self.block
    }

    /// The header.
    pub fn header(&self) -> &BlockHeader {
        &self.block.header
    }

    /// The single coinbase transaction.
    pub fn coinbase(&self) -> &Transaction {
        &self.block.transactions[0]
    }

    /// Block identity hash.
    pub fn hash(&self) -> Hash256 {
        self.hash
    }

    /// Merkle root committed in the header.
    pub fn merkle_root(&self) -> Hash256 {
        self.block.header.merkle_root
    }
}

/// Build the genesis coinbase transaction.
pub fn create_genesis_coinbase(message: &[u8], subsidy: Amount, subsidy_pubkey: &[u8]) -> Transaction {
    let script_sig = ScriptBuilder::new()
        .push_int(COINBASE_SENTINEL)
        .push_script_num(COINBASE_SCRIPT_NUM)
        .push_slice(message)
        .into_script();

    Transaction {
        version: 1,
        inputs: vec![TxIn {
            previous_output: OutPoint::null(),
            script_sig,
            sequence: u32::MAX,
        }],
        outputs: vec![TxOut {
            value: subsidy,
            script_pubkey: Script::p2pk(subsidy_pubkey),
        }],
        lock_time: 0,
    }
}

/// Build a genesis block from its inputs. Pure and infallible; the identity
/// check is done by [`GenesisBuilder`].
pub fn build_genesis(inputs: &GenesisInputs) -> GenesisBlock {
    let coinbase = create_genesis_coinbase(
        inputs.message.as_bytes(),
        inputs.subsidy,
        &inputs.subsidy_pubkey,
    );
    let merkle = compute_merkle_root(&[coinbase.txid()]);

    let header = BlockHeader {
        version: GENESIS_VERSION,
        prev_blockhash: Hash256::ZERO,
        merkle_root: merkle.root,
        time: inputs.time,
        bits: inputs.bits,
        nonce: inputs.nonce,
    };

    GenesisBlock {
        hash: header.block_hash(),
        block: Block {
            header,
            transactions: vec![coinbase],
        },
    }
}

/// Builds a network's genesis block and refuses to return it unless it
/// matches the hardcoded identity.
pub struct GenesisBuilder<'a> {
    network: NetworkId,
    inputs: &'a GenesisInputs,
    expected: ExpectedGenesis,
    pow_limit: Option<U256>,
}

impl<'a> GenesisBuilder<'a> {
    /// Create a builder for `network`.
    pub fn new(network: NetworkId, inputs: &'a GenesisInputs, expected: ExpectedGenesis) -> Self {
        Self {
            network,
            inputs,
            expected,
            pow_limit: None,
        }
    }

    /// Also require the header bits to decode to a target no easier than
    /// `pow_limit`.
    pub fn with_pow_limit(mut self, pow_limit: U256) -> Self {
        self.pow_limit = Some(pow_limit);
        self
    }

    /// Build and verify the genesis block.
    pub fn build(self) -> Result<GenesisBlock> {
        let genesis = build_genesis(self.inputs);

        let expected_hash = self.parse_expected("genesis hash", self.expected.hash)?;
        let expected_root = self.parse_expected("merkle root", self.expected.merkle_root)?;

        debug!(
            network = %self.network,
            hash = %genesis.hash(),
            merkle_root = %genesis.merkle_root(),
            "Computed genesis block"
        );

        self.check("merkle root", expected_root, genesis.merkle_root())?;
        self.check("genesis hash", expected_hash, genesis.hash())?;

        if let Some(limit) = self.pow_limit {
            self.check_bits(genesis.header().bits, limit)?;
        }

        Ok(genesis)
    }

    fn parse_expected(&self, field: &'static str, hex: &str) -> Result<Hash256> {
        hex.parse::<Hash256>()
            .map_err(|e| ChainParamsError::MalformedConstant {
                network: self.network,
                field,
                reason: e.to_string(),
            })
    }

    fn check(&self, field: &'static str, expected: Hash256, actual: Hash256) -> Result<()> {
        if expected == actual {
            return Ok(());
        }
        error!(
            network = %self.network,
            field,
            %expected,
            %actual,
            "Genesis self-check failed"
        );
        Err(ChainParamsError::ConstantIntegrityFailure {
            network: self.network,
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }

    fn check_bits(&self, bits: CompactTarget, limit: U256) -> Result<()> {
        let target = bits
            .to_target()
            .map_err(|e| ChainParamsError::MalformedConstant {
                network: self.network,
                field: "genesis bits",
                reason: e.to_string(),
            })?;
        if target > limit {
            return Err(ChainParamsError::ConstantIntegrityFailure {
                network: self.network,
                field: "genesis bits",
                expected: format!("target <= {:#x}", limit),
                actual: format!("{:#x}", target),
            });
        }
        Ok(())
    }
}
