//! # Core Wire Entities
//!
//! ## Clusters
//!
//! - **Identifiers**: [`Hash256`]
//! - **Transactions**: [`OutPoint`], [`TxIn`], [`TxOut`], [`Transaction`]
//! - **Blocks**: [`BlockHeader`], [`Block`]

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use shared_crypto::{digest_from_slice, sha256d, Digest256};

use crate::encoding::{write_var_bytes, Encodable};
use crate::{serialize, CompactTarget, Script, TypeError};

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

/// Base units per coin.
pub const COIN: i64 = 100_000_000;

/// Amount in base units.
pub type Amount = i64;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// A 256-bit hash in internal byte order.
///
/// `Display`/`FromStr` use the reversed-byte hex convention, so the genesis
/// hash of a network renders the way block explorers and RPC show it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash256(Digest256);

impl Hash256 {
    /// The null hash (all zero bytes).
    pub const ZERO: Hash256 = Hash256([0u8; 32]);

    /// Wrap internal-order bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Double SHA-256 of `data`.
    pub fn sha256d(data: &[u8]) -> Self {
        Self(sha256d(data))
    }

    /// Internal-order bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check for the null hash.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Parse display-order hex (optionally `0x` prefixed).
    pub fn from_display_hex(s: &str) -> Result<Self, TypeError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = hex::decode(s)?;
        bytes.reverse();
        Ok(Self(digest_from_slice(&bytes)?))
    }

    /// Render as display-order hex.
    pub fn to_display_hex(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        hex::encode(bytes)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_hex())
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_display_hex())
    }
}

impl FromStr for Hash256 {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_display_hex(s)
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Encodable for Hash256 {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.0);
    }
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

/// Reference to a previous transaction output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutPoint {
    /// Id of the transaction holding the output.
    pub txid: Hash256,
    /// Output index.
    pub vout: u32,
}

impl OutPoint {
    /// The null outpoint spent by coinbase inputs.
    pub const fn null() -> Self {
        Self {
            txid: Hash256::ZERO,
            vout: u32::MAX,
        }
    }

    /// Check for the null outpoint.
    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

impl Encodable for OutPoint {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.txid.consensus_encode(out);
        out.extend_from_slice(&self.vout.to_le_bytes());
    }
}

/// Transaction input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxIn {
    /// Output being spent.
    pub previous_output: OutPoint,
    /// Unlocking script (arbitrary payload for coinbase).
    pub script_sig: Script,
    /// Sequence number.
    pub sequence: u32,
}

impl Encodable for TxIn {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.previous_output.consensus_encode(out);
        write_var_bytes(out, self.script_sig.as_bytes());
        out.extend_from_slice(&self.sequence.to_le_bytes());
    }
}

/// Transaction output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOut {
    /// Value in base units.
    pub value: Amount,
    /// Locking script.
    pub script_pubkey: Script,
}

impl Encodable for TxOut {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.value.to_le_bytes());
        write_var_bytes(out, self.script_pubkey.as_bytes());
    }
}

/// A transaction in canonical (non-witness) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction format version.
    pub version: i32,
    /// Inputs.
    pub inputs: Vec<TxIn>,
    /// Outputs.
    pub outputs: Vec<TxOut>,
    /// Lock time.
    pub lock_time: u32,
}

impl Transaction {
    /// Transaction id: double SHA-256 of the canonical encoding.
    pub fn txid(&self) -> Hash256 {
        Hash256::sha256d(&serialize(self))
    }

    /// A coinbase has exactly one input spending the null outpoint.
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
    }
}

impl Encodable for Transaction {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        self.inputs.consensus_encode(out);
        self.outputs.consensus_encode(out);
        out.extend_from_slice(&self.lock_time.to_le_bytes());
    }
}

// =============================================================================
// BLOCKS
// =============================================================================

/// Serialized header length in bytes.
pub const BLOCK_HEADER_SIZE: usize = 80;

/// The 80-byte block header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    /// Block format version.
    pub version: i32,
    /// Hash of the parent block (null for genesis).
    pub prev_blockhash: Hash256,
    /// Merkle root over the block's transaction ids.
    pub merkle_root: Hash256,
    /// Unix timestamp in seconds.
    pub time: u32,
    /// Compact difficulty target.
    pub bits: CompactTarget,
    /// Proof-of-work nonce.
    pub nonce: u32,
}

impl BlockHeader {
    /// Block identity hash: double SHA-256 of the 80-byte header.
    pub fn block_hash(&self) -> Hash256 {
        Hash256::sha256d(&serialize(self))
    }
}

impl Encodable for BlockHeader {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        self.prev_blockhash.consensus_encode(out);
        self.merkle_root.consensus_encode(out);
        out.extend_from_slice(&self.time.to_le_bytes());
        out.extend_from_slice(&self.bits.to_consensus().to_le_bytes());
        out.extend_from_slice(&self.nonce.to_le_bytes());
    }
}

/// A full block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Header.
    pub header: BlockHeader,
    /// Transactions, coinbase first.
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Identity hash of the block (its header hash).
    pub fn block_hash(&self) -> Hash256 {
        self.header.block_hash()
    }

    /// Ids of all transactions, in block order.
    pub fn txids(&self) -> Vec<Hash256> {
        self.transactions.iter().map(Transaction::txid).collect()
    }
}

impl Encodable for Block {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.header.consensus_encode(out);
        self.transactions.consensus_encode(out);
    }
}
