//! # Script Builder
//!
//! Just enough script construction for coinbase payloads and
//! pay-to-public-key outputs. There is no interpreter here.

use std::fmt;

/// Opcodes used by the builder.
pub mod opcodes {
    /// Push an empty array.
    pub const OP_0: u8 = 0x00;
    /// Next byte is the push length.
    pub const OP_PUSHDATA1: u8 = 0x4c;
    /// Next two bytes (LE) are the push length.
    pub const OP_PUSHDATA2: u8 = 0x4d;
    /// Next four bytes (LE) are the push length.
    pub const OP_PUSHDATA4: u8 = 0x4e;
    /// Push the number -1.
    pub const OP_1NEGATE: u8 = 0x4f;
    /// Push the number 1. `OP_2..OP_16` follow contiguously.
    pub const OP_1: u8 = 0x51;
    /// Push the number 16.
    pub const OP_16: u8 = 0x60;
    /// Check a signature against the public key on the stack.
    pub const OP_CHECKSIG: u8 = 0xac;
}

use opcodes::*;

/// Raw script bytes.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Script(Vec<u8>);

impl Script {
    /// Wrap raw script bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Script bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for an empty script.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pay-to-public-key script: `<pubkey> OP_CHECKSIG`.
    pub fn p2pk(pubkey: &[u8]) -> Self {
        ScriptBuilder::new()
            .push_slice(pubkey)
            .push_opcode(OP_CHECKSIG)
            .into_script()
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", hex::encode(&self.0))
    }
}

/// Incremental script construction.
#[derive(Debug, Clone, Default)]
pub struct ScriptBuilder {
    bytes: Vec<u8>,
}

impl ScriptBuilder {
    /// Start an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw opcode.
    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.bytes.push(opcode);
        self
    }

    /// Push an integer, using the small-integer opcodes for -1 and 0..=16.
    pub fn push_int(self, n: i64) -> Self {
        match n {
            -1 => self.push_opcode(OP_1NEGATE),
            0 => self.push_opcode(OP_0),
            1..=16 => self.push_opcode(OP_1 + (n as u8) - 1),
            _ => self.push_slice(&encode_script_num(n)),
        }
    }

    /// Push an integer as a minimally encoded script number, never as a
    /// small-integer opcode.
    pub fn push_script_num(self, n: i64) -> Self {
        self.push_slice(&encode_script_num(n))
    }

    /// Push data with the shortest length prefix that fits.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.bytes.push(len as u8);
        } else if len <= 0xff {
            self.bytes.push(OP_PUSHDATA1);
            self.bytes.push(len as u8);
        } else if len <= 0xffff {
            self.bytes.push(OP_PUSHDATA2);
            self.bytes.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.bytes.push(OP_PUSHDATA4);
            self.bytes.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.bytes.extend_from_slice(data);
        self
    }

    /// Finish the script.
    pub fn into_script(self) -> Script {
        Script(self.bytes)
    }
}

/// Minimal little-endian sign-magnitude encoding of a script number.
pub fn encode_script_num(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }

    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // Top bit of the last byte is the sign bit.
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}
