//! # Canonical Consensus Encoding
//!
//! Byte layout used for hashing and for the wire: little-endian integers,
//! raw 32-byte hashes in internal order, and CompactSize length prefixes.

/// A value with a canonical consensus serialization.
pub trait Encodable {
    /// Append the canonical encoding of `self` to `out`.
    fn consensus_encode(&self, out: &mut Vec<u8>);
}

/// Serialize a value into a fresh buffer.
pub fn serialize<T: Encodable + ?Sized>(value: &T) -> Vec<u8> {
    let mut out = Vec::new();
    value.consensus_encode(&mut out);
    out
}

/// Append a CompactSize unsigned integer.
///
/// | Value | Encoding |
/// |-------|----------|
/// | `< 0xfd` | 1 byte |
/// | `<= 0xffff` | `0xfd` + u16 LE |
/// | `<= 0xffff_ffff` | `0xfe` + u32 LE |
/// | otherwise | `0xff` + u64 LE |
pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

/// Append a length-prefixed byte string.
pub fn write_var_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    write_compact_size(out, bytes.len() as u64);
    out.extend_from_slice(bytes);
}

impl<T: Encodable> Encodable for [T] {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        write_compact_size(out, self.len() as u64);
        for item in self {
            item.consensus_encode(out);
        }
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.as_slice().consensus_encode(out);
    }
}
