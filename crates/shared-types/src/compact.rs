//! # Compact Difficulty Target ("nBits")
//!
//! 32-bit floating encoding of a 256-bit target: the high byte is a base-256
//! exponent, the low 23 bits a mantissa, bit 23 a sign flag.
//!
//! **IMPORTANT**: the target is a CEILING. A higher target is easier.

use std::fmt;

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::TypeError;

/// Compact encoding of a proof-of-work target.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompactTarget(u32);

impl CompactTarget {
    /// Wrap a raw consensus value.
    pub const fn from_consensus(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw consensus value.
    pub const fn to_consensus(self) -> u32 {
        self.0
    }

    /// Expand to the full 256-bit target.
    pub fn to_target(self) -> Result<U256, TypeError> {
        let bits = self.0;
        let size = bits >> 24;
        let word = bits & 0x007f_ffff;

        if word != 0 && bits & 0x0080_0000 != 0 {
            return Err(TypeError::NegativeTarget(bits));
        }
        if word != 0 && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32)) {
            return Err(TypeError::TargetOverflow(bits));
        }

        let target = if size <= 3 {
            U256::from(word >> (8 * (3 - size)))
        } else {
            U256::from(word) << (8 * (size - 3)) as usize
        };
        Ok(target)
    }

    /// Compress a 256-bit target, truncating to a 23-bit mantissa.
    pub fn from_target(target: U256) -> Self {
        let mut size = (target.bits() as u32 + 7) / 8;
        let mut compact = if size <= 3 {
            target.low_u32() << (8 * (3 - size))
        } else {
            (target >> (8 * (size - 3)) as usize).low_u32()
        };

        // Keep the mantissa positive.
        if compact & 0x0080_0000 != 0 {
            compact >>= 8;
            size += 1;
        }
        Self(compact | (size << 24))
    }
}

impl fmt::Debug for CompactTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompactTarget({:#010x})", self.0)
    }
}

impl fmt::Display for CompactTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
