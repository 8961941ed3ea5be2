//! Merkle tree over transaction ids
//!
//! Pairs are concatenated and double-hashed level by level. An odd trailing
//! node is paired with itself. A single leaf is its own root, and that case
//! runs through the same loop as every other size.

use shared_crypto::sha256d_concat;
use shared_types::Hash256;

/// Result of a Merkle computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MerkleRoot {
    /// Root hash (null for an empty list)
    pub root: Hash256,
    /// True if some level contained two identical adjacent hashes, which
    /// lets a different transaction list produce the same root
    pub mutated: bool,
}

/// Compute the Merkle root of `leaves`.
pub fn compute_merkle_root(leaves: &[Hash256]) -> MerkleRoot {
    if leaves.is_empty() {
        return MerkleRoot {
            root: Hash256::ZERO,
            mutated: false,
        };
    }

    let mut level: Vec<Hash256> = leaves.to_vec();
    let mut mutated = false;

    while level.len() > 1 {
        let mut next = Vec::with_capacity((level.len() + 1) / 2);
        for pair in level.chunks(2) {
            let left = &pair[0];
            let right = pair.get(1).unwrap_or(left);
            if pair.len() == 2 && left == right {
                mutated = true;
            }
            next.push(Hash256::from_bytes(sha256d_concat(
                left.as_bytes(),
                right.as_bytes(),
            )));
        }
        level = next;
    }

    MerkleRoot {
        root: level[0],
        mutated,
    }
}
