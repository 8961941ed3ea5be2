//! # SHA-256 Hashing
//!
//! Single and double SHA-256 as used for every identifier on the wire.
//!
//! Digests are returned in internal byte order (the order the hash function
//! produces them). Display code is responsible for reversing them.

use sha2::{Digest, Sha256};

use crate::CryptoError;

/// SHA-256 output (256-bit), internal byte order.
pub type Digest256 = [u8; 32];

/// Streaming double SHA-256 hasher.
///
/// Feeds the first round incrementally and applies the second round on
/// `finalize`.
#[derive(Clone, Default)]
pub struct Sha256dHasher {
    inner: Sha256,
}

impl Sha256dHasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Sha256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return `SHA256(SHA256(data))`.
    pub fn finalize(self) -> Digest256 {
        let first = self.inner.finalize();
        Sha256::digest(first).into()
    }
}

/// Compute SHA-256 of data (one-shot).
#[inline]
pub fn sha256(data: &[u8]) -> Digest256 {
    Sha256::digest(data).into()
}

/// Compute double SHA-256 of data.
#[inline]
pub fn sha256d(data: &[u8]) -> Digest256 {
    sha256(&sha256(data))
}

/// Double SHA-256 of two digests concatenated (Merkle interior node).
#[inline]
pub fn sha256d_concat(left: &Digest256, right: &Digest256) -> Digest256 {
    let mut hasher = Sha256dHasher::new();
    hasher.update(left).update(right);
    hasher.finalize()
}

/// Copy a 32-byte slice into a digest.
pub fn digest_from_slice(bytes: &[u8]) -> Result<Digest256, CryptoError> {
    bytes
        .try_into()
        .map_err(|_| CryptoError::InvalidDigestLength {
            expected: 32,
            actual: bytes.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_empty_vector() {
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256d_known_vector() {
        // SHA256(SHA256("hello"))
        assert_eq!(
            hex::encode(sha256d(b"hello")),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    #[test]
    fn test_sha256d_is_two_rounds() {
        let data = b"test";
        assert_eq!(sha256d(data), sha256(&sha256(data)));
    }

    #[test]
    fn test_streaming_matches_oneshot() {
        let mut hasher = Sha256dHasher::new();
        hasher.update(b"hello ").update(b"world");
        assert_eq!(hasher.finalize(), sha256d(b"hello world"));
    }

    #[test]
    fn test_concat_matches_buffer() {
        let left = [0x11u8; 32];
        let right = [0x22u8; 32];
        let mut buf = Vec::with_capacity(64);
        buf.extend_from_slice(&left);
        buf.extend_from_slice(&right);
        assert_eq!(sha256d_concat(&left, &right), sha256d(&buf));
    }

    #[test]
    fn test_digest_from_slice_length() {
        assert!(digest_from_slice(&[0u8; 32]).is_ok());
        assert_eq!(
            digest_from_slice(&[0u8; 31]),
            Err(CryptoError::InvalidDigestLength {
                expected: 32,
                actual: 31
            })
        );
    }
}
