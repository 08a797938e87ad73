//! Raw digest engines.
//!
//! An engine turns one contiguous byte buffer into a digest under an already
//! resolved algorithm. Field concatenation and the `UNKNOWN` fallback live in
//! [`crate::hash::DigestCombiner`], so engines stay trivial to swap for a
//! host provider.

use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::algorithm::HashAlgorithm;

/// A stateless digest primitive.
///
/// Implementations must be safe to call concurrently; the combiner shares a
/// single engine between every computation.
pub trait DigestEngine: Send + Sync {
    /// Digest `data` under `algorithm`.
    ///
    /// The combiner never passes [`HashAlgorithm::Unknown`].
    fn raw_digest(&self, data: &[u8], algorithm: HashAlgorithm) -> Vec<u8>;
}

/// Engine backed by the RustCrypto `sha1` and `sha2` crates.
///
/// Each call builds a fresh hasher, so there is no shared state to guard.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoEngine;

impl DigestEngine for RustCryptoEngine {
    fn raw_digest(&self, data: &[u8], algorithm: HashAlgorithm) -> Vec<u8> {
        match algorithm {
            HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
            // Unknown is resolved upstream; SHA-256 keeps this total.
            HashAlgorithm::Sha256 | HashAlgorithm::Unknown => Sha256::digest(data).to_vec(),
        }
    }
}

impl<E: DigestEngine + ?Sized> DigestEngine for &E {
    fn raw_digest(&self, data: &[u8], algorithm: HashAlgorithm) -> Vec<u8> {
        (**self).raw_digest(data, algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_vector() {
        let digest = RustCryptoEngine.raw_digest(b"hello", HashAlgorithm::Sha256);
        assert_eq!(
            hex::encode(digest),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_sha1_vector() {
        let digest = RustCryptoEngine.raw_digest(b"abc", HashAlgorithm::Sha1);
        assert_eq!(hex::encode(digest), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_output_lengths_match_algorithm() {
        for algorithm in HashAlgorithm::SUPPORTED {
            let digest = RustCryptoEngine.raw_digest(b"data", algorithm);
            assert_eq!(Some(digest.len()), algorithm.output_len(), "{}", algorithm);
        }
    }
}
