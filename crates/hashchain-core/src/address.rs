//! Named public-key addresses.

use serde::Serialize;

use crate::algorithm::HashAlgorithm;
use crate::engine::DigestEngine;
use crate::hash::{DigestCombiner, Field, Hash};

/// An address: a display name bound to a public key encoding.
///
/// The identity digest is `digest(name || public_key)` and is fixed at
/// construction; there are no mutators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    name: String,
    #[serde(with = "hex::serde")]
    public_key: Vec<u8>,
    algorithm: HashAlgorithm,
    hash: Hash,
}

impl Address {
    /// Create an address under the default SHA-256 combiner.
    pub fn new(name: impl Into<String>, public_key: impl Into<Vec<u8>>) -> Self {
        Self::derive(name, public_key, &DigestCombiner::new(), HashAlgorithm::Unknown)
    }

    /// Create an address with an explicit combiner and algorithm.
    ///
    /// `Unknown` resolves to the combiner's default.
    pub fn derive<E: DigestEngine>(
        name: impl Into<String>,
        public_key: impl Into<Vec<u8>>,
        combiner: &DigestCombiner<E>,
        algorithm: HashAlgorithm,
    ) -> Self {
        let name = name.into();
        let public_key = public_key.into();
        let algorithm = combiner.resolve(algorithm);
        let hash = Self::compute_hash(combiner, &name, &public_key, algorithm);

        Address {
            name,
            public_key,
            algorithm,
            hash,
        }
    }

    fn compute_hash<E: DigestEngine>(
        combiner: &DigestCombiner<E>,
        name: &str,
        public_key: &[u8],
        algorithm: HashAlgorithm,
    ) -> Hash {
        combiner.digest_with(&[Field::from(name), Field::from(public_key)], algorithm)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn hash(&self) -> &Hash {
        &self.hash
    }

    /// Recompute the digest and compare it with the stored one.
    pub fn verify<E: DigestEngine>(&self, combiner: &DigestCombiner<E>) -> bool {
        Self::compute_hash(combiner, &self.name, &self.public_key, self.algorithm) == self.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_hash_is_name_then_key() {
        let combiner = DigestCombiner::new();
        let address = Address::new("alice", vec![0x04, 0xAA, 0xBB]);

        let expected = combiner.digest(&[Field::from("alice"), Field::from(&[0x04u8, 0xAA, 0xBB])]);
        assert_eq!(address.hash(), &expected);
        assert_eq!(address.algorithm(), HashAlgorithm::Sha256);
        assert!(address.verify(&combiner));
    }

    #[test]
    fn test_address_depends_on_both_fields() {
        let base = Address::new("alice", vec![1, 2, 3]);
        assert_ne!(base.hash(), Address::new("bob", vec![1, 2, 3]).hash());
        assert_ne!(base.hash(), Address::new("alice", vec![1, 2, 4]).hash());
    }

    #[test]
    fn test_address_with_explicit_algorithm() {
        let combiner = DigestCombiner::new();
        let address = Address::derive("carol", b"key".to_vec(), &combiner, HashAlgorithm::Sha512);
        assert_eq!(address.hash().len(), 64);
        assert_eq!(address.name(), "carol");
        assert_eq!(address.public_key(), b"key");
    }
}
