//! Digest values and the field combiner.

use core::fmt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithm::HashAlgorithm;
use crate::config::DigestConfig;
use crate::difficulty::leading_zero_bytes;
use crate::engine::{DigestEngine, RustCryptoEngine};
use crate::error::{DigestError, Result};
use crate::merkle::compute_merkle_root;

/// An owned digest. Its length depends on the algorithm that produced it.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Hash(#[serde(with = "hex::serde")] Vec<u8>);

impl Hash {
    pub fn new(bytes: Vec<u8>) -> Self {
        Hash(bytes)
    }

    /// The empty-tree sentinel: `len` zero bytes.
    pub fn zero(len: usize) -> Self {
        Hash(vec![0u8; len])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of zero bytes before the first non-zero byte.
    pub fn leading_zero_bytes(&self) -> usize {
        leading_zero_bytes(&self.0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Hash(hex::decode(s)?))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Hash {
    fn from(bytes: Vec<u8>) -> Self {
        Hash(bytes)
    }
}

/// One positional input to [`DigestCombiner::digest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    /// Raw bytes, appended as-is.
    Bytes(&'a [u8]),
    /// A 64-bit integer, appended as 8 big-endian bytes.
    Int(i64),
}

impl Field<'_> {
    fn write_to(&self, buf: &mut Vec<u8>) {
        match self {
            Field::Bytes(bytes) => buf.extend_from_slice(bytes),
            Field::Int(value) => buf.extend_from_slice(&value.to_be_bytes()),
        }
    }

    fn encoded_len(&self) -> usize {
        match self {
            Field::Bytes(bytes) => bytes.len(),
            Field::Int(_) => 8,
        }
    }
}

impl<'a> From<&'a [u8]> for Field<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Field::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Field<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Field::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Field<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Field::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Field<'a> {
    fn from(text: &'a str) -> Self {
        Field::Bytes(text.as_bytes())
    }
}

impl<'a> From<&'a Hash> for Field<'a> {
    fn from(hash: &'a Hash) -> Self {
        Field::Bytes(hash.as_bytes())
    }
}

impl From<i64> for Field<'_> {
    fn from(value: i64) -> Self {
        Field::Int(value)
    }
}

// Reinterpreted, not converted: the eight bytes are identical either way.
impl From<u64> for Field<'_> {
    fn from(value: u64) -> Self {
        Field::Int(value as i64)
    }
}

/// Combines ordered fields into a single digest.
///
/// Fields are concatenated positionally, with no separators or length
/// prefixes, and the buffer is handed to the engine once. `UNKNOWN` resolves
/// to the configured default algorithm.
#[derive(Debug, Clone)]
pub struct DigestCombiner<E = RustCryptoEngine> {
    engine: E,
    config: DigestConfig,
}

impl DigestCombiner<RustCryptoEngine> {
    /// A RustCrypto-backed combiner with the SHA-256 fallback.
    pub fn new() -> Self {
        Self::with_config(DigestConfig::default())
    }

    /// A RustCrypto-backed combiner with a custom config.
    pub fn with_config(config: DigestConfig) -> Self {
        Self {
            engine: RustCryptoEngine,
            config,
        }
    }
}

impl Default for DigestCombiner<RustCryptoEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DigestEngine> DigestCombiner<E> {
    /// A combiner over an arbitrary engine.
    pub fn with_engine(engine: E, config: DigestConfig) -> Self {
        Self { engine, config }
    }

    pub fn config(&self) -> &DigestConfig {
        &self.config
    }

    /// The underlying digest provider.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Apply the fallback rule: `UNKNOWN` becomes the configured default.
    pub fn resolve(&self, algorithm: HashAlgorithm) -> HashAlgorithm {
        if algorithm.is_unknown() {
            let fallback = self.config.default_algorithm();
            debug!(%fallback, "unknown hash algorithm, using default");
            fallback
        } else {
            algorithm
        }
    }

    /// Digest `fields` under the configured default algorithm.
    pub fn digest(&self, fields: &[Field<'_>]) -> Hash {
        self.digest_with(fields, self.config.default_algorithm())
    }

    /// Digest `fields` under `algorithm`, falling back for `UNKNOWN`.
    pub fn digest_with(&self, fields: &[Field<'_>], algorithm: HashAlgorithm) -> Hash {
        let algorithm = self.resolve(algorithm);

        let mut buf = Vec::with_capacity(fields.iter().map(Field::encoded_len).sum());
        for field in fields {
            field.write_to(&mut buf);
        }

        Hash(self.engine.raw_digest(&buf, algorithm))
    }

    /// Like [`Self::digest_with`], but an absent algorithm is an error
    /// rather than a reason to fall back.
    pub fn try_digest_with(
        &self,
        fields: &[Field<'_>],
        algorithm: Option<HashAlgorithm>,
    ) -> Result<Hash> {
        let algorithm = algorithm.ok_or(DigestError::MissingAlgorithm)?;
        Ok(self.digest_with(fields, algorithm))
    }

    /// Merkle root of `leaves` under the configured default algorithm.
    pub fn merkle_root(&self, leaves: &[Hash]) -> Hash {
        compute_merkle_root(self, leaves, self.config.default_algorithm())
    }

    /// Merkle root of `leaves` under `algorithm`, falling back for `UNKNOWN`.
    pub fn merkle_root_with(&self, leaves: &[Hash], algorithm: HashAlgorithm) -> Hash {
        compute_merkle_root(self, leaves, algorithm)
    }

    /// Merkle root that rejects an absent algorithm.
    pub fn try_merkle_root_with(
        &self,
        leaves: &[Hash],
        algorithm: Option<HashAlgorithm>,
    ) -> Result<Hash> {
        let algorithm = algorithm.ok_or(DigestError::MissingAlgorithm)?;
        Ok(compute_merkle_root(self, leaves, algorithm))
    }
}
