//! Signed, self-identifying transactions.

use serde::Serialize;

use crate::algorithm::HashAlgorithm;
use crate::clock::current_timestamp_millis;
use crate::engine::DigestEngine;
use crate::error::{DigestError, Result};
use crate::hash::{DigestCombiner, Field, Hash};

/// A statement signed by a sender.
///
/// `hash = digest(text || sender_hash || signature || timestamp)` with the
/// timestamp as 8 big-endian bytes. The digest is computed once when the
/// transaction is built and the hashed fields cannot change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    text: String,
    sender_hash: Hash,
    #[serde(with = "hex::serde")]
    signature: Vec<u8>,
    timestamp: i64,
    algorithm: HashAlgorithm,
    hash: Hash,
}

impl Transaction {
    /// Create a transaction stamped with the current time, hashed under the
    /// default SHA-256 combiner.
    pub fn new(text: impl Into<String>, sender_hash: Hash, signature: impl Into<Vec<u8>>) -> Self {
        Self::assemble(
            &DigestCombiner::new(),
            text.into(),
            sender_hash,
            signature.into(),
            current_timestamp_millis(),
            HashAlgorithm::Unknown,
        )
    }

    pub fn builder() -> TransactionBuilder {
        TransactionBuilder::default()
    }

    fn assemble<E: DigestEngine>(
        combiner: &DigestCombiner<E>,
        text: String,
        sender_hash: Hash,
        signature: Vec<u8>,
        timestamp: i64,
        algorithm: HashAlgorithm,
    ) -> Self {
        let algorithm = combiner.resolve(algorithm);
        let hash =
            Self::compute_hash(combiner, &text, &sender_hash, &signature, timestamp, algorithm);

        Transaction {
            text,
            sender_hash,
            signature,
            timestamp,
            algorithm,
            hash,
        }
    }

    fn compute_hash<E: DigestEngine>(
        combiner: &DigestCombiner<E>,
        text: &str,
        sender_hash: &Hash,
        signature: &[u8],
        timestamp: i64,
        algorithm: HashAlgorithm,
    ) -> Hash {
        combiner.digest_with(
            &[
                Field::from(text),
                Field::from(sender_hash),
                Field::from(signature),
                Field::from(timestamp),
            ],
            algorithm,
        )
    }

    /// The bytes an external signer signs over: the raw text.
    pub fn signable_data(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender_hash(&self) -> &Hash {
        &self.sender_hash
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Creation time in milliseconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn hash(&self) -> &Hash {
        &self.hash
    }

    /// Recompute the digest and compare it with the stored one.
    pub fn verify<E: DigestEngine>(&self, combiner: &DigestCombiner<E>) -> bool {
        let recomputed = Self::compute_hash(
            combiner,
            &self.text,
            &self.sender_hash,
            &self.signature,
            self.timestamp,
            self.algorithm,
        );
        recomputed == self.hash
    }
}

/// Collects transaction fields before the digest is computed.
///
/// `text`, `sender_hash` and `signature` are required. Without an explicit
/// timestamp the current time is used; without an algorithm the combiner's
/// default is used.
#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder {
    text: Option<String>,
    sender_hash: Option<Hash>,
    signature: Option<Vec<u8>>,
    timestamp: Option<i64>,
    algorithm: Option<HashAlgorithm>,
}

impl TransactionBuilder {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn sender_hash(mut self, sender_hash: Hash) -> Self {
        self.sender_hash = Some(sender_hash);
        self
    }

    pub fn signature(mut self, signature: impl Into<Vec<u8>>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Validate the collected fields and compute the digest.
    pub fn build<E: DigestEngine>(self, combiner: &DigestCombiner<E>) -> Result<Transaction> {
        let text = self.text.ok_or(DigestError::MissingField("text"))?;
        let sender_hash = self.sender_hash.ok_or(DigestError::MissingField("sender_hash"))?;
        let signature = self.signature.ok_or(DigestError::MissingField("signature"))?;
        let timestamp = self.timestamp.unwrap_or_else(current_timestamp_millis);
        let algorithm = self
            .algorithm
            .unwrap_or_else(|| combiner.config().default_algorithm());

        Ok(Transaction::assemble(
            combiner,
            text,
            sender_hash,
            signature,
            timestamp,
            algorithm,
        ))
    }
}
