//! Blocks: Merkle aggregation of transactions, chained by digest.

use serde::Serialize;
use tracing::debug;

use crate::algorithm::HashAlgorithm;
use crate::clock::current_timestamp_millis;
use crate::difficulty::meets_difficulty;
use crate::engine::DigestEngine;
use crate::hash::{DigestCombiner, Field, Hash};
use crate::transaction::Transaction;

/// A sealed block.
///
/// The hash covers `previous_block_hash || merkle_root || tries || timestamp`,
/// with both integers as 8 big-endian bytes. A genesis block has no
/// predecessor and contributes zero bytes in that position. `data` is an
/// annotation only and is not hashed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    previous_block_hash: Option<Hash>,
    transactions: Vec<Transaction>,
    tries: u64,
    timestamp: i64,
    merkle_root: Hash,
    hash: Hash,
    data: String,
    algorithm: HashAlgorithm,
}

impl Block {
    /// Seal a block stamped with the current time under the default
    /// SHA-256 combiner.
    pub fn new(
        previous_block_hash: Option<Hash>,
        transactions: Vec<Transaction>,
        tries: u64,
    ) -> Self {
        BlockDraft {
            previous_block_hash,
            transactions,
            tries,
            ..BlockDraft::default()
        }
        .seal(&DigestCombiner::new())
    }

    fn compute_hash<E: DigestEngine>(
        combiner: &DigestCombiner<E>,
        previous_block_hash: Option<&Hash>,
        merkle_root: &Hash,
        tries: u64,
        timestamp: i64,
        algorithm: HashAlgorithm,
    ) -> Hash {
        let previous = previous_block_hash.map(Hash::as_bytes).unwrap_or(&[]);
        combiner.digest_with(
            &[
                Field::from(previous),
                Field::from(merkle_root),
                Field::from(tries),
                Field::from(timestamp),
            ],
            algorithm,
        )
    }

    fn leaf_hashes(transactions: &[Transaction]) -> Vec<Hash> {
        transactions.iter().map(|tx| tx.hash().clone()).collect()
    }

    /// Re-seal with a different `tries` value.
    ///
    /// Everything else, the timestamp included, is kept, so the Merkle root is
    /// reused and only the block hash changes. This is the step a miner
    /// repeats; the search itself is not provided here.
    pub fn with_tries<E: DigestEngine>(&self, tries: u64, combiner: &DigestCombiner<E>) -> Block {
        let hash = Self::compute_hash(
            combiner,
            self.previous_block_hash.as_ref(),
            &self.merkle_root,
            tries,
            self.timestamp,
            self.algorithm,
        );

        Block {
            tries,
            hash,
            ..self.clone()
        }
    }

    /// Number of leading zero bytes in the block hash.
    pub fn leading_zeros_count(&self) -> usize {
        self.hash.leading_zero_bytes()
    }

    /// Whether the block hash starts with at least `min_zero_bytes` zero bytes.
    pub fn meets_difficulty(&self, min_zero_bytes: usize) -> bool {
        meets_difficulty(self.hash.as_bytes(), min_zero_bytes)
    }

    pub fn is_genesis(&self) -> bool {
        self.previous_block_hash.is_none()
    }

    /// Whether this block names `previous` as its predecessor.
    pub fn links_to(&self, previous: &Block) -> bool {
        self.previous_block_hash.as_ref() == Some(&previous.hash)
    }

    /// Recompute the Merkle root and hash and compare them with the stored ones.
    pub fn verify<E: DigestEngine>(&self, combiner: &DigestCombiner<E>) -> bool {
        let merkle_root =
            combiner.merkle_root_with(&Self::leaf_hashes(&self.transactions), self.algorithm);
        if merkle_root != self.merkle_root {
            return false;
        }

        let hash = Self::compute_hash(
            combiner,
            self.previous_block_hash.as_ref(),
            &merkle_root,
            self.tries,
            self.timestamp,
            self.algorithm,
        );
        hash == self.hash
    }

    pub fn previous_block_hash(&self) -> Option<&Hash> {
        self.previous_block_hash.as_ref()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn tries(&self) -> u64 {
        self.tries
    }

    /// Seal time in milliseconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn merkle_root(&self) -> &Hash {
        &self.merkle_root
    }

    pub fn hash(&self) -> &Hash {
        &self.hash
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }
}

/// A block under assembly.
///
/// Transactions can be added and fields adjusted freely; nothing is hashed
/// until [`BlockDraft::seal`] produces an immutable [`Block`].
#[derive(Debug, Clone, Default)]
pub struct BlockDraft {
    previous_block_hash: Option<Hash>,
    transactions: Vec<Transaction>,
    tries: u64,
    timestamp: Option<i64>,
    data: String,
    algorithm: Option<HashAlgorithm>,
}

impl BlockDraft {
    /// A draft with no predecessor.
    pub fn genesis() -> Self {
        Self::default()
    }

    /// A draft chained to the block whose hash is `previous_block_hash`.
    pub fn on_top_of(previous_block_hash: Hash) -> Self {
        Self {
            previous_block_hash: Some(previous_block_hash),
            ..Self::default()
        }
    }

    pub fn push_transaction(&mut self, transaction: Transaction) -> &mut Self {
        self.transactions.push(transaction);
        self
    }

    pub fn transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn tries(mut self, tries: u64) -> Self {
        self.tries = tries;
        self
    }

    /// Fix the timestamp instead of reading the clock at seal time.
    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    pub fn algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Compute the Merkle root and block hash and freeze the result.
    pub fn seal<E: DigestEngine>(self, combiner: &DigestCombiner<E>) -> Block {
        let algorithm = combiner.resolve(
            self.algorithm
                .unwrap_or_else(|| combiner.config().default_algorithm()),
        );
        let timestamp = self.timestamp.unwrap_or_else(current_timestamp_millis);
        // An empty predecessor hashes like an absent one, so it is genesis too.
        let previous_block_hash = self.previous_block_hash.filter(|h| !h.is_empty());

        let merkle_root =
            combiner.merkle_root_with(&Block::leaf_hashes(&self.transactions), algorithm);
        let hash = Block::compute_hash(
            combiner,
            previous_block_hash.as_ref(),
            &merkle_root,
            self.tries,
            timestamp,
            algorithm,
        );

        debug!(
            hash = %hash,
            merkle_root = %merkle_root,
            transactions = self.transactions.len(),
            tries = self.tries,
            genesis = previous_block_hash.is_none(),
            "sealed block"
        );

        Block {
            previous_block_hash,
            transactions: self.transactions,
            tries: self.tries,
            timestamp,
            merkle_root,
            hash,
            data: self.data,
            algorithm,
        }
    }
}
