//! Content-addressed hashing and hash chaining.
//!
//! This crate provides pure Rust implementations of:
//! - Combining ordered binary fields into one digest (SHA-1, SHA-256,
//!   SHA-384, SHA-512) with a configurable fallback for unknown algorithms
//! - Merkle root reduction over ordered leaf digests
//! - Self-identifying addresses and transactions
//! - Blocks that aggregate transactions and chain to a predecessor by digest
//! - A leading-zero difficulty probe over block hashes

pub mod address;
pub mod algorithm;
pub mod block;
pub mod clock;
pub mod config;
pub mod difficulty;
pub mod engine;
pub mod error;
pub mod hash;
pub mod merkle;
pub mod transaction;

pub use address::Address;
pub use algorithm::HashAlgorithm;
pub use block::{Block, BlockDraft};
pub use config::DigestConfig;
pub use difficulty::{leading_zero_bytes, meets_difficulty};
pub use engine::{DigestEngine, RustCryptoEngine};
pub use error::{DigestError, Result};
pub use hash::{DigestCombiner, Field, Hash};
pub use merkle::compute_merkle_root;
pub use transaction::{Transaction, TransactionBuilder};
