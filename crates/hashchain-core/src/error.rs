//! Error type shared by every module of the core.

use thiserror::Error;

/// Errors raised by digest computation and entity construction.
///
/// None of these are recoverable at runtime: they all describe a caller
/// that handed the core something it cannot work with.
#[derive(Debug, Error)]
pub enum DigestError {
    /// No algorithm was supplied where one is required.
    #[error("hash algorithm must be provided")]
    MissingAlgorithm,

    /// A builder was finished without one of its required fields.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// `UNKNOWN` cannot serve as the fallback target.
    #[error("UNKNOWN cannot be used as the default hash algorithm")]
    UnknownDefault,

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, DigestError>;
