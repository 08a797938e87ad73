//! Combiner configuration.

use serde::{Deserialize, Serialize};

use crate::algorithm::HashAlgorithm;
use crate::error::{DigestError, Result};

/// Settings injected into a [`crate::hash::DigestCombiner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DigestConfig {
    /// Algorithm used when a caller passes `UNKNOWN` or omits the algorithm.
    default_algorithm: HashAlgorithm,
}

/// Unvalidated form read from JSON.
#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    default_algorithm: HashAlgorithm,
}

impl DigestConfig {
    /// Create a config with an explicit default.
    ///
    /// Fails if `default_algorithm` is `UNKNOWN`, which would leave the
    /// fallback with nothing to fall back to.
    pub fn new(default_algorithm: HashAlgorithm) -> Result<Self> {
        if default_algorithm.is_unknown() {
            return Err(DigestError::UnknownDefault);
        }
        Ok(Self { default_algorithm })
    }

    /// Parse a config from JSON, e.g. `{"default_algorithm": "SHA-512"}`.
    ///
    /// Missing keys take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawConfig =
            serde_json::from_str(json).map_err(|e| DigestError::Config(e.to_string()))?;
        Self::new(raw.default_algorithm)
    }

    pub fn default_algorithm(&self) -> HashAlgorithm {
        self.default_algorithm
    }
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            default_algorithm: HashAlgorithm::Sha256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sha256() {
        assert_eq!(DigestConfig::default().default_algorithm(), HashAlgorithm::Sha256);
    }

    #[test]
    fn test_rejects_unknown_default() {
        assert!(matches!(
            DigestConfig::new(HashAlgorithm::Unknown),
            Err(DigestError::UnknownDefault)
        ));
    }

    #[test]
    fn test_from_json() {
        let config = DigestConfig::from_json(r#"{"default_algorithm":"sha-512"}"#).unwrap();
        assert_eq!(config.default_algorithm(), HashAlgorithm::Sha512);

        let config = DigestConfig::from_json("{}").unwrap();
        assert_eq!(config.default_algorithm(), HashAlgorithm::Sha256);
    }

    #[test]
    fn test_serializes_default() {
        let json = serde_json::to_string(&DigestConfig::default()).unwrap();
        assert_eq!(json, r#"{"default_algorithm":"SHA-256"}"#);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            DigestConfig::from_json(r#"{"default_algorithm":"md5"}"#),
            Err(DigestError::UnknownDefault)
        ));
        assert!(matches!(
            DigestConfig::from_json("not json"),
            Err(DigestError::Config(_))
        ));
    }
}
