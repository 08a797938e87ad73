//! Named digest algorithms understood by the combiner and its engines.

use core::fmt;
use serde::{Deserialize, Serialize};

/// A digest algorithm, addressed by name.
///
/// `Unknown` is a deliberate sentinel: it never reaches an engine and is
/// replaced by the configured default (SHA-256 unless overridden).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HashAlgorithm {
    Sha1,
    #[default]
    Sha256,
    Sha384,
    Sha512,
    Unknown,
}

impl HashAlgorithm {
    /// Every algorithm an engine must be able to compute.
    pub const SUPPORTED: [HashAlgorithm; 4] = [
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    /// Canonical name, as used by platform digest providers.
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Unknown => "UNKNOWN",
        }
    }

    /// Parse an algorithm name.
    ///
    /// Matching ignores case and dashes, so `SHA-256`, `SHA256` and `sha256`
    /// are equivalent. Anything unrecognized is `Unknown`; this never fails.
    pub fn from_name(name: &str) -> Self {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match normalized.as_str() {
            "SHA1" => HashAlgorithm::Sha1,
            "SHA256" => HashAlgorithm::Sha256,
            "SHA384" => HashAlgorithm::Sha384,
            "SHA512" => HashAlgorithm::Sha512,
            _ => HashAlgorithm::Unknown,
        }
    }

    /// Digest length in bytes, or `None` for the unresolved sentinel.
    pub fn output_len(&self) -> Option<usize> {
        match self {
            HashAlgorithm::Sha1 => Some(20),
            HashAlgorithm::Sha256 => Some(32),
            HashAlgorithm::Sha384 => Some(48),
            HashAlgorithm::Sha512 => Some(64),
            HashAlgorithm::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, HashAlgorithm::Unknown)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for HashAlgorithm {
    fn from(name: &str) -> Self {
        HashAlgorithm::from_name(name)
    }
}

impl From<String> for HashAlgorithm {
    fn from(name: String) -> Self {
        HashAlgorithm::from_name(&name)
    }
}

impl From<HashAlgorithm> for String {
    fn from(algorithm: HashAlgorithm) -> Self {
        algorithm.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_and_loose_names() {
        assert_eq!(HashAlgorithm::from_name("SHA-1"), HashAlgorithm::Sha1);
        assert_eq!(HashAlgorithm::from_name("sha256"), HashAlgorithm::Sha256);
        assert_eq!(HashAlgorithm::from_name(" Sha-384 "), HashAlgorithm::Sha384);
        assert_eq!(HashAlgorithm::from_name("SHA_512"), HashAlgorithm::Sha512);
    }

    #[test]
    fn test_unrecognized_names_are_unknown() {
        assert_eq!(HashAlgorithm::from_name("MD5"), HashAlgorithm::Unknown);
        assert_eq!(HashAlgorithm::from_name(""), HashAlgorithm::Unknown);
        assert_eq!(HashAlgorithm::from_name("UNKNOWN"), HashAlgorithm::Unknown);
    }

    #[test]
    fn test_name_roundtrip() {
        for algorithm in HashAlgorithm::SUPPORTED {
            assert_eq!(HashAlgorithm::from_name(algorithm.name()), algorithm);
        }
    }

    #[test]
    fn test_output_lengths() {
        assert_eq!(HashAlgorithm::Sha1.output_len(), Some(20));
        assert_eq!(HashAlgorithm::Sha512.output_len(), Some(64));
        assert_eq!(HashAlgorithm::Unknown.output_len(), None);
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&HashAlgorithm::Sha384).unwrap();
        assert_eq!(json, "\"SHA-384\"");

        let parsed: HashAlgorithm = serde_json::from_str("\"whirlpool\"").unwrap();
        assert_eq!(parsed, HashAlgorithm::Unknown);
    }
}
