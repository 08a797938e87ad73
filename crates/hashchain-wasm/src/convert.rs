//! Conversions between JS-friendly strings and core types.

use hashchain_core::{DigestError, Hash, HashAlgorithm};

/// Parse a hex-encoded digest.
pub fn parse_hash(hex: &str) -> Result<Hash, DigestError> {
    Hash::from_hex(hex.trim())
}

/// Parse a list of hex-encoded digests, failing on the first bad entry.
pub fn parse_hashes(hexes: &[String]) -> Result<Vec<Hash>, DigestError> {
    hexes.iter().map(|h| parse_hash(h)).collect()
}

/// Parse an optional hex field; `None` and the empty string both mean absent.
pub fn parse_optional_hash(hex: Option<String>) -> Result<Option<Hash>, DigestError> {
    match hex.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(h) => parse_hash(h).map(Some),
    }
}

/// Resolve an algorithm name coming from JS.
///
/// `undefined` is rejected. Any string, even an unrecognized one, is
/// accepted and left to the combiner's fallback.
pub fn parse_algorithm(name: Option<String>) -> Result<HashAlgorithm, DigestError> {
    name.map(|n| HashAlgorithm::from_name(&n))
        .ok_or(DigestError::MissingAlgorithm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hash() {
        let hash = parse_hash(" 00ff ").unwrap();
        assert_eq!(hash.as_bytes(), &[0x00, 0xff]);
        assert!(parse_hash("xyz").is_err());
    }

    #[test]
    fn test_parse_hashes_stops_on_error() {
        let ok = parse_hashes(&["aa".to_string(), "bb".to_string()]).unwrap();
        assert_eq!(ok.len(), 2);
        assert!(parse_hashes(&["aa".to_string(), "nope".to_string()]).is_err());
    }

    #[test]
    fn test_parse_optional_hash() {
        assert_eq!(parse_optional_hash(None).unwrap(), None);
        assert_eq!(parse_optional_hash(Some(String::new())).unwrap(), None);
        assert_eq!(
            parse_optional_hash(Some("01".to_string())).unwrap(),
            Some(Hash::new(vec![1]))
        );
    }

    #[test]
    fn test_parse_algorithm() {
        assert!(matches!(parse_algorithm(None), Err(DigestError::MissingAlgorithm)));
        assert_eq!(parse_algorithm(Some("sha-1".into())).unwrap(), HashAlgorithm::Sha1);
        assert_eq!(parse_algorithm(Some("md5".into())).unwrap(), HashAlgorithm::Unknown);
    }
}
