//! Difficulty probe over digest bytes.
//!
//! These only measure a digest. Searching for a `tries` value that satisfies
//! a target is left to the caller.

/// Count zero bytes before the first non-zero byte.
///
/// An all-zero digest reports its full length.
#[inline]
pub fn leading_zero_bytes(hash: &[u8]) -> usize {
    hash.iter().take_while(|byte| **byte == 0).count()
}

/// Check whether `hash` starts with at least `min_zero_bytes` zero bytes.
#[inline]
pub fn meets_difficulty(hash: &[u8], min_zero_bytes: usize) -> bool {
    leading_zero_bytes(hash) >= min_zero_bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_zero_bytes() {
        assert_eq!(leading_zero_bytes(&[0, 0, 1]), 2);
        assert_eq!(leading_zero_bytes(&[1, 2, 3]), 0);
        assert_eq!(leading_zero_bytes(&[0, 0, 0]), 3);
        assert_eq!(leading_zero_bytes(&[]), 0);
    }

    #[test]
    fn test_zero_bytes_after_first_nonzero_are_ignored() {
        assert_eq!(leading_zero_bytes(&[0, 0x80, 0, 0]), 1);
    }

    #[test]
    fn test_meets_difficulty() {
        let hash = [0x00, 0x00, 0x0F, 0xFF];
        assert!(meets_difficulty(&hash, 0));
        assert!(meets_difficulty(&hash, 2));
        assert!(!meets_difficulty(&hash, 3));
    }
}
