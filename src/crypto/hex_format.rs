//! Hex helpers for the wire format
//!
//! Wire blobs travel as lowercase hex, optionally prefixed with `0x` when
//! they come back from a ledger.

use crate::error::{WhisperError, WhisperResult};

/// Optional prefix accepted on wire input
pub const HEX_PREFIX: &str = "0x";

/// Strip an optional `0x` prefix
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix(HEX_PREFIX).unwrap_or(s)
}

/// Check whether a string is hex after stripping an optional `0x` prefix
///
/// An empty remainder counts as valid; callers that need data must check
/// the length separately.
pub fn is_valid_hex(s: &str) -> bool {
    strip_hex_prefix(s).bytes().all(|b| b.is_ascii_hexdigit())
}

/// Validate and decode wire hex into raw bytes
///
/// `min_len` is the minimum number of hex characters (after prefix
/// stripping). Checks run in order: length, charset, parity.
pub fn decode_wire_hex(s: &str, min_len: usize) -> WhisperResult<Vec<u8>> {
    let clean = strip_hex_prefix(s);

    if clean.len() < min_len {
        return Err(WhisperError::format("data too short"));
    }

    if !is_valid_hex(clean) {
        return Err(WhisperError::format("not valid hex format"));
    }

    if clean.len() % 2 != 0 {
        return Err(WhisperError::format("odd number of hex digits"));
    }

    hex::decode(clean).map_err(|e| WhisperError::format(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prefix() {
        assert_eq!(strip_hex_prefix("0xabcd"), "abcd");
        assert_eq!(strip_hex_prefix("abcd"), "abcd");
        assert_eq!(strip_hex_prefix("0x"), "");
        // Only the lowercase prefix is recognised
        assert_eq!(strip_hex_prefix("0Xab"), "0Xab");
    }

    #[test]
    fn test_is_valid_hex() {
        assert!(is_valid_hex("deadBEEF0123456789"));
        assert!(is_valid_hex("0xdeadbeef"));
        assert!(!is_valid_hex("xyz"));
        assert!(!is_valid_hex("0xdead beef"));
        assert!(!is_valid_hex("0X12"));
    }

    #[test]
    fn test_empty_is_valid_hex() {
        assert!(is_valid_hex(""));
        assert!(is_valid_hex("0x"));
    }

    #[test]
    fn test_decode_rejects_short_input() {
        let err = decode_wire_hex("abcd", 24).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_decode_rejects_non_hex() {
        let input = format!("zz{}", "00".repeat(20));
        let err = decode_wire_hex(&input, 24).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_decode_rejects_odd_length() {
        let input = "0".repeat(25);
        let err = decode_wire_hex(&input, 24).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_decode_mixed_case_with_prefix() {
        let bytes = decode_wire_hex("0xDEADbeef", 4).unwrap();
        assert_eq!(bytes, vec![0xde, 0xad, 0xbe, 0xef]);
    }
}
