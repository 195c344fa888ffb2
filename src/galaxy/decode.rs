//! Hex-to-text decoding of trait labels.
//!
//! Labels are stored on chain as `bytes32`, right-padded with zero bytes.
//! Decoding strips zero bytes at both ends and reads the rest as UTF-8.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid hex string '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    #[error("hex string '{input}' is not valid UTF-8")]
    InvalidUtf8 { input: String },
}

/// Decode one hex string (with or without `0x`) into text.
pub fn hex_to_string(input: &str) -> Result<String, DecodeError> {
    let bytes = alloy::hex::decode(input).map_err(|e| DecodeError::InvalidHex {
        input: input.to_string(),
        reason: e.to_string(),
    })?;

    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|b| *b != 0).map_or(start, |i| i + 1);

    String::from_utf8(bytes[start..end].to_vec()).map_err(|_| DecodeError::InvalidUtf8 {
        input: input.to_string(),
    })
}

/// Decode a sequence, keeping order. Fails on the first bad entry.
pub fn hex_to_strings<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<String>, DecodeError> {
    inputs.iter().map(|s| hex_to_string(s.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_label() {
        assert_eq!(hex_to_string("0x4e616d65").unwrap(), "Name");
        assert_eq!(hex_to_string("4e616d65").unwrap(), "Name");
    }

    #[test]
    fn test_bytes32_padding() {
        let padded = format!("0x{:0<64}", "416c696365");
        assert_eq!(padded.len(), 66);
        assert_eq!(hex_to_string(&padded).unwrap(), "Alice");

        let left = format!("0x{:0>64}", "426f62");
        assert_eq!(hex_to_string(&left).unwrap(), "Bob");
    }

    #[test]
    fn test_interior_zero_kept() {
        assert_eq!(hex_to_string("0x410042").unwrap(), "A\0B");
    }

    #[test]
    fn test_empty_and_all_zero() {
        assert_eq!(hex_to_string("0x").unwrap(), "");
        assert_eq!(hex_to_string(&format!("0x{}", "0".repeat(64))).unwrap(), "");
    }

    #[test]
    fn test_utf8_multibyte() {
        // "é"
        assert_eq!(hex_to_string("0xc3a9").unwrap(), "é");
    }

    #[test]
    fn test_invalid_hex() {
        assert!(matches!(
            hex_to_string("0xzz"),
            Err(DecodeError::InvalidHex { .. })
        ));
        assert!(matches!(
            hex_to_string("0x123"),
            Err(DecodeError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_invalid_utf8() {
        assert_eq!(
            hex_to_string("0xff"),
            Err(DecodeError::InvalidUtf8 {
                input: "0xff".into()
            })
        );
    }

    #[test]
    fn test_sequence_keeps_order() {
        let decoded = hex_to_strings(&["0x416c696365", "0x426f62"][..]).unwrap();
        assert_eq!(decoded, vec!["Alice", "Bob"]);
    }
}
