//! Wire format: dash-delimited, fixed-width, uppercase hex tokens.
//!
//! The encoded string is the only bit-exact artifact the codec produces:
//! N tokens of exactly four hex digits joined by single `-` characters,
//! total length 5N-1. Parsing validates token count and width up front and
//! fails on anything malformed rather than guessing.

use hwid_error::{HwidError, Result};

use crate::constants::{TOKEN_DELIMITER, TOKEN_WIDTH};

/// Render slots as `XXXX-XXXX-...`, one zero-padded uppercase hex token
/// per slot, in slot order.
pub fn encode_slots(slots: &[u16]) -> String {
    let mut out = String::with_capacity(slots.len() * (TOKEN_WIDTH + 1));
    for (i, slot) in slots.iter().enumerate() {
        if i > 0 {
            out.push(TOKEN_DELIMITER);
        }
        out.push_str(&format!("{:04X}", slot));
    }
    out
}

/// Parse a dash-delimited fingerprint string into raw 16-bit slots.
///
/// Fails with [`HwidError::MalformedInput`] if the token count differs
/// from `expected_slots`, a token is empty or not exactly four characters
/// wide, or a token contains non-hexadecimal characters. Values are never
/// truncated or wrapped.
pub fn decode_slots(input: &str, expected_slots: usize) -> Result<Vec<u16>> {
    let tokens: Vec<&str> = input.split(TOKEN_DELIMITER).collect();
    if tokens.len() != expected_slots {
        return Err(HwidError::malformed(format!(
            "expected {} tokens, found {}",
            expected_slots,
            tokens.len()
        )));
    }

    let mut slots = Vec::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate() {
        if token.len() != TOKEN_WIDTH {
            return Err(HwidError::malformed(format!(
                "token {} has width {}, expected {}",
                index,
                token.len(),
                TOKEN_WIDTH
            )));
        }
        // from_str_radix would also accept a leading sign, so the digits
        // are checked explicitly first.
        if !token.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HwidError::malformed(format!(
                "token {} contains non-hex characters",
                index
            )));
        }
        let value = u16::from_str_radix(token, 16)
            .map_err(|e| HwidError::malformed(format!("token {}: {}", index, e)))?;
        slots.push(value);
    }

    Ok(slots)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_fixed_width_uppercase() {
        assert_eq!(encode_slots(&[0x06f9, 0x4e25, 0x000a]), "06F9-4E25-000A");
        assert_eq!(encode_slots(&[0x0000]), "0000");
    }

    #[test]
    fn test_encoded_length() {
        let slots = [0x06f9, 0x4e25, 0xf4a1, 0x5437, 0xab41];
        assert_eq!(encode_slots(&slots).len(), 5 * slots.len() - 1);
    }

    #[test]
    fn test_decode_round_trip() {
        let slots = vec![0x06f9, 0x4e25, 0xf4a1, 0x5437, 0xab41];
        let decoded = decode_slots(&encode_slots(&slots), slots.len()).unwrap();
        assert_eq!(decoded, slots);
    }

    #[test]
    fn test_decode_accepts_lowercase() {
        assert_eq!(
            decode_slots("06f9-4e25", 2).unwrap(),
            vec![0x06f9, 0x4e25]
        );
    }

    #[test]
    fn test_decode_rejects_wrong_token_count() {
        assert!(decode_slots("06F9-4E25", 5).is_err());
        assert!(decode_slots("06F9-4E25-F4A1-5437-AB41-0000", 5).is_err());
    }

    #[test]
    fn test_decode_rejects_empty_token() {
        assert!(decode_slots("06F9-", 2).is_err());
        assert!(decode_slots("-4E25", 2).is_err());
    }

    #[test]
    fn test_decode_rejects_bad_width() {
        assert!(decode_slots("6F9-4E25", 2).is_err());
        assert!(decode_slots("006F9-4E25", 2).is_err());
    }

    #[test]
    fn test_decode_rejects_non_hex() {
        assert!(decode_slots("06F9-4EZ5", 2).is_err());
        assert!(decode_slots("+123-4E25", 2).is_err());
        assert!(decode_slots("06F9 4E25", 1).is_err());
    }

    #[test]
    fn test_decode_never_panics_on_garbage() {
        for input in ["", "-", "----", "not-a-valid-id", "😀😀😀😀-0000"] {
            for expected in 1..=6 {
                let _ = decode_slots(input, expected);
            }
        }
    }
}
