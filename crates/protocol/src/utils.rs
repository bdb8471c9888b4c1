//! Hex utilities.

use alloc::{string::String, vec::Vec};
use alloy_primitives::hex::{self, FromHexError};

/// Decodes hex text, left-padding an odd number of digits with a single zero nibble.
///
/// The `0x` prefix is optional and `"0x"` decodes to an empty byte string, so `"0x0"` becomes
/// `[0x00]` and `"0xF01FF02"` becomes `[0x0F, 0x01, 0xFF, 0x02]`.
pub fn decode_hex_padded(text: &str) -> Result<Vec<u8>, FromHexError> {
    let digits = text.strip_prefix("0x").unwrap_or(text);
    if digits.len() % 2 == 0 {
        return hex::decode(digits);
    }

    let mut padded = String::with_capacity(digits.len() + 1);
    padded.push('0');
    padded.push_str(digits);
    hex::decode(padded)
}
