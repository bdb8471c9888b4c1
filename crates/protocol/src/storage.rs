//! Storage keys as passed over the wire.

use crate::decode_hex_padded;
use alloc::vec::Vec;
use alloy_primitives::hex::{self, FromHexError};
use core::{fmt, ops::Deref, str::FromStr};

/// A storage slot key of arbitrary length.
///
/// Parsed leniently from hex text: leading zeros may be dropped, so an odd number of digits is
/// accepted and left-padded with a zero nibble.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorageKey(pub Vec<u8>);

impl StorageKey {
    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for StorageKey {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<u8>> for StorageKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl FromStr for StorageKey {
    type Err = FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_hex_padded(s).map(Self)
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_prefixed(&self.0))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StorageKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StorageKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text: alloc::string::String = serde::Deserialize::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_parse_storage_key() {
        let cases: [(&str, &[u8]); 6] = [
            ("0x", &[]),
            ("0x0", &[0]),
            ("0x1", &[1]),
            ("0x01", &[1]),
            ("0x01020304", &[1, 2, 3, 4]),
            ("0xF01FF02", &[0x0F, 0x01, 0xFF, 0x02]),
        ];
        for (text, expected) in cases {
            let key: StorageKey = text.parse().unwrap();
            assert_eq!(key.as_bytes(), expected, "{text}");
        }
    }

    #[test]
    fn test_display_storage_key() {
        let key: StorageKey = "0xF01FF02".parse().unwrap();
        assert_eq!(key.to_string(), "0x0f01ff02");
        assert_eq!(StorageKey::default().to_string(), "0x");
    }

    #[test]
    fn test_parse_invalid_storage_key() {
        assert!("0xgg".parse::<StorageKey>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_storage_key_serde() {
        let key: StorageKey = serde_json::from_str("\"0x1\"").unwrap();
        assert_eq!(key.as_bytes(), [1]);
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"0x01\"");
    }
}
