//! The versioned Ecotone fee scalar encoding.
//!
//! Post-Ecotone, the `scalar` word of the L1 `SystemConfig` contract packs both the base fee
//! scalar and the blob base fee scalar:
//!
//! | Bytes    | Version 0        | Version 1             |
//! |----------|------------------|-----------------------|
//! | 0        | `0x00`           | `0x01`                |
//! | 1 .. 24  | zero padding     | reserved, zero        |
//! | 24 .. 28 | zero padding     | `blobBaseFeeScalar`   |
//! | 28 .. 32 | `baseFeeScalar`  | `baseFeeScalar`       |

use crate::{ScalarDecodeError, ScalarDecodeResult};
use alloy_primitives::B256;
use tracing::warn;

/// The version byte of the pre-Ecotone scalar encoding.
pub const L1_SCALAR_BEDROCK: u8 = 0;

/// The version byte of the Ecotone scalar encoding.
pub const L1_SCALAR_ECOTONE: u8 = 1;

/// The Ecotone L1 fee scalars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EcotoneScalars {
    /// The scalar applied to the L1 base fee.
    pub base_fee_scalar: u32,
    /// The scalar applied to the L1 blob base fee.
    pub blob_base_fee_scalar: u32,
}

/// The outcome of decoding a scalar word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodedScalars {
    /// The word was cleanly encoded.
    Clean(EcotoneScalars),
    /// A version `0` word with dirty padding.
    ///
    /// Always holds [`EcotoneScalars::LEGACY_FALLBACK`]. Consumers must fall back to the
    /// pre-Ecotone, overhead based L1 fee calculation.
    LegacyFallback(EcotoneScalars),
}

impl DecodedScalars {
    /// Returns the decoded scalars, regardless of how they were decoded.
    pub const fn scalars(&self) -> EcotoneScalars {
        match self {
            Self::Clean(scalars) | Self::LegacyFallback(scalars) => *scalars,
        }
    }

    /// Returns `true` if the word signalled the legacy fee calculation.
    pub const fn is_legacy_fallback(&self) -> bool {
        matches!(self, Self::LegacyFallback(_))
    }
}

impl From<DecodedScalars> for EcotoneScalars {
    fn from(decoded: DecodedScalars) -> Self {
        decoded.scalars()
    }
}

impl EcotoneScalars {
    /// The scalars reported for a version `0` word with dirty padding.
    pub const LEGACY_FALLBACK: Self = Self { base_fee_scalar: u32::MAX, blob_base_fee_scalar: 0 };

    /// Creates a new [EcotoneScalars].
    pub const fn new(base_fee_scalar: u32, blob_base_fee_scalar: u32) -> Self {
        Self { base_fee_scalar, blob_base_fee_scalar }
    }

    /// Decodes a scalar word read from the system config.
    pub fn decode(word: B256) -> ScalarDecodeResult<DecodedScalars> {
        match word[0] {
            L1_SCALAR_BEDROCK => {
                if word[1..28].iter().any(|b| *b != 0) {
                    warn!(
                        target: "fees",
                        "Dirty padding in version 0 scalar {word}, using legacy fee calculation"
                    );
                    return Ok(DecodedScalars::LegacyFallback(Self::LEGACY_FALLBACK));
                }
                Ok(DecodedScalars::Clean(Self::new(be_u32(&word, 28), 0)))
            }
            L1_SCALAR_ECOTONE => {
                if word[1..24].iter().any(|b| *b != 0) {
                    return Err(ScalarDecodeError::InvalidEncoding);
                }
                Ok(DecodedScalars::Clean(Self::new(be_u32(&word, 28), be_u32(&word, 24))))
            }
            version => Err(ScalarDecodeError::UnrecognizedVersion(version)),
        }
    }

    /// Encodes the scalars as a version `1` word.
    pub fn encode(&self) -> B256 {
        let mut word = B256::ZERO;
        word[0] = L1_SCALAR_ECOTONE;
        word[24..28].copy_from_slice(&self.blob_base_fee_scalar.to_be_bytes());
        word[28..32].copy_from_slice(&self.base_fee_scalar.to_be_bytes());
        word
    }

    /// Checks that a scalar word is acceptable as a post-Ecotone system config update.
    ///
    /// Stricter than [`EcotoneScalars::decode`]: dirty version `0` padding is rejected, so that a
    /// bad update is ignored instead of switching the chain onto the legacy fee formula.
    pub fn validate(word: B256) -> ScalarDecodeResult<()> {
        match Self::decode(word)? {
            DecodedScalars::Clean(_) => Ok(()),
            DecodedScalars::LegacyFallback(_) => Err(ScalarDecodeError::DirtyLegacyPadding),
        }
    }
}

/// Reads a big-endian `u32` at `offset`.
fn be_u32(word: &B256, offset: usize) -> u32 {
    let mut be_bytes = [0u8; 4];
    be_bytes.copy_from_slice(&word[offset..offset + 4]);
    u32::from_be_bytes(be_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::b256;
    use proptest::proptest;

    fn word(set: &[(usize, u8)]) -> B256 {
        let mut word = B256::ZERO;
        for (index, value) in set {
            word[*index] = *value;
        }
        word
    }

    #[test]
    fn test_decode_dirty_padding_v0() {
        let decoded = EcotoneScalars::decode(word(&[(0, 0), (27, 1), (31, 2)])).unwrap();
        assert!(decoded.is_legacy_fallback());
        assert_eq!(decoded.scalars(), EcotoneScalars::new(u32::MAX, 0));
    }

    #[test]
    fn test_decode_dirty_padding_v0_first_byte() {
        let decoded = EcotoneScalars::decode(word(&[(0, 0), (1, 1), (31, 2)])).unwrap();
        assert_eq!(decoded, DecodedScalars::LegacyFallback(EcotoneScalars::LEGACY_FALLBACK));
    }

    #[test]
    fn test_decode_valid_v0() {
        let decoded = EcotoneScalars::decode(word(&[(0, 0), (27, 0), (31, 2)])).unwrap();
        assert_eq!(decoded, DecodedScalars::Clean(EcotoneScalars::new(2, 0)));
    }

    #[test]
    fn test_decode_v0_ignores_blob_slot() {
        // Bytes 24..28 are padding under version 0.
        let decoded = EcotoneScalars::decode(word(&[(25, 9), (31, 2)])).unwrap();
        assert!(decoded.is_legacy_fallback());
    }

    #[test]
    fn test_decode_invalid_v1() {
        let err = EcotoneScalars::decode(word(&[(0, 1), (7, 1), (31, 2)])).unwrap_err();
        assert_eq!(err, ScalarDecodeError::InvalidEncoding);
    }

    #[test]
    fn test_decode_valid_v1() {
        let cases = [
            (word(&[(0, 1), (27, 0), (31, 2)]), EcotoneScalars::new(2, 0)),
            (word(&[(0, 1), (27, 123), (31, 2)]), EcotoneScalars::new(2, 123)),
            (word(&[(0, 1), (27, 123), (31, 0)]), EcotoneScalars::new(0, 123)),
        ];
        for (word, expected) in cases {
            assert_eq!(EcotoneScalars::decode(word).unwrap(), DecodedScalars::Clean(expected));
        }
    }

    #[test]
    fn test_decode_zero_words() {
        assert_eq!(
            EcotoneScalars::decode(B256::ZERO).unwrap(),
            DecodedScalars::Clean(EcotoneScalars::default())
        );
        assert_eq!(
            EcotoneScalars::decode(word(&[(0, 1)])).unwrap(),
            DecodedScalars::Clean(EcotoneScalars::default())
        );
    }

    #[test]
    fn test_decode_unknown_version() {
        let err = EcotoneScalars::decode(word(&[(0, 2)])).unwrap_err();
        assert_eq!(err, ScalarDecodeError::UnrecognizedVersion(2));

        let err = EcotoneScalars::decode(B256::repeat_byte(0xff)).unwrap_err();
        assert_eq!(err, ScalarDecodeError::UnrecognizedVersion(0xff));
    }

    #[test]
    fn test_encode_layout() {
        let word = EcotoneScalars::new(0xbeef, 0xbabe).encode();
        assert_eq!(
            word,
            b256!("0100000000000000000000000000000000000000000000000000babe0000beef")
        );
    }

    #[test]
    fn test_encode_max_base_fee_scalar_is_clean() {
        let scalars = EcotoneScalars::new(u32::MAX, 0);
        let decoded = EcotoneScalars::decode(scalars.encode()).unwrap();
        assert_eq!(decoded, DecodedScalars::Clean(scalars));
    }

    #[test]
    fn test_validate() {
        assert!(EcotoneScalars::validate(word(&[(0, 1), (31, 2)])).is_ok());
        assert!(EcotoneScalars::validate(word(&[(31, 2)])).is_ok());
        assert_eq!(
            EcotoneScalars::validate(word(&[(1, 1), (31, 2)])),
            Err(ScalarDecodeError::DirtyLegacyPadding)
        );
        assert_eq!(
            EcotoneScalars::validate(word(&[(0, 1), (1, 1)])),
            Err(ScalarDecodeError::InvalidEncoding)
        );
        assert_eq!(
            EcotoneScalars::validate(word(&[(0, 3)])),
            Err(ScalarDecodeError::UnrecognizedVersion(3))
        );
    }

    proptest! {
        #[test]
        fn test_scalars_roundtrip(base_fee_scalar: u32, blob_base_fee_scalar: u32) {
            let scalars = EcotoneScalars::new(base_fee_scalar, blob_base_fee_scalar);
            let decoded = EcotoneScalars::decode(scalars.encode()).unwrap();
            assert_eq!(decoded, DecodedScalars::Clean(scalars));
        }
    }
}
