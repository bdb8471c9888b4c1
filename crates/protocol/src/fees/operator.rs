//! The Isthmus operator fee parameters.

use alloy_primitives::{B256, U256};

/// The denominator of the operator fee scalar, which is expressed in parts per million.
pub const OPERATOR_FEE_DECIMALS: u64 = 1_000_000;

/// The operator fee parameters, packed into the `operatorFeeParams` word of the system config.
///
/// The word layout is fixed and unversioned:
///
/// | Bytes    | Actual Size | Variable |
/// |----------|-------------|----------|
/// | 0 .. 20  | -           | ignored  |
/// | 20 .. 24 | uint32      | scalar   |
/// | 24 .. 32 | uint64      | constant |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OperatorFeeParams {
    /// The operator fee scalar, in parts per million of gas used.
    pub scalar: u32,
    /// The flat operator fee charged per transaction, in wei.
    pub constant: u64,
}

impl OperatorFeeParams {
    /// Creates a new [OperatorFeeParams].
    pub const fn new(scalar: u32, constant: u64) -> Self {
        Self { scalar, constant }
    }

    /// Decodes the operator fee parameters. Every word decodes, bytes `0..20` are ignored.
    pub fn decode(word: B256) -> Self {
        let mut be_bytes = [0u8; 4];
        be_bytes.copy_from_slice(&word[20..24]);
        let scalar = u32::from_be_bytes(be_bytes);

        let mut be_bytes = [0u8; 8];
        be_bytes.copy_from_slice(&word[24..32]);
        let constant = u64::from_be_bytes(be_bytes);

        Self { scalar, constant }
    }

    /// Encodes the operator fee parameters, zeroing the unused bytes.
    pub fn encode(&self) -> B256 {
        let mut word = B256::ZERO;
        word[20..24].copy_from_slice(&self.scalar.to_be_bytes());
        word[24..32].copy_from_slice(&self.constant.to_be_bytes());
        word
    }

    /// Returns the operator fee owed by a transaction that used `gas_used` gas.
    ///
    /// `floor(gas_used * scalar / 1_000_000) + constant`
    pub fn operator_fee(&self, gas_used: u64) -> U256 {
        U256::from(gas_used) * U256::from(self.scalar) / U256::from(OPERATOR_FEE_DECIMALS)
            + U256::from(self.constant)
    }
}

impl From<B256> for OperatorFeeParams {
    fn from(word: B256) -> Self {
        Self::decode(word)
    }
}

impl From<OperatorFeeParams> for B256 {
    fn from(params: OperatorFeeParams) -> Self {
        params.encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::b256;
    use proptest::proptest;

    #[test]
    fn test_decode_operator_fee_params() {
        let mut word = B256::ZERO;
        word[20] = 4;
        word[29] = 3;
        let params = OperatorFeeParams::decode(word);
        assert_eq!(params.scalar, 0x0400_0000);
        assert_eq!(params.constant, 0x0003_0000);
    }

    #[test]
    fn test_decode_ignores_leading_bytes() {
        let word = b256!("ffffffffffffffffffffffffffffffffffffffff0000babe000000000000beef");
        assert_eq!(OperatorFeeParams::decode(word), OperatorFeeParams::new(0xbabe, 0xbeef));
    }

    #[test]
    fn test_encode_zeroes_reserved_bytes() {
        let word = OperatorFeeParams::new(u32::MAX, u64::MAX).encode();
        assert_eq!(
            word,
            b256!("0000000000000000000000000000000000000000ffffffffffffffffffffffff")
        );
    }

    #[test]
    fn test_operator_fee() {
        let params = OperatorFeeParams::new(20_000, 500);
        assert_eq!(params.operator_fee(0), U256::from(500));
        assert_eq!(params.operator_fee(21_000), U256::from(420 + 500));
        // Rounds down.
        assert_eq!(params.operator_fee(49), U256::from(500));
        assert_eq!(params.operator_fee(50), U256::from(501));
    }

    #[test]
    fn test_operator_fee_does_not_overflow() {
        let params = OperatorFeeParams::new(u32::MAX, u64::MAX);
        let expected = U256::from(u64::MAX) * U256::from(u32::MAX) / U256::from(1_000_000u64)
            + U256::from(u64::MAX);
        assert_eq!(params.operator_fee(u64::MAX), expected);
    }

    proptest! {
        #[test]
        fn test_operator_fee_params_roundtrip(scalar: u32, constant: u64) {
            let params = OperatorFeeParams::new(scalar, constant);
            assert_eq!(OperatorFeeParams::decode(params.encode()), params);
        }
    }
}
