//! Fee parameter word commands.

use alloy_primitives::B256;
use anyhow::Result;
use clap::Args;
use kona_protocol::{DecodedScalars, EcotoneScalars, InputError, OperatorFeeParams};
use std::fmt::Write;
use tracing::debug;

/// Arguments of the `decode-scalar` command.
#[derive(Debug, Clone, Args)]
pub(crate) struct DecodeScalarArgs {
    /// The 32-byte scalar word, as 64 hex digits.
    pub word: B256,
}

impl DecodeScalarArgs {
    pub(crate) fn exec(&self) -> Result<String> {
        debug!(target: "upgrades", "Decoding scalar word {}", self.word);
        let decoded = EcotoneScalars::decode(self.word).map_err(InputError::from)?;
        Ok(render_scalars(self.word[0], &decoded))
    }
}

/// Arguments of the `encode-scalar` command.
#[derive(Debug, Clone, Args)]
pub(crate) struct EncodeScalarArgs {
    /// The scalar applied to the L1 base fee.
    #[arg(long)]
    pub base_fee_scalar: u32,
    /// The scalar applied to the L1 blob base fee.
    #[arg(long)]
    pub blob_base_fee_scalar: u32,
}

impl EncodeScalarArgs {
    pub(crate) fn exec(&self) -> String {
        EcotoneScalars::new(self.base_fee_scalar, self.blob_base_fee_scalar).encode().to_string()
    }
}

/// Arguments of the `decode-operator-fee` command.
#[derive(Debug, Clone, Args)]
pub(crate) struct OperatorFeeArgs {
    /// The 32-byte operator fee word, as 64 hex digits.
    pub word: B256,
    /// Also print the operator fee charged for this much gas.
    #[arg(long)]
    pub gas_used: Option<u64>,
}

impl OperatorFeeArgs {
    pub(crate) fn exec(&self) -> String {
        let params = OperatorFeeParams::decode(self.word);
        let mut out = format!("scalar:   {}\nconstant: {}", params.scalar, params.constant);
        if let Some(gas_used) = self.gas_used {
            let _ = write!(out, "\nfee:      {}", params.operator_fee(gas_used));
        }
        out
    }
}

/// Arguments of the `encode-operator-fee` command.
#[derive(Debug, Clone, Args)]
pub(crate) struct EncodeOperatorFeeArgs {
    /// The operator fee scalar, in parts per million.
    #[arg(long)]
    pub scalar: u32,
    /// The flat operator fee, in wei.
    #[arg(long)]
    pub constant: u64,
}

impl EncodeOperatorFeeArgs {
    pub(crate) fn exec(&self) -> String {
        OperatorFeeParams::new(self.scalar, self.constant).encode().to_string()
    }
}

/// Renders decoded scalars.
pub(crate) fn render_scalars(version: u8, decoded: &DecodedScalars) -> String {
    let scalars = decoded.scalars();
    let mut out = format!(
        "version:              {version}\nbase fee scalar:      {}\nblob base fee scalar: {}",
        scalars.base_fee_scalar, scalars.blob_base_fee_scalar
    );
    if decoded.is_legacy_fallback() {
        out.push_str("\nlegacy fallback:      true");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::b256;

    #[test]
    fn test_decode_scalar() {
        let args = DecodeScalarArgs {
            word: b256!("010000000000000000000000000000000000000000000000000c5fc500000558"),
        };
        assert_eq!(
            args.exec().unwrap(),
            "version:              1\nbase fee scalar:      1368\nblob base fee scalar: 810949"
        );
    }

    #[test]
    fn test_decode_scalar_legacy_fallback() {
        let args = DecodeScalarArgs {
            word: b256!("0000000000000000000000000000000000000000000000000000000100000002"),
        };
        let out = args.exec().unwrap();
        assert!(out.contains("base fee scalar:      4294967295"));
        assert!(out.ends_with("legacy fallback:      true"));
    }

    #[test]
    fn test_decode_scalar_error_carries_code() {
        let mut word = B256::with_last_byte(1);
        word[0] = 2;
        let err = DecodeScalarArgs { word }.exec().unwrap_err();
        assert_eq!(err.to_string(), "input error -32602: unrecognized scalar version: 2");
    }

    #[test]
    fn test_encode_scalar() {
        let args = EncodeScalarArgs { base_fee_scalar: 1368, blob_base_fee_scalar: 810949 };
        assert_eq!(
            args.exec(),
            "0x010000000000000000000000000000000000000000000000000c5fc500000558"
        );
    }

    #[test]
    fn test_operator_fee_commands() {
        let word = EncodeOperatorFeeArgs { scalar: 20_000, constant: 500 }.exec();
        assert_eq!(word, "0x000000000000000000000000000000000000000000004e2000000000000001f4");

        let args = OperatorFeeArgs { word: word.parse().unwrap(), gas_used: Some(21_000) };
        assert_eq!(args.exec(), "scalar:   20000\nconstant: 500\nfee:      920");
    }
}
