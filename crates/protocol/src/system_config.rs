//! This module contains the [SystemConfig] type.

use crate::{DecodedScalars, EcotoneScalars, OperatorFeeParams, ScalarDecodeResult};
use alloy_primitives::{Address, B256, B64};
use tracing::warn;

/// Optimism system config contract values.
///
/// The JSON projection depends on [SystemConfig::marshal_pre_holocene]: when set, the Holocene
/// `eip1559Params` and Isthmus `operatorFeeParams` fields are omitted, so pre-Holocene consumers
/// see the exact shape they expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystemConfig {
    /// Batch sender address
    pub batcher_address: Address,
    /// Fee overhead, unused after Ecotone
    pub overhead: B256,
    /// Versioned fee scalar word
    pub scalar: B256,
    /// L2 gas limit
    pub gas_limit: u64,
    /// Holocene EIP-1559 parameters, `be_u32(denominator) ++ be_u32(elasticity)`
    pub eip1559_params: B64,
    /// Isthmus operator fee parameter word
    pub operator_fee_params: B256,
    /// Omit the post-Holocene fields when serializing.
    pub marshal_pre_holocene: bool,
}

impl SystemConfig {
    /// Decodes the Ecotone fee scalars from the scalar word.
    pub fn ecotone_scalars(&self) -> ScalarDecodeResult<DecodedScalars> {
        EcotoneScalars::decode(self.scalar)
    }

    /// Decodes the operator fee parameters.
    pub fn operator_fee(&self) -> OperatorFeeParams {
        OperatorFeeParams::decode(self.operator_fee_params)
    }

    /// Sets the operator fee parameters.
    pub fn set_operator_fee(&mut self, params: OperatorFeeParams) {
        self.operator_fee_params = params.encode();
    }

    /// Returns the EIP-1559 base fee max change denominator.
    pub fn eip1559_denominator(&self) -> u32 {
        let mut be_bytes = [0u8; 4];
        be_bytes.copy_from_slice(&self.eip1559_params[..4]);
        u32::from_be_bytes(be_bytes)
    }

    /// Returns the EIP-1559 elasticity multiplier.
    pub fn eip1559_elasticity(&self) -> u32 {
        let mut be_bytes = [0u8; 4];
        be_bytes.copy_from_slice(&self.eip1559_params[4..]);
        u32::from_be_bytes(be_bytes)
    }

    /// Applies a gas config update emitted by the L1 system config contract.
    ///
    /// Post-Ecotone, an update whose scalar does not validate is ignored and the previous scalar
    /// is retained. Returns `true` if the update was applied.
    pub fn apply_gas_config(
        &mut self,
        overhead: B256,
        scalar: B256,
        ecotone_active: bool,
    ) -> bool {
        if !ecotone_active {
            self.overhead = overhead;
            self.scalar = scalar;
            return true;
        }

        if let Err(err) = EcotoneScalars::validate(scalar) {
            warn!(
                target: "system_config",
                "Ignoring gas config update with scalar {scalar}: {err}"
            );
            return false;
        }

        // The overhead no longer affects the state transition after Ecotone.
        self.overhead = B256::ZERO;
        self.scalar = scalar;
        true
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SystemConfig {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let len = if self.marshal_pre_holocene { 4 } else { 6 };
        let mut state = serializer.serialize_struct("SystemConfig", len)?;
        state.serialize_field("batcherAddr", &self.batcher_address)?;
        state.serialize_field("overhead", &self.overhead)?;
        state.serialize_field("scalar", &self.scalar)?;
        state.serialize_field("gasLimit", &self.gas_limit)?;
        if !self.marshal_pre_holocene {
            state.serialize_field("eip1559Params", &self.eip1559_params)?;
            state.serialize_field("operatorFeeParams", &self.operator_fee_params)?;
        }
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SystemConfig {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct SystemConfigJson {
            #[serde(default)]
            batcher_addr: Address,
            #[serde(default)]
            overhead: B256,
            #[serde(default)]
            scalar: B256,
            #[serde(default)]
            gas_limit: u64,
            #[serde(default)]
            eip1559_params: Option<B64>,
            #[serde(default)]
            operator_fee_params: Option<B256>,
        }

        let json = <SystemConfigJson as serde::Deserialize<'de>>::deserialize(deserializer)?;
        Ok(Self {
            batcher_address: json.batcher_addr,
            overhead: json.overhead,
            scalar: json.scalar,
            gas_limit: json.gas_limit,
            marshal_pre_holocene: json.eip1559_params.is_none()
                && json.operator_fee_params.is_none(),
            eip1559_params: json.eip1559_params.unwrap_or_default(),
            operator_fee_params: json.operator_fee_params.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScalarDecodeError;
    use alloy_primitives::{address, b256, b64};

    fn test_config() -> SystemConfig {
        SystemConfig {
            batcher_address: address!("4100000000000000000000000000000000000000"),
            overhead: b256!("0405060000000000000000000000000000000000000000000000000000000000"),
            scalar: b256!("0708090000000000000000000000000000000000000000000000000000000000"),
            gas_limit: 1234,
            eip1559_params: B64::ZERO,
            operator_fee_params: b256!(
                "0102030000000000000000000000000000000000000000000000000000000000"
            ),
            marshal_pre_holocene: false,
        }
    }

    #[test]
    fn test_eip1559_params() {
        let config =
            SystemConfig { eip1559_params: b64!("000000fa00000006"), ..Default::default() };
        assert_eq!(config.eip1559_denominator(), 250);
        assert_eq!(config.eip1559_elasticity(), 6);
    }

    #[test]
    fn test_operator_fee() {
        let mut config = SystemConfig::default();
        config.set_operator_fee(OperatorFeeParams::new(20_000, 500));
        assert_eq!(config.operator_fee(), OperatorFeeParams::new(20_000, 500));
        assert_eq!(config.operator_fee_params[20..24], 20_000u32.to_be_bytes());
    }

    #[test]
    fn test_ecotone_scalars() {
        let config = SystemConfig {
            scalar: EcotoneScalars::new(1368, 810949).encode(),
            ..Default::default()
        };
        assert_eq!(
            config.ecotone_scalars(),
            Ok(DecodedScalars::Clean(EcotoneScalars::new(1368, 810949)))
        );

        assert_eq!(
            test_config().ecotone_scalars(),
            Err(ScalarDecodeError::UnrecognizedVersion(7))
        );
    }

    #[test]
    fn test_apply_gas_config_pre_ecotone() {
        let mut config = test_config();
        let overhead = B256::with_last_byte(0xbc);
        let scalar = B256::repeat_byte(0xff);
        assert!(config.apply_gas_config(overhead, scalar, false));
        assert_eq!(config.overhead, overhead);
        assert_eq!(config.scalar, scalar);
    }

    #[test]
    fn test_apply_gas_config_ecotone() {
        let mut config = test_config();
        let scalar = EcotoneScalars::new(2, 3).encode();
        assert!(config.apply_gas_config(B256::with_last_byte(0xbc), scalar, true));
        assert_eq!(config.overhead, B256::ZERO);
        assert_eq!(config.scalar, scalar);
    }

    #[test]
    fn test_apply_gas_config_ignores_invalid_scalar() {
        let mut config = test_config();
        let before = config;
        let mut dirty = B256::with_last_byte(2);
        dirty[1] = 1;
        assert!(!config.apply_gas_config(B256::ZERO, dirty, true));
        assert!(!config.apply_gas_config(B256::ZERO, B256::repeat_byte(0x02), true));
        assert_eq!(config, before);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_system_config_serde() {
        let mut config = test_config();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"batcherAddr":"0x4100000000000000000000000000000000000000","overhead":"0x0405060000000000000000000000000000000000000000000000000000000000","scalar":"0x0708090000000000000000000000000000000000000000000000000000000000","gasLimit":1234,"eip1559Params":"0x0000000000000000","operatorFeeParams":"0x0102030000000000000000000000000000000000000000000000000000000000"}"#
        );
        assert_eq!(serde_json::from_str::<SystemConfig>(&json).unwrap(), config);

        config.marshal_pre_holocene = true;
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"batcherAddr":"0x4100000000000000000000000000000000000000","overhead":"0x0405060000000000000000000000000000000000000000000000000000000000","scalar":"0x0708090000000000000000000000000000000000000000000000000000000000","gasLimit":1234}"#
        );
        let decoded: SystemConfig = serde_json::from_str(&json).unwrap();
        assert!(decoded.marshal_pre_holocene);
        assert_eq!(decoded.operator_fee_params, B256::ZERO);
        assert_eq!(decoded.eip1559_params, B64::ZERO);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_system_config_deserialize_missing_fields() {
        let decoded: SystemConfig = serde_json::from_str(
            r#"{"gasLimit":30000000,"operatorFeeParams":"0x0000000000000000000000000000000000000000000000000000000000000001"}"#,
        )
        .unwrap();
        assert!(!decoded.marshal_pre_holocene);
        assert_eq!(decoded.gas_limit, 30_000_000);
        assert_eq!(decoded.batcher_address, Address::ZERO);
        assert_eq!(decoded.operator_fee().constant, 1);
    }
}
