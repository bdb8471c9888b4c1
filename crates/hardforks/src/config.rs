//! Configuration of the Isthmus network upgrade transactions.

use crate::Deployers;
use alloc::string::{String, ToString};
use alloy_primitives::{hex::FromHexError, Address, Bytes};
use kona_protocol::{decode_hex_padded, Predeploys, SystemAddresses};

/// The creation code of the EIP-2935 block hash history contract.
pub const BLOCK_HASH_HISTORY_BYTECODE: &str = "0x60538060095f395ff33373fffffffffffffffffffffffffffffffffffffffe14604657602036036042575f35600143038111604257611fff81430311604257611fff9006545f5260205ff35b5f5ffd5b5f35611fff60014303065500";

/// Placeholder creation code for implementations that are not final yet. Decodes to `[0x00]`.
pub const PLACEHOLDER_BYTECODE: &str = "0x0";

/// Contract creation code, kept as hex text until a transaction is built.
///
/// Decoding is lenient about leading zeros, see [decode_hex_padded].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Bytecode(String);

impl Bytecode {
    /// Creates a new [Bytecode] from hex text.
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Returns the hex text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the creation code.
    pub fn decode(&self) -> Result<Bytes, FromHexError> {
        decode_hex_padded(&self.0).map(Bytes::from)
    }
}

impl Default for Bytecode {
    fn default() -> Self {
        Self::new(PLACEHOLDER_BYTECODE)
    }
}

impl From<&str> for Bytecode {
    fn from(hex: &str) -> Self {
        Self::new(hex)
    }
}

/// A contract deployment from a dedicated deployer account.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DeploymentConfig {
    /// The source hash intent.
    pub intent: String,
    /// The deployer. The contract lands at its nonce `0` create address.
    pub deployer: Address,
    /// The gas limit of the deployment.
    pub gas_limit: u64,
    /// The creation code.
    pub bytecode: Bytecode,
}

impl DeploymentConfig {
    /// Returns the address the contract is deployed to.
    pub fn deployed_address(&self) -> Address {
        self.deployer.create(0)
    }
}

/// A proxy upgrade, pointing a predeploy proxy at a new implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProxyUpdateConfig {
    /// The source hash intent.
    pub intent: String,
    /// The proxy to upgrade.
    pub proxy: Address,
    /// The gas limit of the upgrade call.
    pub gas_limit: u64,
}

/// The call that switches a predeploy over to the new fork.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EnableConfig {
    /// The source hash intent.
    pub intent: String,
    /// The caller.
    pub from: Address,
    /// The called contract.
    pub target: Address,
    /// The gas limit of the call.
    pub gas_limit: u64,
    /// The solidity signature of the called function, e.g. `setIsthmus()`.
    pub signature: String,
}

/// The full set of parameters of the Isthmus upgrade transactions.
///
/// [IsthmusConfig::default] holds the canonical values. When deserialized, missing steps fall back
/// to their defaults, but a step that is present must be complete.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct IsthmusConfig {
    /// The EIP-2935 block hash history contract.
    pub block_hash_history: DeploymentConfig,
    /// The `L1Block` implementation.
    pub l1_block: DeploymentConfig,
    /// The `GasPriceOracle` implementation.
    pub gas_price_oracle: DeploymentConfig,
    /// The `OperatorFeeVault` implementation.
    pub operator_fee_vault: DeploymentConfig,
    /// The `L1Block` proxy upgrade.
    pub l1_block_proxy: ProxyUpdateConfig,
    /// The `GasPriceOracle` proxy upgrade.
    pub gas_price_oracle_proxy: ProxyUpdateConfig,
    /// The `OperatorFeeVault` proxy upgrade.
    pub operator_fee_vault_proxy: ProxyUpdateConfig,
    /// The `setIsthmus()` call on the `GasPriceOracle`.
    pub enable_isthmus: EnableConfig,
}

impl Default for IsthmusConfig {
    fn default() -> Self {
        let deployment = |intent: &str, deployer, gas_limit, bytecode: &str| DeploymentConfig {
            intent: intent.to_string(),
            deployer,
            gas_limit,
            bytecode: Bytecode::new(bytecode),
        };
        let proxy_update = |intent: &str, proxy| ProxyUpdateConfig {
            intent: intent.to_string(),
            proxy,
            gas_limit: 50_000,
        };

        Self {
            block_hash_history: deployment(
                "Isthmus: EIP-2935 Contract Deployment",
                Deployers::BLOCK_HASH_HISTORY_DEPLOYER,
                250_000,
                BLOCK_HASH_HISTORY_BYTECODE,
            ),
            l1_block: deployment(
                "Isthmus: L1 Block Deployment",
                Deployers::ISTHMUS_L1_BLOCK_DEPLOYER,
                425_000,
                PLACEHOLDER_BYTECODE,
            ),
            gas_price_oracle: deployment(
                "Isthmus: Gas Price Oracle Deployment",
                Deployers::ISTHMUS_GAS_PRICE_ORACLE_DEPLOYER,
                1_625_000,
                PLACEHOLDER_BYTECODE,
            ),
            operator_fee_vault: deployment(
                "Isthmus: Operator Fee Vault Deployment",
                Deployers::ISTHMUS_OPERATOR_FEE_VAULT_DEPLOYER,
                500_000,
                PLACEHOLDER_BYTECODE,
            ),
            l1_block_proxy: proxy_update(
                "Isthmus: L1 Block Proxy Update",
                Predeploys::L1_BLOCK_INFO,
            ),
            gas_price_oracle_proxy: proxy_update(
                "Isthmus: Gas Price Oracle Proxy Update",
                Predeploys::GAS_PRICE_ORACLE,
            ),
            operator_fee_vault_proxy: proxy_update(
                "Isthmus: Operator Fee Vault Proxy Update",
                Predeploys::OPERATOR_FEE_VAULT,
            ),
            enable_isthmus: EnableConfig {
                intent: "Isthmus: Gas Price Oracle Set Isthmus".to_string(),
                from: SystemAddresses::DEPOSITOR_ACCOUNT,
                target: Predeploys::GAS_PRICE_ORACLE,
                gas_limit: 90_000,
                signature: "setIsthmus()".to_string(),
            },
        }
    }
}
