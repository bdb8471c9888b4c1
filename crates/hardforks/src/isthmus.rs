//! Module containing a [`TxDeposit`] builder for the Isthmus network upgrade transactions.
//!
//! Isthmus network upgrade transactions are defined in the [OP Stack Specs][specs].
//!
//! [specs]: https://specs.optimism.io/protocol/isthmus/derivation.html#network-upgrade-automation-transactions

use crate::{
    selector_calldata, upgrade_to_calldata, DeploymentConfig, Hardfork, IsthmusConfig,
    ProxyUpdateConfig, UpgradeError, UpgradeResult,
};
use alloc::vec::Vec;
use alloy_primitives::{Address, TxKind, B256, U256};
use core::fmt;
use kona_protocol::{TxDeposit, UpgradeDepositSource};
use tracing::{debug, info};

/// The Isthmus upgrade steps, in inclusion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UpgradeStep {
    /// Deploy the EIP-2935 block hash history contract.
    BlockHashHistoryDeployment,
    /// Deploy the `L1Block` implementation.
    L1BlockDeployment,
    /// Deploy the `GasPriceOracle` implementation.
    GasPriceOracleDeployment,
    /// Deploy the `OperatorFeeVault` implementation.
    OperatorFeeVaultDeployment,
    /// Point the `L1Block` proxy at the new implementation.
    L1BlockProxyUpdate,
    /// Point the `GasPriceOracle` proxy at the new implementation.
    GasPriceOracleProxyUpdate,
    /// Point the `OperatorFeeVault` proxy at the new implementation.
    OperatorFeeVaultProxyUpdate,
    /// Call `setIsthmus()` on the `GasPriceOracle`.
    EnableIsthmus,
}

impl UpgradeStep {
    /// All steps, in inclusion order.
    pub const ALL: [Self; 8] = [
        Self::BlockHashHistoryDeployment,
        Self::L1BlockDeployment,
        Self::GasPriceOracleDeployment,
        Self::OperatorFeeVaultDeployment,
        Self::L1BlockProxyUpdate,
        Self::GasPriceOracleProxyUpdate,
        Self::OperatorFeeVaultProxyUpdate,
        Self::EnableIsthmus,
    ];

    /// Returns the position of the step in the upgrade block.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns a short name of the step.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BlockHashHistoryDeployment => "block hash history deployment",
            Self::L1BlockDeployment => "L1 block deployment",
            Self::GasPriceOracleDeployment => "gas price oracle deployment",
            Self::OperatorFeeVaultDeployment => "operator fee vault deployment",
            Self::L1BlockProxyUpdate => "L1 block proxy update",
            Self::GasPriceOracleProxyUpdate => "gas price oracle proxy update",
            Self::OperatorFeeVaultProxyUpdate => "operator fee vault proxy update",
            Self::EnableIsthmus => "enable isthmus",
        }
    }
}

impl fmt::Display for UpgradeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The addresses of the contracts deployed by the Isthmus upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployedAddresses {
    /// The EIP-2935 block hash history contract.
    pub block_hash_history: Address,
    /// The `L1Block` implementation.
    pub l1_block: Address,
    /// The `GasPriceOracle` implementation.
    pub gas_price_oracle: Address,
    /// The `OperatorFeeVault` implementation.
    pub operator_fee_vault: Address,
}

/// The Isthmus network upgrade transactions.
#[derive(Debug, Clone, Copy)]
pub struct Isthmus<'a> {
    config: &'a IsthmusConfig,
}

impl<'a> Isthmus<'a> {
    /// Creates a new [Isthmus] builder over the given configuration.
    pub const fn new(config: &'a IsthmusConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub const fn config(&self) -> &'a IsthmusConfig {
        self.config
    }

    /// Returns the source hash intent of a step.
    pub fn intent(&self, step: UpgradeStep) -> &'a str {
        let config = self.config;
        match step {
            UpgradeStep::BlockHashHistoryDeployment => &config.block_hash_history.intent,
            UpgradeStep::L1BlockDeployment => &config.l1_block.intent,
            UpgradeStep::GasPriceOracleDeployment => &config.gas_price_oracle.intent,
            UpgradeStep::OperatorFeeVaultDeployment => &config.operator_fee_vault.intent,
            UpgradeStep::L1BlockProxyUpdate => &config.l1_block_proxy.intent,
            UpgradeStep::GasPriceOracleProxyUpdate => &config.gas_price_oracle_proxy.intent,
            UpgradeStep::OperatorFeeVaultProxyUpdate => &config.operator_fee_vault_proxy.intent,
            UpgradeStep::EnableIsthmus => &config.enable_isthmus.intent,
        }
    }

    /// Returns the source hash of a step.
    pub fn source_hash(&self, step: UpgradeStep) -> B256 {
        UpgradeDepositSource::new(self.intent(step)).source_hash()
    }

    /// Returns the addresses the upgrade deploys contracts to.
    pub fn deployed_addresses(&self) -> DeployedAddresses {
        DeployedAddresses {
            block_hash_history: self.config.block_hash_history.deployed_address(),
            l1_block: self.config.l1_block.deployed_address(),
            gas_price_oracle: self.config.gas_price_oracle.deployed_address(),
            operator_fee_vault: self.config.operator_fee_vault.deployed_address(),
        }
    }

    /// Builds the deposit transaction of a single step.
    pub fn deposit(&self, step: UpgradeStep) -> UpgradeResult<TxDeposit> {
        let config = self.config;
        let tx = match step {
            UpgradeStep::BlockHashHistoryDeployment => {
                self.deployment(step, &config.block_hash_history)?
            }
            UpgradeStep::L1BlockDeployment => self.deployment(step, &config.l1_block)?,
            UpgradeStep::GasPriceOracleDeployment => {
                self.deployment(step, &config.gas_price_oracle)?
            }
            UpgradeStep::OperatorFeeVaultDeployment => {
                self.deployment(step, &config.operator_fee_vault)?
            }
            UpgradeStep::L1BlockProxyUpdate => self.proxy_update(
                step,
                &config.l1_block_proxy,
                config.l1_block.deployed_address(),
            ),
            UpgradeStep::GasPriceOracleProxyUpdate => self.proxy_update(
                step,
                &config.gas_price_oracle_proxy,
                config.gas_price_oracle.deployed_address(),
            ),
            UpgradeStep::OperatorFeeVaultProxyUpdate => self.proxy_update(
                step,
                &config.operator_fee_vault_proxy,
                config.operator_fee_vault.deployed_address(),
            ),
            UpgradeStep::EnableIsthmus => TxDeposit {
                source_hash: self.source_hash(step),
                from: config.enable_isthmus.from,
                to: TxKind::Call(config.enable_isthmus.target),
                mint: 0,
                value: U256::ZERO,
                gas_limit: config.enable_isthmus.gas_limit,
                is_system_transaction: false,
                input: selector_calldata(&config.enable_isthmus.signature),
            },
        };

        debug!(
            target: "hardforks",
            "Built isthmus upgrade step {} ({step}), source hash {}",
            step.index(),
            tx.source_hash
        );
        Ok(tx)
    }

    fn deployment(
        &self,
        step: UpgradeStep,
        config: &DeploymentConfig,
    ) -> UpgradeResult<TxDeposit> {
        let input = config
            .bytecode
            .decode()
            .map_err(|err| UpgradeError::InvalidBytecode { step, err })?;
        Ok(TxDeposit {
            source_hash: self.source_hash(step),
            from: config.deployer,
            to: TxKind::Create,
            mint: 0,
            value: U256::ZERO,
            gas_limit: config.gas_limit,
            is_system_transaction: false,
            input,
        })
    }

    fn proxy_update(
        &self,
        step: UpgradeStep,
        config: &ProxyUpdateConfig,
        implementation: Address,
    ) -> TxDeposit {
        TxDeposit {
            source_hash: self.source_hash(step),
            from: Address::ZERO,
            to: TxKind::Call(config.proxy),
            mint: 0,
            value: U256::ZERO,
            gas_limit: config.gas_limit,
            is_system_transaction: false,
            input: upgrade_to_calldata(implementation),
        }
    }
}

impl Hardfork for Isthmus<'_> {
    fn deposits(&self) -> UpgradeResult<Vec<TxDeposit>> {
        let deposits = UpgradeStep::ALL
            .iter()
            .map(|step| self.deposit(*step))
            .collect::<UpgradeResult<Vec<_>>>()?;
        info!(target: "hardforks", "Built {} isthmus upgrade transactions", deposits.len());
        Ok(deposits)
    }
}
