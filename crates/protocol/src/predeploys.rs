//! Addresses of OP Stack predeploys and system accounts.
//!
//! See the complete set of predeploys at <https://specs.optimism.io/protocol/predeploys.html>.

use alloy_primitives::{address, Address};

/// Container for the predeploy contract addresses touched by network upgrades and fees.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Predeploys;

impl Predeploys {
    /// The `SequencerFeeVault` receives the priority fee of every transaction.
    pub const SEQUENCER_FEE_VAULT: Address = address!("4200000000000000000000000000000000000011");

    /// The `GasPriceOracle` exposes the L1 fee parameters to L2 contracts.
    pub const GAS_PRICE_ORACLE: Address = address!("420000000000000000000000000000000000000F");

    /// The `L1Block` contract holds the latest known L1 block attributes.
    pub const L1_BLOCK_INFO: Address = address!("4200000000000000000000000000000000000015");

    /// The `BaseFeeVault` receives the base fee of every transaction.
    pub const BASE_FEE_VAULT: Address = address!("4200000000000000000000000000000000000019");

    /// The `L1FeeVault` receives the L1 data fee of every transaction.
    pub const L1_FEE_VAULT: Address = address!("420000000000000000000000000000000000001a");

    /// The `OperatorFeeVault` receives the Isthmus operator fee.
    pub const OPERATOR_FEE_VAULT: Address = address!("420000000000000000000000000000000000001B");

    /// The EIP-2935 block hash history contract.
    pub const BLOCK_HASH_HISTORY: Address = address!("0F792be4B0c0cb4DAE440Ef133E90C0eCD48CCCC");
}

/// System accounts that originate deposits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct SystemAddresses;

impl SystemAddresses {
    /// The depositor account of L1 info transactions.
    pub const DEPOSITOR_ACCOUNT: Address = address!("DeaDDEaDDeAdDeAdDEAdDEaddeAddEAdDEAd0001");
}
