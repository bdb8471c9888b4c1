//! Accounts that deploy network upgrade contracts.

use alloy_primitives::{address, Address};

/// Container for the deployer accounts of network upgrade contracts.
///
/// Each deployer is used exactly once, so every contract lands at the nonce `0` create address of
/// its deployer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Deployers;

impl Deployers {
    /// EIP-2935 block hash history contract deployer address.
    pub const BLOCK_HASH_HISTORY_DEPLOYER: Address =
        address!("E9f0662359Bb2c8111840eFFD73B9AFA77CbDE10");

    /// Isthmus L1 Block deployer address.
    pub const ISTHMUS_L1_BLOCK_DEPLOYER: Address =
        address!("4210000000000000000000000000000000000003");

    /// Isthmus Gas Price Oracle deployer address.
    pub const ISTHMUS_GAS_PRICE_ORACLE_DEPLOYER: Address =
        address!("4210000000000000000000000000000000000004");

    /// Isthmus Operator Fee Vault deployer address.
    pub const ISTHMUS_OPERATOR_FEE_VAULT_DEPLOYER: Address =
        address!("4210000000000000000000000000000000000005");
}
