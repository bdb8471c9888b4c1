//! Contains the hardfork trait.

use crate::UpgradeResult;
use alloc::vec::Vec;
use alloy_primitives::Bytes;
use kona_protocol::{encode_deposits, TxDeposit};

/// The trait abstraction for a Hardfork.
pub trait Hardfork {
    /// Returns the upgrade deposit transactions, in the order they are included in the
    /// activation block.
    fn deposits(&self) -> UpgradeResult<Vec<TxDeposit>>;

    /// Returns the EIP-2718 encoded upgrade transactions.
    fn txs(&self) -> UpgradeResult<Vec<Bytes>> {
        Ok(encode_deposits(&self.deposits()?))
    }
}
