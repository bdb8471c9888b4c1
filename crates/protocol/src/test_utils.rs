//! Test utilities for fee accounting.
//!
//! [FeeLedger] is a minimal model of how an L2 execution engine moves balances when it executes
//! a transaction, so that fee conservation can be checked without running an EVM.

use crate::{OperatorFeeParams, Predeploys};
use alloc::collections::BTreeMap;
use alloy_primitives::{Address, U256};
use thiserror::Error;

/// An error applying a transaction to the [FeeLedger].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The sender cannot cover the value transfer and the fees.
    #[error("insufficient funds for {account}: need {needed}, have {available}")]
    InsufficientFunds {
        /// The sender.
        account: Address,
        /// The value plus all fees.
        needed: U256,
        /// The sender's balance.
        available: U256,
    },
    /// The effective gas price is below the block base fee.
    #[error("effective gas price {effective_gas_price} below base fee {base_fee}")]
    GasPriceBelowBaseFee {
        /// The effective gas price of the transaction.
        effective_gas_price: U256,
        /// The block base fee.
        base_fee: U256,
    },
}

/// The outcome of executing a transfer, as reported by its receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedTransaction {
    /// The sender.
    pub from: Address,
    /// The recipient.
    pub to: Address,
    /// The transferred value.
    pub value: U256,
    /// The gas used by the transaction.
    pub gas_used: u64,
    /// The block base fee.
    pub base_fee: U256,
    /// The price paid per unit of gas, base fee included.
    pub effective_gas_price: U256,
    /// The L1 data fee.
    pub l1_fee: U256,
}

/// The fees charged for a single transaction, split by recipient vault.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeeCharge {
    /// Paid to the [`Predeploys::BASE_FEE_VAULT`].
    pub base_fee: U256,
    /// Paid to the [`Predeploys::SEQUENCER_FEE_VAULT`].
    pub priority_fee: U256,
    /// Paid to the [`Predeploys::L1_FEE_VAULT`].
    pub l1_fee: U256,
    /// Paid to the [`Predeploys::OPERATOR_FEE_VAULT`].
    pub operator_fee: U256,
}

impl FeeCharge {
    /// Returns the execution gas cost, `gas_used * effective_gas_price`.
    pub fn gas_cost(&self) -> U256 {
        self.base_fee + self.priority_fee
    }

    /// Returns the sum of all fees.
    pub fn total(&self) -> U256 {
        self.gas_cost() + self.l1_fee + self.operator_fee
    }
}

/// Account balances under a fixed operator fee configuration.
#[derive(Debug, Clone, Default)]
pub struct FeeLedger {
    balances: BTreeMap<Address, U256>,
    operator_fee: OperatorFeeParams,
}

impl FeeLedger {
    /// Creates an empty ledger charging the given operator fee.
    pub fn new(operator_fee: OperatorFeeParams) -> Self {
        Self { balances: BTreeMap::new(), operator_fee }
    }

    /// Credits `amount` to `account`.
    pub fn fund(&mut self, account: Address, amount: U256) {
        *self.balances.entry(account).or_default() += amount;
    }

    /// Returns the balance of `account`.
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    /// Returns the sum of all balances.
    pub fn total_supply(&self) -> U256 {
        self.balances.values().fold(U256::ZERO, |acc, balance| acc + *balance)
    }

    /// Applies a transaction: moves the value to the recipient and every fee to its vault.
    ///
    /// Either the whole transaction applies or the ledger is left untouched.
    pub fn charge(&mut self, tx: &ExecutedTransaction) -> Result<FeeCharge, LedgerError> {
        if tx.effective_gas_price < tx.base_fee {
            return Err(LedgerError::GasPriceBelowBaseFee {
                effective_gas_price: tx.effective_gas_price,
                base_fee: tx.base_fee,
            });
        }

        let gas_used = U256::from(tx.gas_used);
        let charge = FeeCharge {
            base_fee: gas_used * tx.base_fee,
            priority_fee: gas_used * (tx.effective_gas_price - tx.base_fee),
            l1_fee: tx.l1_fee,
            operator_fee: self.operator_fee.operator_fee(tx.gas_used),
        };

        let needed = tx.value + charge.total();
        let available = self.balance_of(tx.from);
        if available < needed {
            return Err(LedgerError::InsufficientFunds { account: tx.from, needed, available });
        }

        self.balances.insert(tx.from, available - needed);
        self.fund(tx.to, tx.value);
        self.fund(Predeploys::BASE_FEE_VAULT, charge.base_fee);
        self.fund(Predeploys::SEQUENCER_FEE_VAULT, charge.priority_fee);
        self.fund(Predeploys::L1_FEE_VAULT, charge.l1_fee);
        self.fund(Predeploys::OPERATOR_FEE_VAULT, charge.operator_fee);
        Ok(charge)
    }
}
