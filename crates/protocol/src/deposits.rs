//! Deposit source domains and source hashes.
//!
//! Every deposit transaction carries a source hash that binds it to its origin. Each kind of
//! origin hashes into its own domain, so a user deposit can never collide with L1 info or
//! network upgrade deposits:
//!
//! ```text
//! source_hash = keccak256(bytes32(uint256(domain)) ++ keccak256(deposit_id))
//! ```

use alloc::string::String;
use alloy_primitives::{keccak256, B256};

/// Source domain identifiers for deposit transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DepositSourceDomainIdentifier {
    /// A user deposit source.
    User = 0,
    /// A L1 info deposit source.
    L1Info = 1,
    /// An upgrade deposit source.
    Upgrade = 2,
}

impl DepositSourceDomainIdentifier {
    /// Hashes a deposit identifier hash into this domain.
    fn hash(self, deposit_id_hash: B256) -> B256 {
        let mut domain_input = [0u8; 32 * 2];
        domain_input[32 - 8..32].copy_from_slice(&(self as u64).to_be_bytes());
        domain_input[32..].copy_from_slice(deposit_id_hash.as_slice());
        keccak256(domain_input)
    }
}

/// Source domains for deposit transactions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DepositSourceDomain {
    /// A user deposit source.
    User(UserDepositSource),
    /// A L1 info deposit source.
    L1Info(L1InfoDepositSource),
    /// An upgrade deposit source.
    Upgrade(UpgradeDepositSource),
}

impl DepositSourceDomain {
    /// Returns the source hash.
    pub fn source_hash(&self) -> B256 {
        match self {
            Self::User(ds) => ds.source_hash(),
            Self::L1Info(ds) => ds.source_hash(),
            Self::Upgrade(ds) => ds.source_hash(),
        }
    }

    /// Returns the domain identifier of the source.
    pub const fn identifier(&self) -> DepositSourceDomainIdentifier {
        match self {
            Self::User(_) => DepositSourceDomainIdentifier::User,
            Self::L1Info(_) => DepositSourceDomainIdentifier::L1Info,
            Self::Upgrade(_) => DepositSourceDomainIdentifier::Upgrade,
        }
    }
}

/// Hashes an L1 block hash and a per-block index into a deposit identifier.
fn block_scoped_id(l1_block_hash: B256, index: u64) -> B256 {
    let mut input = [0u8; 32 * 2];
    input[..32].copy_from_slice(l1_block_hash.as_slice());
    input[32 * 2 - 8..].copy_from_slice(&index.to_be_bytes());
    keccak256(input)
}

/// A user deposit transaction source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserDepositSource {
    /// The L1 block hash.
    pub l1_block_hash: B256,
    /// The log index.
    pub log_index: u64,
}

impl UserDepositSource {
    /// Creates a new [UserDepositSource].
    pub const fn new(l1_block_hash: B256, log_index: u64) -> Self {
        Self { l1_block_hash, log_index }
    }

    /// Returns the source hash.
    pub fn source_hash(&self) -> B256 {
        DepositSourceDomainIdentifier::User
            .hash(block_scoped_id(self.l1_block_hash, self.log_index))
    }
}

/// A L1 info deposit transaction source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct L1InfoDepositSource {
    /// The L1 block hash.
    pub l1_block_hash: B256,
    /// The sequence number.
    pub seq_number: u64,
}

impl L1InfoDepositSource {
    /// Creates a new [L1InfoDepositSource].
    pub const fn new(l1_block_hash: B256, seq_number: u64) -> Self {
        Self { l1_block_hash, seq_number }
    }

    /// Returns the source hash.
    pub fn source_hash(&self) -> B256 {
        DepositSourceDomainIdentifier::L1Info
            .hash(block_scoped_id(self.l1_block_hash, self.seq_number))
    }
}

/// An upgrade deposit transaction source.
///
/// Network upgrade transactions are identified by a human-readable intent, e.g.
/// `"Isthmus: Gas Price Oracle Deployment"`, which must be unique across all upgrades.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UpgradeDepositSource {
    /// The intent.
    pub intent: String,
}

impl UpgradeDepositSource {
    /// Creates a new [UpgradeDepositSource].
    pub fn new(intent: impl Into<String>) -> Self {
        Self { intent: intent.into() }
    }

    /// Returns the source hash.
    pub fn source_hash(&self) -> B256 {
        DepositSourceDomainIdentifier::Upgrade.hash(keccak256(self.intent.as_bytes()))
    }
}
