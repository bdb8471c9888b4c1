//! Contains all hardforks represented in the [`crate::Hardfork`] type.

use crate::{Isthmus, IsthmusConfig};

/// Optimism Hardforks
///
/// This type is used to encapsulate hardfork transactions.
///
/// # Example
///
/// Build isthmus hardfork upgrade transactions:
/// ```rust
/// use kona_hardforks::{Hardfork, Hardforks, IsthmusConfig};
/// let config = IsthmusConfig::default();
/// let isthmus_upgrade_txs = Hardforks::isthmus(&config).txs().unwrap();
/// assert_eq!(isthmus_upgrade_txs.len(), 8);
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct Hardforks;

impl Hardforks {
    /// The Isthmus hardfork upgrade transactions.
    pub const fn isthmus(config: &IsthmusConfig) -> Isthmus<'_> {
        Isthmus::new(config)
    }
}
