//! Error types for the `kona-hardforks` crate.

use crate::UpgradeStep;
use alloy_primitives::hex::FromHexError;
use thiserror::Error;

/// An error building network upgrade transactions.
///
/// Any error aborts the build as a whole, no partial list of transactions is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UpgradeError {
    /// The configured creation code of a deployment is not valid hex.
    #[error("invalid bytecode for {step}: {err}")]
    InvalidBytecode {
        /// The deployment step.
        step: UpgradeStep,
        /// The hex decoding error.
        err: FromHexError,
    },
}

/// A [Result] alias for the [UpgradeError] type.
pub type UpgradeResult<T> = core::result::Result<T, UpgradeError>;
