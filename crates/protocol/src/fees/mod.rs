//! Codecs for the fee parameters stored in the L1 system config.

mod ecotone;
pub use ecotone::{DecodedScalars, EcotoneScalars, L1_SCALAR_BEDROCK, L1_SCALAR_ECOTONE};

mod operator;
pub use operator::{OperatorFeeParams, OPERATOR_FEE_DECIMALS};
