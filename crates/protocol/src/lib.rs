#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/op-rs/kona/main/assets/square.png",
    html_favicon_url = "https://raw.githubusercontent.com/op-rs/kona/main/assets/favicon.ico"
)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod errors;
pub use errors::{ErrorCode, InputError, ScalarDecodeError, ScalarDecodeResult};

mod fees;
pub use fees::{
    DecodedScalars, EcotoneScalars, OperatorFeeParams, L1_SCALAR_BEDROCK, L1_SCALAR_ECOTONE,
    OPERATOR_FEE_DECIMALS,
};

mod deposits;
pub use deposits::{
    DepositSourceDomain, DepositSourceDomainIdentifier, L1InfoDepositSource, UpgradeDepositSource,
    UserDepositSource,
};

mod transaction;
pub use transaction::{encode_deposits, TxDeposit, DEPOSIT_TX_TYPE};

mod system_config;
pub use system_config::SystemConfig;

mod storage;
pub use storage::StorageKey;

mod predeploys;
pub use predeploys::{Predeploys, SystemAddresses};

mod utils;
pub use utils::decode_hex_padded;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
