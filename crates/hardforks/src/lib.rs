#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/op-rs/kona/main/assets/square.png",
    html_favicon_url = "https://raw.githubusercontent.com/op-rs/kona/main/assets/favicon.ico"
)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod traits;
pub use traits::Hardfork;

mod errors;
pub use errors::{UpgradeError, UpgradeResult};

mod forks;
pub use forks::Hardforks;

mod deployers;
pub use deployers::Deployers;

mod config;
pub use config::{
    Bytecode, DeploymentConfig, EnableConfig, IsthmusConfig, ProxyUpdateConfig,
    BLOCK_HASH_HISTORY_BYTECODE, PLACEHOLDER_BYTECODE,
};

mod isthmus;
pub use isthmus::{DeployedAddresses, Isthmus, UpgradeStep};

mod utils;
pub use utils::{selector_calldata, upgrade_to_calldata, UPGRADE_TO_FUNC_BYTES_4};
