//! Utilities for creating hardforks.

use alloc::vec::Vec;
use alloy_primitives::{hex, keccak256, Address, Bytes};

/// `UpgradeTo` Function 4Byte Signature
pub const UPGRADE_TO_FUNC_BYTES_4: [u8; 4] = hex!("3659cfe6");

/// Turns the given address into calldata for the `upgradeTo` function.
pub fn upgrade_to_calldata(addr: Address) -> Bytes {
    let mut v = UPGRADE_TO_FUNC_BYTES_4.to_vec();
    v.extend_from_slice(addr.into_word().as_slice());
    v.into()
}

/// Returns the calldata of an argument-less call to the function with the given signature.
pub fn selector_calldata(signature: &str) -> Bytes {
    let mut v = Vec::with_capacity(4);
    v.extend_from_slice(&keccak256(signature.as_bytes())[..4]);
    v.into()
}
