//! Storage key derivation for the policy tables.

use alloc::vec::Vec;

use stylus_sdk::alloy_primitives::{keccak256, Address, FixedBytes};

use badge_roles_types::{RoleId, Selector};

/// Target key = keccak256(role || target).
///
/// Policy configuration is scoped by both the role and the target address.
pub fn target_key(role: RoleId, target: Address) -> FixedBytes<32> {
    let mut buf = Vec::with_capacity(32 + 20);
    buf.extend_from_slice(&role.to_be_bytes::<32>());
    buf.extend_from_slice(target.as_slice());
    keccak256(buf)
}

/// Function key = keccak256(role || target || selector).
pub fn function_key(role: RoleId, target: Address, selector: Selector) -> FixedBytes<32> {
    let mut buf = Vec::with_capacity(32 + 20 + 4);
    buf.extend_from_slice(&role.to_be_bytes::<32>());
    buf.extend_from_slice(target.as_slice());
    buf.extend_from_slice(selector.as_slice());
    keccak256(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylus_sdk::alloy_primitives::{address, U256};

    #[test]
    fn keys_separate_roles_targets_and_selectors() {
        let target = address!("00000000000000000000000000000000000000aa");
        let other = address!("00000000000000000000000000000000000000bb");
        let one = U256::from(1u64);
        let two = U256::from(2u64);

        assert_ne!(target_key(one, target), target_key(two, target));
        assert_ne!(target_key(one, target), target_key(one, other));
        assert_ne!(
            function_key(one, target, FixedBytes([0x40, 0xc1, 0x0f, 0x19])),
            function_key(one, target, FixedBytes([0x27, 0x34, 0x54, 0xbf]))
        );
        assert_ne!(target_key(one, target), function_key(one, target, FixedBytes::ZERO));
    }
}
