//! Contract storage for the policy tables.
//!
//! Target records are two small integers keyed by `keccak256(role || target)`; function records
//! (header plus the whole parameter table) are one byte string keyed by
//! `keccak256(role || target || selector)`, see [`codec`].

pub mod codec;
pub mod memory;

use alloc::vec::Vec;

use stylus_sdk::{
    alloy_primitives::{Address, U8},
    prelude::*,
};

use crate::{
    types::{Clearance, ExecutionOptions, FunctionPolicy, PolicyStore, RoleId, Selector, TargetPolicy},
    utils::keys::{function_key, target_key},
};

use self::codec::{decode_function_policy, encode_function_policy};

sol_storage! {
    /// Policy tables, read by the checker and written only through the registry.
    pub struct PolicyTables {
        /// Batch (multiSend) address; zero when batching is disabled.
        address multisend;

        mapping(bytes32 => uint8) clearance_of;
        mapping(bytes32 => uint8) target_options_of;

        mapping(bytes32 => bytes) function_policy_of;
    }
}

impl PolicyStore for PolicyTables {
    fn target_policy(&self, role: RoleId, target: Address) -> TargetPolicy {
        let key = target_key(role, target);
        // Unknown discriminants can only come from a storage layout mismatch; treat as denied.
        let clearance = Clearance::try_from(self.clearance_of.get(key).to::<u8>()).unwrap_or_default();
        let options = ExecutionOptions::try_from(self.target_options_of.get(key).to::<u8>()).unwrap_or_default();
        TargetPolicy { clearance, options }
    }

    fn set_target_policy(&mut self, role: RoleId, target: Address, policy: TargetPolicy) {
        let key = target_key(role, target);
        self.clearance_of.insert(key, U8::from(policy.clearance as u8));
        self.target_options_of.insert(key, U8::from(policy.options as u8));
    }

    fn function_policy(&self, role: RoleId, target: Address, selector: Selector) -> Option<FunctionPolicy> {
        let bytes = self
            .function_policy_of
            .getter(function_key(role, target, selector))
            .get_bytes();
        if bytes.is_empty() {
            return None;
        }
        // A record that does not decode grants nothing.
        decode_function_policy(&bytes).ok()
    }

    fn set_function_policy(&mut self, role: RoleId, target: Address, selector: Selector, policy: &FunctionPolicy) {
        let bytes = encode_function_policy(policy);
        self.function_policy_of
            .setter(function_key(role, target, selector))
            .set_bytes(bytes);
    }

    fn multisend(&self) -> Address {
        self.multisend.get()
    }

    fn set_multisend(&mut self, multisend: Address) {
        self.multisend.set(multisend);
    }
}
