//! In-memory policy tables and membership ledger.
//!
//! Used to run the checker and registry off-chain (simulation, tests) with the same semantics as
//! the on-chain storage adapter.

use alloc::collections::BTreeMap;

use stylus_sdk::alloy_primitives::{Address, U256};

use crate::types::{
    FunctionPolicy, MembershipError, MembershipOracle, PolicyStore, RoleId, Selector, TargetPolicy,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryPolicyStore {
    targets: BTreeMap<(RoleId, Address), TargetPolicy>,
    functions: BTreeMap<(RoleId, Address, Selector), FunctionPolicy>,
    multisend: Address,
}

impl PolicyStore for MemoryPolicyStore {
    fn target_policy(&self, role: RoleId, target: Address) -> TargetPolicy {
        self.targets.get(&(role, target)).copied().unwrap_or_default()
    }

    fn set_target_policy(&mut self, role: RoleId, target: Address, policy: TargetPolicy) {
        self.targets.insert((role, target), policy);
    }

    fn function_policy(&self, role: RoleId, target: Address, selector: Selector) -> Option<FunctionPolicy> {
        self.functions.get(&(role, target, selector)).cloned()
    }

    fn set_function_policy(&mut self, role: RoleId, target: Address, selector: Selector, policy: &FunctionPolicy) {
        self.functions.insert((role, target, selector), policy.clone());
    }

    fn multisend(&self) -> Address {
        self.multisend
    }

    fn set_multisend(&mut self, multisend: Address) {
        self.multisend = multisend;
    }
}

/// ERC-1155 style balances keyed by (account, role).
#[derive(Clone, Debug, Default)]
pub struct MemoryMembership {
    balances: BTreeMap<(Address, RoleId), U256>,
    unavailable: bool,
}

impl MemoryMembership {
    pub fn mint(&mut self, account: Address, role: RoleId, amount: U256) {
        let balance = self.balances.entry((account, role)).or_default();
        *balance = balance.saturating_add(amount);
    }

    pub fn burn(&mut self, account: Address, role: RoleId, amount: U256) {
        if let Some(balance) = self.balances.get_mut(&(account, role)) {
            *balance = balance.saturating_sub(amount);
        }
    }

    /// Make every lookup fail, as a reverting oracle would.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }
}

impl MembershipOracle for MemoryMembership {
    fn balance_of(&self, account: Address, role: RoleId) -> Result<U256, MembershipError> {
        if self.unavailable {
            return Err(MembershipError::CallFailed);
        }
        Ok(self.balances.get(&(account, role)).copied().unwrap_or_default())
    }
}
