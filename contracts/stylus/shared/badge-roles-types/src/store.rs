use alloy_primitives::Address;

use crate::policy::{FunctionPolicy, RoleId, Selector, TargetPolicy};

/// Persistence seam for the policy tables.
///
/// Reads never fail: a record that was never written reads back as its default
/// (`Clearance::Denied` target, absent function policy), which is always the most restrictive
/// interpretation.
pub trait PolicyStore {
    fn target_policy(&self, role: RoleId, target: Address) -> TargetPolicy;

    fn set_target_policy(&mut self, role: RoleId, target: Address, policy: TargetPolicy);

    fn function_policy(&self, role: RoleId, target: Address, selector: Selector) -> Option<FunctionPolicy>;

    fn set_function_policy(
        &mut self,
        role: RoleId,
        target: Address,
        selector: Selector,
        policy: &FunctionPolicy,
    );

    /// Address whose calls are unpacked as a batch of sub-transactions (`Address::ZERO` = unset).
    fn multisend(&self) -> Address;

    fn set_multisend(&mut self, multisend: Address);
}
