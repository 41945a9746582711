use alloc::vec::Vec;

use alloy_primitives::Address;

use crate::policy::{ExecutionOptions, ParameterPolicy, RoleId, Selector, TargetPolicy};

/// Observable record of a registry mutation.
///
/// Each variant carries the post-mutation state of the record it touched, so a projector can
/// rebuild the policy tables from the event stream alone. Target-level variants also carry the
/// record as it was before the write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RolesEvent {
    AllowTarget {
        role: RoleId,
        target: Address,
        previous: TargetPolicy,
        options: ExecutionOptions,
    },
    RevokeTarget {
        role: RoleId,
        target: Address,
        previous: TargetPolicy,
    },
    ScopeTarget {
        role: RoleId,
        target: Address,
        previous: TargetPolicy,
        options: ExecutionOptions,
    },
    ScopeAllowFunction {
        role: RoleId,
        target: Address,
        selector: Selector,
        options: ExecutionOptions,
    },
    ScopeRevokeFunction {
        role: RoleId,
        target: Address,
        selector: Selector,
    },
    ScopeFunction {
        role: RoleId,
        target: Address,
        selector: Selector,
        parameters: Vec<ParameterPolicy>,
        options: ExecutionOptions,
    },
    ScopeFunctionExecutionOptions {
        role: RoleId,
        target: Address,
        selector: Selector,
        options: ExecutionOptions,
    },
    ScopeParameter {
        role: RoleId,
        target: Address,
        selector: Selector,
        index: usize,
        parameter: ParameterPolicy,
    },
    ScopeParameterAsOneOf {
        role: RoleId,
        target: Address,
        selector: Selector,
        index: usize,
        parameter: ParameterPolicy,
    },
    UnscopeParameter {
        role: RoleId,
        target: Address,
        selector: Selector,
        index: usize,
    },
    SetMultisendAddress {
        multisend: Address,
    },
}
