//! Policy model shared with off-chain tooling.

pub use badge_roles_types::{
    Clearance, Comparison, ExecutionOptions, FunctionPolicy, MembershipError, MembershipOracle,
    Operation, ParameterPolicy, ParameterType, PolicyStore, RoleId, RolesEvent, Selector,
    TargetPolicy, MAX_PARAMETERS,
};
