//! Shared policy model for the Badge Roles modifier.
//!
//! Everything here is storage-agnostic: the Stylus contract persists these records in
//! `sol_storage!` tables, while tests and off-chain tooling keep them in memory.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod events;
pub mod membership;
pub mod policy;
pub mod store;

pub use events::RolesEvent;
pub use membership::{MembershipError, MembershipOracle};
pub use policy::{
    Clearance, Comparison, ExecutionOptions, FunctionPolicy, Operation, ParameterPolicy,
    ParameterType, RoleId, Selector, TargetPolicy, MAX_PARAMETERS,
};
pub use store::PolicyStore;
