//! Badge Roles modifier for Arbitrum Stylus.
//!
//! Lets holders of an ERC-1155 badge execute transactions through a Safe-style avatar, limited
//! by per-role target, function and parameter policies.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
#![cfg_attr(not(any(test, feature = "export-abi")), no_std)]

#[macro_use]
extern crate alloc;

pub mod avatar;
pub mod checker;
pub mod decoder;
pub mod errors;
pub mod evaluator;
pub mod membership;
pub mod modifier;
pub mod multisend;
pub mod registry;
pub mod roles_modifier;
pub mod storage;
pub mod types;
pub mod utils;

pub use roles_modifier::BadgeRoles;
