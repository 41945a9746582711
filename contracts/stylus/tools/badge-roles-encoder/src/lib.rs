//! Off-chain builders for the byte strings the Badge Roles modifier consumes.

pub mod encoder;
pub mod multisend;
pub mod types;


pub use encoder::*;
pub use multisend::{encode_multisend_call, encode_multisend_transactions, MULTISEND_SELECTOR};
pub use types::MultiSendTx;

pub use badge_roles_types::{Comparison, ExecutionOptions, Operation, ParameterPolicy, ParameterType};
