use alloy_primitives::{Address, U256};
use badge_roles_types::Operation;

/// One entry of a `multiSend(bytes)` batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiSendTx {
    pub operation: Operation,
    pub to: Address,
    pub value: U256,
    pub data: Vec<u8>,
}

impl MultiSendTx {
    pub fn call(to: Address, data: Vec<u8>) -> Self {
        Self {
            operation: Operation::Call,
            to,
            value: U256::ZERO,
            data,
        }
    }
}
