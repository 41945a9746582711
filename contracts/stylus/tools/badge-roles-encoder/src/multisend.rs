use alloy_primitives::{Bytes, U256};
use alloy_sol_types::{sol, SolCall};

use crate::types::MultiSendTx;

sol! {
    function multiSend(bytes transactions);
}

/// `multiSend(bytes)`
pub const MULTISEND_SELECTOR: [u8; 4] = multiSendCall::SELECTOR;

/// Packed batch payload: `u8 operation || address to || uint256 value || uint256 len || data`
/// per entry, no padding between entries.
pub fn encode_multisend_transactions(txs: &[MultiSendTx]) -> Vec<u8> {
    let mut buf = Vec::new();
    for tx in txs {
        buf.push(tx.operation as u8);
        buf.extend_from_slice(tx.to.as_slice());
        buf.extend_from_slice(&tx.value.to_be_bytes::<32>());
        buf.extend_from_slice(&U256::from(tx.data.len()).to_be_bytes::<32>());
        buf.extend_from_slice(&tx.data);
    }
    buf
}

/// Calldata for `multiSend(bytes)`; the payload offset is the canonical `0x20`.
pub fn encode_multisend_call(txs: &[MultiSendTx]) -> Vec<u8> {
    multiSendCall {
        transactions: Bytes::from(encode_multisend_transactions(txs)),
    }
    .abi_encode()
}
