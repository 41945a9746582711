//! Batch (Gnosis `MultiSend`) payload walking.
//!
//! Calldata layout for `multiSend(bytes transactions)`:
//! - bytes4 selector
//! - uint256 offset of `transactions` (must be exactly 0x20)
//! - uint256 length of `transactions`
//! - `transactions`: packed sub-transactions, no padding between entries
//!
//! Each packed sub-transaction:
//! - uint8 operation (0 = call, 1 = delegatecall)
//! - address to (20 bytes)
//! - uint256 value
//! - uint256 data length
//! - bytes data

use stylus_sdk::alloy_primitives::U256;

use crate::{
    checker::Transaction,
    decoder::SELECTOR_LEN,
    errors::PermissionError,
    types::Operation,
    utils::bytes::{read_address, read_slice, read_u256_be, read_u8, u256_to_usize},
};

/// The only accepted offset for the `transactions` argument.
pub const MULTISEND_DATA_OFFSET: U256 = U256::from_limbs([32, 0, 0, 0]);

/// Validate the `multiSend(bytes)` envelope and return an iterator over its sub-transactions.
pub fn transactions(data: &[u8]) -> Result<Transactions<'_>, PermissionError> {
    let mut i = SELECTOR_LEN;
    let offset = read_u256_be(data, &mut i).map_err(|_| PermissionError::OutOfBounds)?;
    // A non-canonical offset could make the payload we validate differ from the one executed.
    if offset != MULTISEND_DATA_OFFSET {
        return Err(PermissionError::UnacceptableMultiSendOffset);
    }
    let len = read_u256_be(data, &mut i)
        .and_then(u256_to_usize)
        .map_err(|_| PermissionError::OutOfBounds)?;
    let payload = read_slice(data, &mut i, len).map_err(|_| PermissionError::OutOfBounds)?;

    Ok(Transactions { payload, cursor: 0 })
}

/// Sub-transactions in payload order. Yields at most one error, then stops.
pub struct Transactions<'a> {
    payload: &'a [u8],
    cursor: usize,
}

impl<'a> Transactions<'a> {
    fn read_next(&mut self) -> Result<Transaction<'a>, PermissionError> {
        let bytes = self.payload;
        let i = &mut self.cursor;
        let oob = |_| PermissionError::OutOfBounds;

        let operation = read_u8(bytes, i).map_err(oob)?;
        let operation = Operation::try_from(operation).map_err(|_| PermissionError::InvalidOperation)?;
        let to = read_address(bytes, i).map_err(oob)?;
        let value = read_u256_be(bytes, i).map_err(oob)?;
        let data_len = read_u256_be(bytes, i).and_then(u256_to_usize).map_err(oob)?;
        let data = read_slice(bytes, i, data_len).map_err(oob)?;

        Ok(Transaction {
            to,
            value,
            data,
            operation,
        })
    }
}

impl<'a> Iterator for Transactions<'a> {
    type Item = Result<Transaction<'a>, PermissionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.payload.len() {
            return None;
        }
        let item = self.read_next();
        if item.is_err() {
            self.cursor = self.payload.len();
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use badge_roles_encoder::{encode_multisend_call, MultiSendTx};
    use stylus_sdk::alloy_primitives::address;

    fn sample() -> Vec<MultiSendTx> {
        vec![
            MultiSendTx {
                operation: Operation::Call,
                to: address!("00000000000000000000000000000000000000aa"),
                value: U256::from(5u64),
                data: vec![0x40, 0xc1, 0x0f, 0x19, 0x01],
            },
            MultiSendTx {
                operation: Operation::DelegateCall,
                to: address!("00000000000000000000000000000000000000bb"),
                value: U256::ZERO,
                data: Vec::new(),
            },
        ]
    }

    #[test]
    fn walks_sub_transactions_in_order() {
        let data = encode_multisend_call(&sample());
        let txs: Vec<_> = transactions(&data).unwrap().collect::<Result<_, _>>().unwrap();

        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].to, address!("00000000000000000000000000000000000000aa"));
        assert_eq!(txs[0].value, U256::from(5u64));
        assert_eq!(txs[0].data, &[0x40, 0xc1, 0x0f, 0x19, 0x01]);
        assert_eq!(txs[0].operation, Operation::Call);
        assert_eq!(txs[1].operation, Operation::DelegateCall);
        assert!(txs[1].data.is_empty());
    }

    #[test]
    fn rejects_non_canonical_offset() {
        let mut data = encode_multisend_call(&sample());
        data[4 + 31] = 0x21;

        assert!(matches!(
            transactions(&data),
            Err(PermissionError::UnacceptableMultiSendOffset)
        ));
    }

    #[test]
    fn rejects_payload_length_past_end() {
        let mut data = encode_multisend_call(&sample());
        data[4 + 32 + 30] = 0xff;

        assert!(matches!(transactions(&data), Err(PermissionError::OutOfBounds)));
        assert!(matches!(transactions(&[0u8; 10]), Err(PermissionError::OutOfBounds)));
    }

    #[test]
    fn truncated_sub_transaction_stops_iteration() {
        let mut txs = sample();
        txs.truncate(1);
        let data = encode_multisend_call(&txs);
        let payload_len = 1 + 20 + 32 + 32 + 5;
        // Claim one byte more than the packed entry actually carries.
        let mut tampered = data[..4 + 32].to_vec();
        tampered.extend_from_slice(&U256::from(payload_len - 1).to_be_bytes::<32>());
        tampered.extend_from_slice(&data[4 + 64..4 + 64 + payload_len - 1]);

        let mut iter = transactions(&tampered).unwrap();
        assert_eq!(iter.next().unwrap().unwrap_err(), PermissionError::OutOfBounds);
        assert!(iter.next().is_none());
    }

    #[test]
    fn rejects_unknown_operation_byte() {
        let mut data = encode_multisend_call(&sample());
        data[4 + 64] = 2;

        let mut iter = transactions(&data).unwrap();
        assert_eq!(iter.next().unwrap().unwrap_err(), PermissionError::InvalidOperation);
    }
}
