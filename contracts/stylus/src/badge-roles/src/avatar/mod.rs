//! Forwarding of authorized calls to the executor (a Safe-style avatar).
//!
//! The modifier forwards to its configured `target`, which is the avatar itself or another
//! modifier in front of it. Inner-call failure comes back as `success = false`; only a revert of
//! the executor call itself is an error, carrying the raw revert data.

pub mod constants;
pub mod interfaces;

use alloc::vec::Vec;

use alloy_sol_types::SolCall;
use stylus_sdk::{
    alloy_primitives::{Address, Bytes},
    call::RawCall,
};

use crate::{checker::Transaction, modifier::Executor};

use self::interfaces::IAvatar;

/// Forwards through the Zodiac module interface of the executor contract.
#[derive(Clone, Copy, Debug, Default)]
pub struct AvatarExecutor;

impl Executor for AvatarExecutor {
    /// `execTransactionFromModule`; returns the avatar's success flag.
    fn exec_transaction(&self, executor: Address, tx: &Transaction<'_>) -> Result<bool, Vec<u8>> {
        let call = IAvatar::execTransactionFromModuleCall {
            to: tx.to,
            value: tx.value,
            data: Bytes::copy_from_slice(tx.data),
            operation: tx.operation as u8,
        };
        let out = forward(executor, &call.abi_encode())?;
        match IAvatar::execTransactionFromModuleCall::abi_decode_returns(&out, true) {
            Ok(ret) => Ok(ret.success),
            Err(_) => Err(out),
        }
    }

    /// `execTransactionFromModuleReturnData`; returns the success flag and the inner return data.
    fn exec_transaction_return_data(
        &self,
        executor: Address,
        tx: &Transaction<'_>,
    ) -> Result<(bool, Vec<u8>), Vec<u8>> {
        let call = IAvatar::execTransactionFromModuleReturnDataCall {
            to: tx.to,
            value: tx.value,
            data: Bytes::copy_from_slice(tx.data),
            operation: tx.operation as u8,
        };
        let out = forward(executor, &call.abi_encode())?;
        match IAvatar::execTransactionFromModuleReturnDataCall::abi_decode_returns(&out, true) {
            Ok(ret) => Ok((ret.success, ret.returnData.to_vec())),
            Err(_) => Err(out),
        }
    }
}

fn forward(executor: Address, calldata: &[u8]) -> Result<Vec<u8>, Vec<u8>> {
    // Value stays with the avatar; it is part of the forwarded transaction, not of this call.
    unsafe { RawCall::new().call(executor, calldata) }
}
