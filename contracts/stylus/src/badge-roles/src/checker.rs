//! Permission checking for a single module call.
//!
//! Gates run in a fixed order and the first failure wins: membership, selector length, target
//! clearance, then one of three branches.
//! - Batch address: the target's execution options, then every sub-transaction in order.
//! - `TargetAllowed`: the target's execution options.
//! - `FunctionScoped`: the selector must be allowed; its own execution options apply, then each
//!   scoped parameter.
//!
//! The checker only reads policy state.

use stylus_sdk::alloy_primitives::{Address, FixedBytes, U256};

use crate::{
    decoder::{decode_parameter, SELECTOR_LEN},
    errors::PermissionError,
    evaluator::compare,
    multisend,
    types::{Clearance, ExecutionOptions, MembershipOracle, Operation, PolicyStore, RoleId, Selector},
};

/// Maximum number of nested batch payloads a single call may carry.
pub const MAX_BATCH_DEPTH: usize = 8;

/// A call as requested by the invoker (or unpacked from a batch).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transaction<'a> {
    pub to: Address,
    pub value: U256,
    pub data: &'a [u8],
    pub operation: Operation,
}

pub struct Checker<'a, S: ?Sized, M: ?Sized> {
    store: &'a S,
    membership: &'a M,
}

impl<'a, S, M> Checker<'a, S, M>
where
    S: PolicyStore + ?Sized,
    M: MembershipOracle + ?Sized,
{
    pub fn new(store: &'a S, membership: &'a M) -> Self {
        Self { store, membership }
    }

    /// Decide whether `invoker`, acting as `role`, may perform `tx`.
    pub fn check(&self, invoker: Address, role: RoleId, tx: &Transaction<'_>) -> Result<(), PermissionError> {
        if !self.membership.is_member(invoker, role)? {
            return Err(PermissionError::NoMembership);
        }
        self.check_transaction(role, tx, 0)
    }

    fn check_transaction(&self, role: RoleId, tx: &Transaction<'_>, depth: usize) -> Result<(), PermissionError> {
        if !tx.data.is_empty() && tx.data.len() < SELECTOR_LEN {
            return Err(PermissionError::FunctionSignatureTooShort);
        }

        let target = self.store.target_policy(role, tx.to);
        if target.clearance == Clearance::Denied {
            return Err(PermissionError::TargetAddressNotAllowed);
        }

        let multisend = self.store.multisend();
        if multisend != Address::ZERO && tx.to == multisend {
            check_execution_options(target.options, tx)?;
            return self.check_batch(role, tx.data, depth);
        }

        match target.clearance {
            Clearance::TargetAllowed => check_execution_options(target.options, tx),
            // The function's own options stand in for the target's.
            Clearance::FunctionScoped => self.check_function(role, tx),
            Clearance::Denied => Err(PermissionError::TargetAddressNotAllowed),
        }
    }

    fn check_batch(&self, role: RoleId, data: &[u8], depth: usize) -> Result<(), PermissionError> {
        if depth >= MAX_BATCH_DEPTH {
            return Err(PermissionError::BatchTooDeep);
        }
        for sub in multisend::transactions(data)? {
            self.check_transaction(role, &sub?, depth + 1)?;
        }
        Ok(())
    }

    fn check_function(&self, role: RoleId, tx: &Transaction<'_>) -> Result<(), PermissionError> {
        let function = self
            .store
            .function_policy(role, tx.to, selector_of(tx.data))
            .filter(|function| function.allowed)
            .ok_or(PermissionError::FunctionNotAllowed)?;

        check_execution_options(function.options, tx)?;

        for (index, parameter) in function.scoped_parameters() {
            let actual = decode_parameter(tx.data, index, parameter.param_type)?;
            compare(parameter.comparison, actual, &parameter.comp_values)?;
        }
        Ok(())
    }
}

fn check_execution_options(options: ExecutionOptions, tx: &Transaction<'_>) -> Result<(), PermissionError> {
    if tx.operation == Operation::DelegateCall && !options.can_delegate_call() {
        return Err(PermissionError::DelegateCallNotAllowed);
    }
    if tx.value > U256::ZERO && !options.can_send() {
        return Err(PermissionError::SendNotAllowed);
    }
    Ok(())
}

/// Selector of `data`; empty calldata (plain value transfer) maps to `0x00000000`.
pub fn selector_of(data: &[u8]) -> Selector {
    match data.get(..SELECTOR_LEN) {
        Some(selector) => FixedBytes::from_slice(selector),
        None => Selector::ZERO,
    }
}
