//! Modifier call surface without the host.
//!
//! [`Modifier`] runs the owner-gated configuration calls against a [`ModifierConfig`] and any
//! [`PolicyStore`], taking arguments in their raw ABI form. The caller is checked before any
//! argument is decoded, so a non-owner always reverts with `NotOwner`. [`execute`] is the module
//! entry: decode, check, forward through an [`Executor`].
//!
//! The entrypoint in `roles_modifier` only loads and stores state around these calls and turns
//! the returned [`ModifierEvent`]s into logs.

use alloc::vec::Vec;

use alloy_sol_types::SolValue;
use stylus_sdk::alloy_primitives::{Address, U256};

use crate::{
    checker::{selector_of, Checker, Transaction},
    errors::{AdminError, AlreadyInitialized, AvatarCallFailed, InvalidEnumValue, InvalidInitParams, RolesError},
    registry::{ParameterTable, Registry},
    types::{
        Comparison, ExecutionOptions, MembershipOracle, Operation, ParameterType, PolicyStore, RoleId, RolesEvent,
        Selector,
    },
};

/// Scalar configuration of one modifier instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModifierConfig {
    pub initialized: bool,
    pub owner: Address,
    /// Account the modifier acts for.
    pub avatar: Address,
    /// Executor authorized calls are forwarded to.
    pub target: Address,
    /// ERC-1155 ledger whose balances define role membership.
    pub membership_oracle: Address,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModifierEvent {
    Setup {
        initiator: Address,
        owner: Address,
        avatar: Address,
        target: Address,
        membership_oracle: Address,
    },
    OwnershipTransferred {
        previous_owner: Address,
        new_owner: Address,
    },
    AvatarSet {
        previous_avatar: Address,
        new_avatar: Address,
    },
    TargetSet {
        previous_target: Address,
        new_target: Address,
    },
    Policy(RolesEvent),
    TransactionAuthorized {
        invoker: Address,
        role: RoleId,
        to: Address,
        value: U256,
        selector: Selector,
        operation: Operation,
    },
}

/// Executes authorized calls on behalf of the avatar.
///
/// `Err` carries the revert data of the executor call itself; a failed inner call is `Ok` with
/// `success = false`.
pub trait Executor {
    fn exec_transaction(&self, executor: Address, tx: &Transaction<'_>) -> Result<bool, Vec<u8>>;

    fn exec_transaction_return_data(
        &self,
        executor: Address,
        tx: &Transaction<'_>,
    ) -> Result<(bool, Vec<u8>), Vec<u8>>;
}

/// A module call as it arrives in calldata.
#[derive(Clone, Copy, Debug)]
pub struct ModuleCall<'a> {
    pub to: Address,
    pub value: U256,
    pub data: &'a [u8],
    pub operation: u8,
    pub role: RoleId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Execution {
    pub success: bool,
    /// Empty unless return data was requested.
    pub return_data: Vec<u8>,
    pub authorized: ModifierEvent,
}

pub struct Modifier<'a, S: ?Sized> {
    config: &'a mut ModifierConfig,
    tables: &'a mut S,
    caller: Address,
}

impl<'a, S: PolicyStore + ?Sized> Modifier<'a, S> {
    pub fn new(config: &'a mut ModifierConfig, tables: &'a mut S, caller: Address) -> Self {
        Self { config, tables, caller }
    }

    /// One-shot initializer; callable by anyone until it succeeds.
    ///
    /// `init_params` is `abi.encode(address owner, address avatar, address target, address membershipOracle)`.
    pub fn set_up(&mut self, init_params: &[u8]) -> Result<Vec<ModifierEvent>, RolesError> {
        if self.config.initialized {
            return Err(RolesError::AlreadyInitialized(AlreadyInitialized {}));
        }
        let (owner, avatar, target, membership_oracle) =
            <(Address, Address, Address, Address)>::abi_decode_params(init_params, true)
                .map_err(|_| RolesError::InvalidInitParams(InvalidInitParams {}))?;

        *self.config = ModifierConfig {
            initialized: true,
            owner,
            avatar,
            target,
            membership_oracle,
        };
        Ok(vec![
            ModifierEvent::Setup {
                initiator: self.caller,
                owner,
                avatar,
                target,
                membership_oracle,
            },
            ModifierEvent::OwnershipTransferred {
                previous_owner: Address::ZERO,
                new_owner: owner,
            },
        ])
    }

    pub fn transfer_ownership(&mut self, new_owner: Address) -> Result<ModifierEvent, RolesError> {
        self.ensure_owner()?;
        let previous_owner = core::mem::replace(&mut self.config.owner, new_owner);
        Ok(ModifierEvent::OwnershipTransferred {
            previous_owner,
            new_owner,
        })
    }

    pub fn set_avatar(&mut self, new_avatar: Address) -> Result<ModifierEvent, RolesError> {
        self.ensure_owner()?;
        let previous_avatar = core::mem::replace(&mut self.config.avatar, new_avatar);
        Ok(ModifierEvent::AvatarSet {
            previous_avatar,
            new_avatar,
        })
    }

    pub fn set_target(&mut self, new_target: Address) -> Result<ModifierEvent, RolesError> {
        self.ensure_owner()?;
        let previous_target = core::mem::replace(&mut self.config.target, new_target);
        Ok(ModifierEvent::TargetSet {
            previous_target,
            new_target,
        })
    }

    pub fn allow_target(&mut self, role: RoleId, target: Address, options: u8) -> Result<ModifierEvent, RolesError> {
        self.ensure_owner()?;
        let options = enum_arg::<ExecutionOptions>(options)?;
        let caller = self.caller;
        let event = self.registry().allow_target(caller, role, target, options)?;
        Ok(ModifierEvent::Policy(event))
    }

    pub fn revoke_target(&mut self, role: RoleId, target: Address) -> Result<ModifierEvent, RolesError> {
        self.ensure_owner()?;
        let caller = self.caller;
        let event = self.registry().revoke_target(caller, role, target)?;
        Ok(ModifierEvent::Policy(event))
    }

    pub fn scope_target(&mut self, role: RoleId, target: Address) -> Result<ModifierEvent, RolesError> {
        self.ensure_owner()?;
        let caller = self.caller;
        let event = self.registry().scope_target(caller, role, target)?;
        Ok(ModifierEvent::Policy(event))
    }

    pub fn scope_allow_function(
        &mut self,
        role: RoleId,
        target: Address,
        selector: Selector,
        options: u8,
    ) -> Result<ModifierEvent, RolesError> {
        self.ensure_owner()?;
        let options = enum_arg::<ExecutionOptions>(options)?;
        let caller = self.caller;
        let event = self
            .registry()
            .scope_allow_function(caller, role, target, selector, options)?;
        Ok(ModifierEvent::Policy(event))
    }

    pub fn scope_revoke_function(
        &mut self,
        role: RoleId,
        target: Address,
        selector: Selector,
    ) -> Result<ModifierEvent, RolesError> {
        self.ensure_owner()?;
        let caller = self.caller;
        let event = self.registry().scope_revoke_function(caller, role, target, selector)?;
        Ok(ModifierEvent::Policy(event))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn scope_function(
        &mut self,
        role: RoleId,
        target: Address,
        selector: Selector,
        is_scoped: &[bool],
        param_types: &[u8],
        comparisons: &[u8],
        comp_values: &[Vec<u8>],
        options: u8,
    ) -> Result<ModifierEvent, RolesError> {
        self.ensure_owner()?;
        let options = enum_arg::<ExecutionOptions>(options)?;
        let param_types = param_types
            .iter()
            .copied()
            .map(enum_arg::<ParameterType>)
            .collect::<Result<Vec<_>, _>>()?;
        let comparisons = comparisons
            .iter()
            .copied()
            .map(enum_arg::<Comparison>)
            .collect::<Result<Vec<_>, _>>()?;
        let table = ParameterTable {
            is_scoped,
            param_types: &param_types,
            comparisons: &comparisons,
            comp_values,
        };

        let caller = self.caller;
        let event = self
            .registry()
            .scope_function(caller, role, target, selector, table, options)?;
        Ok(ModifierEvent::Policy(event))
    }

    pub fn scope_function_execution_options(
        &mut self,
        role: RoleId,
        target: Address,
        selector: Selector,
        options: u8,
    ) -> Result<ModifierEvent, RolesError> {
        self.ensure_owner()?;
        let options = enum_arg::<ExecutionOptions>(options)?;
        let caller = self.caller;
        let event = self
            .registry()
            .scope_function_execution_options(caller, role, target, selector, options)?;
        Ok(ModifierEvent::Policy(event))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn scope_parameter(
        &mut self,
        role: RoleId,
        target: Address,
        selector: Selector,
        index: U256,
        param_type: u8,
        comparison: u8,
        comp_value: Vec<u8>,
    ) -> Result<ModifierEvent, RolesError> {
        self.ensure_owner()?;
        let index = index_arg(index)?;
        let param_type = enum_arg::<ParameterType>(param_type)?;
        let comparison = enum_arg::<Comparison>(comparison)?;
        let caller = self.caller;
        let event = self.registry().scope_parameter(
            caller, role, target, selector, index, param_type, comparison, comp_value,
        )?;
        Ok(ModifierEvent::Policy(event))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn scope_parameter_as_one_of(
        &mut self,
        role: RoleId,
        target: Address,
        selector: Selector,
        index: U256,
        param_type: u8,
        comp_values: Vec<Vec<u8>>,
    ) -> Result<ModifierEvent, RolesError> {
        self.ensure_owner()?;
        let index = index_arg(index)?;
        let param_type = enum_arg::<ParameterType>(param_type)?;
        let caller = self.caller;
        let event = self
            .registry()
            .scope_parameter_as_one_of(caller, role, target, selector, index, param_type, comp_values)?;
        Ok(ModifierEvent::Policy(event))
    }

    pub fn unscope_parameter(
        &mut self,
        role: RoleId,
        target: Address,
        selector: Selector,
        index: U256,
    ) -> Result<ModifierEvent, RolesError> {
        self.ensure_owner()?;
        let index = index_arg(index)?;
        let caller = self.caller;
        let event = self.registry().unscope_parameter(caller, role, target, selector, index)?;
        Ok(ModifierEvent::Policy(event))
    }

    /// Set the batch address whose payloads are unpacked and checked call by call.
    ///
    /// A call to the batch address still passes the target gates first, so the address must be
    /// cleared for each role that batches, usually with `allow_target(role, multisend, DelegateCall)`.
    pub fn set_multisend_address(&mut self, multisend: Address) -> Result<ModifierEvent, RolesError> {
        self.ensure_owner()?;
        let caller = self.caller;
        let event = self.registry().set_multisend(caller, multisend)?;
        Ok(ModifierEvent::Policy(event))
    }

    fn ensure_owner(&self) -> Result<(), RolesError> {
        let owner = self.config.owner;
        if owner == Address::ZERO || self.caller != owner {
            return Err(AdminError::NotOwner.into());
        }
        Ok(())
    }

    fn registry(&mut self) -> Registry<'_, S> {
        Registry::new(&mut *self.tables, self.config.owner)
    }
}

/// Decode `call` and check it for `invoker`; the dry run behind `checkTransaction`.
pub fn authorize<'d, S, M>(
    tables: &S,
    membership: &M,
    invoker: Address,
    call: &ModuleCall<'d>,
) -> Result<Transaction<'d>, RolesError>
where
    S: PolicyStore + ?Sized,
    M: MembershipOracle + ?Sized,
{
    let tx = Transaction {
        to: call.to,
        value: call.value,
        data: call.data,
        operation: enum_arg::<Operation>(call.operation)?,
    };
    Checker::new(tables, membership).check(invoker, call.role, &tx)?;
    Ok(tx)
}

/// Authorize `call` and forward it to `executor`.
pub fn execute<S, M, X>(
    tables: &S,
    membership: &M,
    forwarder: &X,
    executor: Address,
    invoker: Address,
    call: &ModuleCall<'_>,
    with_return_data: bool,
) -> Result<Execution, RolesError>
where
    S: PolicyStore + ?Sized,
    M: MembershipOracle + ?Sized,
    X: Executor + ?Sized,
{
    let tx = authorize(tables, membership, invoker, call)?;
    let forwarded = if with_return_data {
        forwarder.exec_transaction_return_data(executor, &tx)
    } else {
        forwarder
            .exec_transaction(executor, &tx)
            .map(|success| (success, Vec::new()))
    };
    let (success, return_data) =
        forwarded.map_err(|reason| RolesError::AvatarCallFailed(AvatarCallFailed { reason: reason.into() }))?;

    Ok(Execution {
        success,
        return_data,
        authorized: ModifierEvent::TransactionAuthorized {
            invoker,
            role: call.role,
            to: tx.to,
            value: tx.value,
            selector: selector_of(tx.data),
            operation: tx.operation,
        },
    })
}

fn enum_arg<T: TryFrom<u8>>(value: u8) -> Result<T, RolesError> {
    T::try_from(value).map_err(|_| RolesError::InvalidEnumValue(InvalidEnumValue { value }))
}

fn index_arg(index: U256) -> Result<usize, RolesError> {
    usize::try_from(index).map_err(|_| AdminError::ScopeMaxParametersExceeded.into())
}
