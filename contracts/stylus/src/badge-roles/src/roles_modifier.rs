//! Stylus entrypoint: a Zodiac-style roles modifier gated by ERC-1155 badges.
//!
//! Design notes:
//! - Each call loads [`ModifierConfig`] from storage, runs on [`Modifier`] or [`modifier::execute`],
//!   then stores the config back if it changed. Policy tables are written in place.
//! - Target-level events carry the replaced record; function-level events carry the full new one.
//! - Authorized calls are forwarded to `target` (the avatar, or the next modifier in a chain).

use alloc::vec::Vec;

use alloy_sol_types::sol;
use stylus_sdk::{
    abi::Bytes,
    alloy_primitives::{Address, FixedBytes, U256},
    prelude::*,
    stylus_core::log,
};

use crate::{
    avatar::{constants::MEMBERSHIP_GAS_CAP, AvatarExecutor},
    errors::RolesError,
    membership::BadgerMembership,
    modifier::{self, Execution, Modifier, ModifierConfig, ModifierEvent, ModuleCall},
    storage::PolicyTables,
    types::{PolicyStore, RolesEvent},
};

sol! {
    event RolesModSetup(
        address indexed initiator,
        address indexed owner,
        address indexed avatar,
        address target,
        address membershipOracle
    );
    event OwnershipTransferred(address indexed previousOwner, address indexed newOwner);
    event AvatarSet(address indexed previousAvatar, address indexed newAvatar);
    event TargetSet(address indexed previousTarget, address indexed newTarget);

    // Target-level events also carry the record they replaced.
    event AllowTarget(
        uint256 indexed role,
        address indexed targetAddress,
        uint8 options,
        uint8 previousClearance,
        uint8 previousOptions
    );
    event RevokeTarget(
        uint256 indexed role,
        address indexed targetAddress,
        uint8 previousClearance,
        uint8 previousOptions
    );
    event ScopeTarget(
        uint256 indexed role,
        address indexed targetAddress,
        uint8 options,
        uint8 previousClearance,
        uint8 previousOptions
    );
    event ScopeAllowFunction(uint256 indexed role, address indexed targetAddress, bytes4 selector, uint8 options);
    event ScopeRevokeFunction(uint256 indexed role, address indexed targetAddress, bytes4 selector);
    event ScopeFunction(
        uint256 indexed role,
        address indexed targetAddress,
        bytes4 functionSig,
        bool[] isParamScoped,
        uint8[] paramType,
        uint8[] paramComp,
        bytes[] compValue,
        uint8 options
    );
    event ScopeFunctionExecutionOptions(
        uint256 indexed role,
        address indexed targetAddress,
        bytes4 functionSig,
        uint8 options
    );
    event ScopeParameter(
        uint256 indexed role,
        address indexed targetAddress,
        bytes4 functionSig,
        uint256 index,
        uint8 paramType,
        uint8 paramComp,
        bytes compValue
    );
    event ScopeParameterAsOneOf(
        uint256 indexed role,
        address indexed targetAddress,
        bytes4 functionSig,
        uint256 index,
        uint8 paramType,
        bytes[] compValues
    );
    event UnscopeParameter(uint256 indexed role, address indexed targetAddress, bytes4 functionSig, uint256 index);
    event SetMultisendAddress(address multisendAddress);

    event TransactionAuthorized(
        address indexed invoker,
        uint256 indexed role,
        address indexed to,
        uint256 value,
        bytes4 selector,
        uint8 operation
    );
}

sol_storage! {
    #[entrypoint]
    pub struct BadgeRoles {
        /// Set once by `setUp`.
        bool initialized;

        address owner;
        /// Account the modifier acts for.
        address avatar;
        /// Executor authorized calls are forwarded to.
        address target;
        /// ERC-1155 ledger whose balances define role membership.
        address membership_oracle;

        PolicyTables tables;
    }
}

#[public]
impl BadgeRoles {
    /// One-shot initializer.
    ///
    /// `init_params` is `abi.encode(address owner, address avatar, address target, address membershipOracle)`.
    pub fn set_up(&mut self, init_params: Bytes) -> Result<(), RolesError> {
        let events = self.admin(|modifier| modifier.set_up(init_params.as_slice()))?;
        for event in events {
            self.emit(event);
        }
        Ok(())
    }

    pub fn owner(&self) -> Address {
        self.owner.get()
    }

    pub fn avatar(&self) -> Address {
        self.avatar.get()
    }

    pub fn target(&self) -> Address {
        self.target.get()
    }

    pub fn membership_oracle(&self) -> Address {
        self.membership_oracle.get()
    }

    pub fn multisend(&self) -> Address {
        self.tables.multisend()
    }

    pub fn transfer_ownership(&mut self, new_owner: Address) -> Result<(), RolesError> {
        let event = self.admin(|modifier| modifier.transfer_ownership(new_owner))?;
        self.emit(event);
        Ok(())
    }

    pub fn set_avatar(&mut self, avatar: Address) -> Result<(), RolesError> {
        let event = self.admin(|modifier| modifier.set_avatar(avatar))?;
        self.emit(event);
        Ok(())
    }

    pub fn set_target(&mut self, target: Address) -> Result<(), RolesError> {
        let event = self.admin(|modifier| modifier.set_target(target))?;
        self.emit(event);
        Ok(())
    }

    /// `(clearance, options)` for `(role, target)`.
    pub fn target_policy(&self, role: U256, target: Address) -> (u8, u8) {
        let policy = self.tables.target_policy(role, target);
        (policy.clearance as u8, policy.options as u8)
    }

    pub fn allow_target(&mut self, role: U256, target: Address, options: u8) -> Result<(), RolesError> {
        let event = self.admin(|modifier| modifier.allow_target(role, target, options))?;
        self.emit(event);
        Ok(())
    }

    pub fn revoke_target(&mut self, role: U256, target: Address) -> Result<(), RolesError> {
        let event = self.admin(|modifier| modifier.revoke_target(role, target))?;
        self.emit(event);
        Ok(())
    }

    pub fn scope_target(&mut self, role: U256, target: Address) -> Result<(), RolesError> {
        let event = self.admin(|modifier| modifier.scope_target(role, target))?;
        self.emit(event);
        Ok(())
    }

    pub fn scope_allow_function(
        &mut self,
        role: U256,
        target: Address,
        selector: FixedBytes<4>,
        options: u8,
    ) -> Result<(), RolesError> {
        let event = self.admin(|modifier| modifier.scope_allow_function(role, target, selector, options))?;
        self.emit(event);
        Ok(())
    }

    pub fn scope_revoke_function(
        &mut self,
        role: U256,
        target: Address,
        selector: FixedBytes<4>,
    ) -> Result<(), RolesError> {
        let event = self.admin(|modifier| modifier.scope_revoke_function(role, target, selector))?;
        self.emit(event);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn scope_function(
        &mut self,
        role: U256,
        target: Address,
        selector: FixedBytes<4>,
        is_scoped: Vec<bool>,
        param_types: Vec<u8>,
        comparisons: Vec<u8>,
        comp_values: Vec<Bytes>,
        options: u8,
    ) -> Result<(), RolesError> {
        let comp_values: Vec<Vec<u8>> = comp_values.into_iter().map(|value| value.0).collect();
        let event = self.admin(|modifier| {
            modifier.scope_function(
                role,
                target,
                selector,
                &is_scoped,
                &param_types,
                &comparisons,
                &comp_values,
                options,
            )
        })?;
        self.emit(event);
        Ok(())
    }

    pub fn scope_function_execution_options(
        &mut self,
        role: U256,
        target: Address,
        selector: FixedBytes<4>,
        options: u8,
    ) -> Result<(), RolesError> {
        let event =
            self.admin(|modifier| modifier.scope_function_execution_options(role, target, selector, options))?;
        self.emit(event);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn scope_parameter(
        &mut self,
        role: U256,
        target: Address,
        selector: FixedBytes<4>,
        index: U256,
        param_type: u8,
        comparison: u8,
        comp_value: Bytes,
    ) -> Result<(), RolesError> {
        let event = self.admin(|modifier| {
            modifier.scope_parameter(role, target, selector, index, param_type, comparison, comp_value.0)
        })?;
        self.emit(event);
        Ok(())
    }

    pub fn scope_parameter_as_one_of(
        &mut self,
        role: U256,
        target: Address,
        selector: FixedBytes<4>,
        index: U256,
        param_type: u8,
        comp_values: Vec<Bytes>,
    ) -> Result<(), RolesError> {
        let comp_values = comp_values.into_iter().map(|value| value.0).collect();
        let event = self.admin(|modifier| {
            modifier.scope_parameter_as_one_of(role, target, selector, index, param_type, comp_values)
        })?;
        self.emit(event);
        Ok(())
    }

    pub fn unscope_parameter(
        &mut self,
        role: U256,
        target: Address,
        selector: FixedBytes<4>,
        index: U256,
    ) -> Result<(), RolesError> {
        let event = self.admin(|modifier| modifier.unscope_parameter(role, target, selector, index))?;
        self.emit(event);
        Ok(())
    }

    /// Set the batch address whose payloads are unpacked and checked call by call.
    ///
    /// Calls to the batch address pass the target and option gates before unpacking, so each role
    /// that batches also needs `allowTarget(role, multisend, DelegateCall)`.
    pub fn set_multisend_address(&mut self, multisend: Address) -> Result<(), RolesError> {
        let event = self.admin(|modifier| modifier.set_multisend_address(multisend))?;
        self.emit(event);
        Ok(())
    }

    /// Dry run of the permission check for `invoker`; reverts with the specific denial.
    pub fn check_transaction(
        &self,
        invoker: Address,
        to: Address,
        value: U256,
        data: Bytes,
        operation: u8,
        role: U256,
    ) -> Result<(), RolesError> {
        let call = ModuleCall {
            to,
            value,
            data: &data,
            operation,
            role,
        };
        modifier::authorize(&self.tables, &self.membership(), invoker, &call)?;
        Ok(())
    }

    /// Check the caller's permission for `role` and forward the call to `target`.
    pub fn exec_transaction_from_module(
        &mut self,
        to: Address,
        value: U256,
        data: Bytes,
        operation: u8,
        role: U256,
    ) -> Result<bool, RolesError> {
        let call = ModuleCall {
            to,
            value,
            data: &data,
            operation,
            role,
        };
        Ok(self.execute(&call, false)?.success)
    }

    /// As `exec_transaction_from_module`, also returning the inner call's return data.
    pub fn exec_transaction_from_module_return_data(
        &mut self,
        to: Address,
        value: U256,
        data: Bytes,
        operation: u8,
        role: U256,
    ) -> Result<(bool, Bytes), RolesError> {
        let call = ModuleCall {
            to,
            value,
            data: &data,
            operation,
            role,
        };
        let execution = self.execute(&call, true)?;
        Ok((execution.success, Bytes(execution.return_data)))
    }
}

impl BadgeRoles {
    fn config(&self) -> ModifierConfig {
        ModifierConfig {
            initialized: self.initialized.get(),
            owner: self.owner.get(),
            avatar: self.avatar.get(),
            target: self.target.get(),
            membership_oracle: self.membership_oracle.get(),
        }
    }

    fn save_config(&mut self, config: &ModifierConfig) {
        self.initialized.set(config.initialized);
        self.owner.set(config.owner);
        self.avatar.set(config.avatar);
        self.target.set(config.target);
        self.membership_oracle.set(config.membership_oracle);
    }

    /// Run an owner-gated call; the config is written back only when it changed.
    fn admin<T>(
        &mut self,
        call: impl FnOnce(&mut Modifier<'_, PolicyTables>) -> Result<T, RolesError>,
    ) -> Result<T, RolesError> {
        let caller = self.vm().msg_sender();
        let before = self.config();
        let mut config = before;
        let out = call(&mut Modifier::new(&mut config, &mut self.tables, caller))?;
        if config != before {
            self.save_config(&config);
        }
        Ok(out)
    }

    fn membership(&self) -> BadgerMembership {
        BadgerMembership::new(self.membership_oracle.get(), MEMBERSHIP_GAS_CAP)
    }

    fn execute(&mut self, call: &ModuleCall<'_>, with_return_data: bool) -> Result<Execution, RolesError> {
        let invoker = self.vm().msg_sender();
        let execution = modifier::execute(
            &self.tables,
            &self.membership(),
            &AvatarExecutor,
            self.target.get(),
            invoker,
            call,
            with_return_data,
        )?;
        self.emit(execution.authorized.clone());
        Ok(execution)
    }

    fn emit(&self, event: ModifierEvent) {
        let vm = self.vm();
        match event {
            ModifierEvent::Setup {
                initiator,
                owner,
                avatar,
                target,
                membership_oracle,
            } => log(
                vm,
                RolesModSetup {
                    initiator,
                    owner,
                    avatar,
                    target,
                    membershipOracle: membership_oracle,
                },
            ),
            ModifierEvent::OwnershipTransferred {
                previous_owner,
                new_owner,
            } => log(
                vm,
                OwnershipTransferred {
                    previousOwner: previous_owner,
                    newOwner: new_owner,
                },
            ),
            ModifierEvent::AvatarSet {
                previous_avatar,
                new_avatar,
            } => log(
                vm,
                AvatarSet {
                    previousAvatar: previous_avatar,
                    newAvatar: new_avatar,
                },
            ),
            ModifierEvent::TargetSet {
                previous_target,
                new_target,
            } => log(
                vm,
                TargetSet {
                    previousTarget: previous_target,
                    newTarget: new_target,
                },
            ),
            ModifierEvent::Policy(event) => self.emit_policy(event),
            ModifierEvent::TransactionAuthorized {
                invoker,
                role,
                to,
                value,
                selector,
                operation,
            } => log(
                vm,
                TransactionAuthorized {
                    invoker,
                    role,
                    to,
                    value,
                    selector,
                    operation: operation as u8,
                },
            ),
        }
    }

    fn emit_policy(&self, event: RolesEvent) {
        let vm = self.vm();
        match event {
            RolesEvent::AllowTarget {
                role,
                target,
                previous,
                options,
            } => log(
                vm,
                AllowTarget {
                    role,
                    targetAddress: target,
                    options: options as u8,
                    previousClearance: previous.clearance as u8,
                    previousOptions: previous.options as u8,
                },
            ),
            RolesEvent::RevokeTarget { role, target, previous } => log(
                vm,
                RevokeTarget {
                    role,
                    targetAddress: target,
                    previousClearance: previous.clearance as u8,
                    previousOptions: previous.options as u8,
                },
            ),
            RolesEvent::ScopeTarget {
                role,
                target,
                previous,
                options,
            } => log(
                vm,
                ScopeTarget {
                    role,
                    targetAddress: target,
                    options: options as u8,
                    previousClearance: previous.clearance as u8,
                    previousOptions: previous.options as u8,
                },
            ),
            RolesEvent::ScopeAllowFunction {
                role,
                target,
                selector,
                options,
            } => log(
                vm,
                ScopeAllowFunction {
                    role,
                    targetAddress: target,
                    selector,
                    options: options as u8,
                },
            ),
            RolesEvent::ScopeRevokeFunction { role, target, selector } => log(
                vm,
                ScopeRevokeFunction {
                    role,
                    targetAddress: target,
                    selector,
                },
            ),
            RolesEvent::ScopeFunction {
                role,
                target,
                selector,
                parameters,
                options,
            } => log(
                vm,
                ScopeFunction {
                    role,
                    targetAddress: target,
                    functionSig: selector,
                    isParamScoped: parameters.iter().map(|p| p.is_scoped).collect(),
                    paramType: parameters.iter().map(|p| p.param_type as u8).collect(),
                    paramComp: parameters.iter().map(|p| p.comparison as u8).collect(),
                    compValue: parameters
                        .iter()
                        .map(|p| p.comp_values.first().cloned().unwrap_or_default().into())
                        .collect(),
                    options: options as u8,
                },
            ),
            RolesEvent::ScopeFunctionExecutionOptions {
                role,
                target,
                selector,
                options,
            } => log(
                vm,
                ScopeFunctionExecutionOptions {
                    role,
                    targetAddress: target,
                    functionSig: selector,
                    options: options as u8,
                },
            ),
            RolesEvent::ScopeParameter {
                role,
                target,
                selector,
                index,
                parameter,
            } => log(
                vm,
                ScopeParameter {
                    role,
                    targetAddress: target,
                    functionSig: selector,
                    index: U256::from(index),
                    paramType: parameter.param_type as u8,
                    paramComp: parameter.comparison as u8,
                    compValue: parameter.comp_values.into_iter().next().unwrap_or_default().into(),
                },
            ),
            RolesEvent::ScopeParameterAsOneOf {
                role,
                target,
                selector,
                index,
                parameter,
            } => log(
                vm,
                ScopeParameterAsOneOf {
                    role,
                    targetAddress: target,
                    functionSig: selector,
                    index: U256::from(index),
                    paramType: parameter.param_type as u8,
                    compValues: parameter.comp_values.into_iter().map(Into::into).collect(),
                },
            ),
            RolesEvent::UnscopeParameter {
                role,
                target,
                selector,
                index,
            } => log(
                vm,
                UnscopeParameter {
                    role,
                    targetAddress: target,
                    functionSig: selector,
                    index: U256::from(index),
                },
            ),
            RolesEvent::SetMultisendAddress { multisend } => log(
                vm,
                SetMultisendAddress {
                    multisendAddress: multisend,
                },
            ),
        }
    }
}
