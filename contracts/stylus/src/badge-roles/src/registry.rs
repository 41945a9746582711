//! Owner-gated mutation of the policy tables.
//!
//! Every operation checks the caller first, validates its arguments, writes through the
//! [`PolicyStore`] and returns the [`RolesEvent`] describing the new state. Failed operations
//! write nothing.

use alloc::vec::Vec;

use stylus_sdk::alloy_primitives::Address;

use crate::{
    errors::AdminError,
    types::{
        Clearance, Comparison, ExecutionOptions, FunctionPolicy, ParameterPolicy, ParameterType,
        PolicyStore, RoleId, RolesEvent, Selector, TargetPolicy, MAX_PARAMETERS,
    },
};

/// Full parameter table for `scope_function`, one entry per argument position.
#[derive(Clone, Debug, Default)]
pub struct ParameterTable<'a> {
    pub is_scoped: &'a [bool],
    pub param_types: &'a [ParameterType],
    pub comparisons: &'a [Comparison],
    pub comp_values: &'a [Vec<u8>],
}

pub struct Registry<'a, S: ?Sized> {
    store: &'a mut S,
    owner: Address,
}

impl<'a, S: PolicyStore + ?Sized> Registry<'a, S> {
    pub fn new(store: &'a mut S, owner: Address) -> Self {
        Self { store, owner }
    }

    pub fn allow_target(
        &mut self,
        caller: Address,
        role: RoleId,
        target: Address,
        options: ExecutionOptions,
    ) -> Result<RolesEvent, AdminError> {
        self.ensure_owner(caller)?;
        let previous = self.store.target_policy(role, target);
        self.store.set_target_policy(
            role,
            target,
            TargetPolicy {
                clearance: Clearance::TargetAllowed,
                options,
            },
        );
        Ok(RolesEvent::AllowTarget {
            role,
            target,
            previous,
            options,
        })
    }

    /// Deny the target outright; execution options are cleared along with the clearance.
    pub fn revoke_target(&mut self, caller: Address, role: RoleId, target: Address) -> Result<RolesEvent, AdminError> {
        self.ensure_owner(caller)?;
        let previous = self.store.target_policy(role, target);
        self.store.set_target_policy(role, target, TargetPolicy::default());
        Ok(RolesEvent::RevokeTarget { role, target, previous })
    }

    pub fn scope_target(&mut self, caller: Address, role: RoleId, target: Address) -> Result<RolesEvent, AdminError> {
        self.ensure_owner(caller)?;
        let previous = self.store.target_policy(role, target);
        let policy = TargetPolicy {
            clearance: Clearance::FunctionScoped,
            options: previous.options,
        };
        self.store.set_target_policy(role, target, policy);
        Ok(RolesEvent::ScopeTarget {
            role,
            target,
            previous,
            options: policy.options,
        })
    }

    pub fn scope_allow_function(
        &mut self,
        caller: Address,
        role: RoleId,
        target: Address,
        selector: Selector,
        options: ExecutionOptions,
    ) -> Result<RolesEvent, AdminError> {
        self.ensure_owner(caller)?;
        let mut function = self.scoped_function(role, target, selector)?;
        function.allowed = true;
        function.options = options;
        self.store.set_function_policy(role, target, selector, &function);
        Ok(RolesEvent::ScopeAllowFunction {
            role,
            target,
            selector,
            options,
        })
    }

    pub fn scope_revoke_function(
        &mut self,
        caller: Address,
        role: RoleId,
        target: Address,
        selector: Selector,
    ) -> Result<RolesEvent, AdminError> {
        self.ensure_owner(caller)?;
        let mut function = self.scoped_function(role, target, selector)?;
        function.allowed = false;
        self.store.set_function_policy(role, target, selector, &function);
        Ok(RolesEvent::ScopeRevokeFunction { role, target, selector })
    }

    /// Replace the whole parameter table of `selector` and allow it.
    pub fn scope_function(
        &mut self,
        caller: Address,
        role: RoleId,
        target: Address,
        selector: Selector,
        table: ParameterTable<'_>,
        options: ExecutionOptions,
    ) -> Result<RolesEvent, AdminError> {
        self.ensure_owner(caller)?;
        let len = table.is_scoped.len();
        if table.param_types.len() != len || table.comparisons.len() != len || table.comp_values.len() != len {
            return Err(AdminError::ArrayLengthMismatch);
        }
        if len > MAX_PARAMETERS {
            return Err(AdminError::ScopeMaxParametersExceeded);
        }

        let mut parameters = Vec::with_capacity(len);
        for i in 0..len {
            if !table.is_scoped[i] {
                parameters.push(ParameterPolicy::default());
                continue;
            }
            let (param_type, comparison) = (table.param_types[i], table.comparisons[i]);
            if comparison == Comparison::OneOf {
                return Err(AdminError::UnsupportedComparisonForSingleValue);
            }
            validate_comparison(param_type, comparison)?;
            validate_comp_value(param_type, &table.comp_values[i])?;
            parameters.push(ParameterPolicy::scoped(param_type, comparison, vec![table.comp_values[i].clone()]));
        }

        self.ensure_scoped(role, target)?;
        let function = FunctionPolicy {
            allowed: true,
            options,
            parameters,
        };
        self.store.set_function_policy(role, target, selector, &function);
        Ok(RolesEvent::ScopeFunction {
            role,
            target,
            selector,
            parameters: function.parameters,
            options,
        })
    }

    pub fn scope_function_execution_options(
        &mut self,
        caller: Address,
        role: RoleId,
        target: Address,
        selector: Selector,
        options: ExecutionOptions,
    ) -> Result<RolesEvent, AdminError> {
        self.ensure_owner(caller)?;
        let mut function = self.scoped_function(role, target, selector)?;
        function.options = options;
        self.store.set_function_policy(role, target, selector, &function);
        Ok(RolesEvent::ScopeFunctionExecutionOptions {
            role,
            target,
            selector,
            options,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn scope_parameter(
        &mut self,
        caller: Address,
        role: RoleId,
        target: Address,
        selector: Selector,
        index: usize,
        param_type: ParameterType,
        comparison: Comparison,
        comp_value: Vec<u8>,
    ) -> Result<RolesEvent, AdminError> {
        self.ensure_owner(caller)?;
        ensure_index(index)?;
        if comparison == Comparison::OneOf {
            return Err(AdminError::UnsupportedComparisonForSingleValue);
        }
        validate_comparison(param_type, comparison)?;
        validate_comp_value(param_type, &comp_value)?;

        let mut function = self.scoped_function(role, target, selector)?;
        let parameter = ParameterPolicy::scoped(param_type, comparison, vec![comp_value]);
        function.set_parameter(index, parameter.clone());
        self.store.set_function_policy(role, target, selector, &function);
        Ok(RolesEvent::ScopeParameter {
            role,
            target,
            selector,
            index,
            parameter,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn scope_parameter_as_one_of(
        &mut self,
        caller: Address,
        role: RoleId,
        target: Address,
        selector: Selector,
        index: usize,
        param_type: ParameterType,
        comp_values: Vec<Vec<u8>>,
    ) -> Result<RolesEvent, AdminError> {
        self.ensure_owner(caller)?;
        ensure_index(index)?;
        // A single value is an `EqualTo` in disguise.
        if comp_values.len() < 2 {
            return Err(AdminError::NotEnoughCompValuesForOneOf);
        }
        for value in &comp_values {
            validate_comp_value(param_type, value)?;
        }

        let mut function = self.scoped_function(role, target, selector)?;
        let parameter = ParameterPolicy::scoped(param_type, Comparison::OneOf, comp_values);
        function.set_parameter(index, parameter.clone());
        self.store.set_function_policy(role, target, selector, &function);
        Ok(RolesEvent::ScopeParameterAsOneOf {
            role,
            target,
            selector,
            index,
            parameter,
        })
    }

    pub fn unscope_parameter(
        &mut self,
        caller: Address,
        role: RoleId,
        target: Address,
        selector: Selector,
        index: usize,
    ) -> Result<RolesEvent, AdminError> {
        self.ensure_owner(caller)?;
        ensure_index(index)?;
        let mut function = self.scoped_function(role, target, selector)?;
        function.unscope_parameter(index);
        self.store.set_function_policy(role, target, selector, &function);
        Ok(RolesEvent::UnscopeParameter {
            role,
            target,
            selector,
            index,
        })
    }

    /// The batch address is not cleared by this call; roles still need a target entry for it.
    pub fn set_multisend(&mut self, caller: Address, multisend: Address) -> Result<RolesEvent, AdminError> {
        self.ensure_owner(caller)?;
        self.store.set_multisend(multisend);
        Ok(RolesEvent::SetMultisendAddress { multisend })
    }

    fn ensure_owner(&self, caller: Address) -> Result<(), AdminError> {
        if caller != self.owner || self.owner == Address::ZERO {
            return Err(AdminError::NotOwner);
        }
        Ok(())
    }

    fn ensure_scoped(&self, role: RoleId, target: Address) -> Result<(), AdminError> {
        if self.store.target_policy(role, target).clearance != Clearance::FunctionScoped {
            return Err(AdminError::TargetNotScoped);
        }
        Ok(())
    }

    /// Current policy for `selector` (default when absent); the target must be function scoped.
    fn scoped_function(&self, role: RoleId, target: Address, selector: Selector) -> Result<FunctionPolicy, AdminError> {
        self.ensure_scoped(role, target)?;
        Ok(self.store.function_policy(role, target, selector).unwrap_or_default())
    }
}

fn ensure_index(index: usize) -> Result<(), AdminError> {
    if index >= MAX_PARAMETERS {
        return Err(AdminError::ScopeMaxParametersExceeded);
    }
    Ok(())
}

fn validate_comparison(param_type: ParameterType, comparison: Comparison) -> Result<(), AdminError> {
    if comparison.is_relative() && param_type != ParameterType::Static {
        return Err(AdminError::UnsuitableRelativeComparison);
    }
    Ok(())
}

fn validate_comp_value(param_type: ParameterType, value: &[u8]) -> Result<(), AdminError> {
    if param_type == ParameterType::Static && value.len() != 32 {
        return Err(AdminError::UnsuitableStaticCompValueSize);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        checker::{Checker, Transaction},
        errors::PermissionError,
        storage::memory::{MemoryMembership, MemoryPolicyStore},
        types::Operation,
    };
    use badge_roles_encoder::static_comp_value_u256;
    use stylus_sdk::alloy_primitives::{address, FixedBytes, U256};

    const OWNER: Address = address!("0000000000000000000000000000000000000001");
    const STRANGER: Address = address!("0000000000000000000000000000000000000002");
    const TARGET: Address = address!("00000000000000000000000000000000000000aa");
    const SELECTOR: Selector = FixedBytes([0x40, 0xc1, 0x0f, 0x19]);

    fn role() -> RoleId {
        U256::from(7u64)
    }

    fn word(value: u64) -> Vec<u8> {
        static_comp_value_u256(U256::from(value))
    }

    fn scoped_store() -> MemoryPolicyStore {
        let mut store = MemoryPolicyStore::default();
        Registry::new(&mut store, OWNER).scope_target(OWNER, role(), TARGET).unwrap();
        store
    }

    #[test]
    fn every_mutation_is_owner_gated_and_atomic() {
        let mut store = scoped_store();
        Registry::new(&mut store, OWNER)
            .scope_allow_function(OWNER, role(), TARGET, SELECTOR, ExecutionOptions::None)
            .unwrap();
        let before = store.clone();
        let mut registry = Registry::new(&mut store, OWNER);

        let values = [word(1)];
        let table = ParameterTable {
            is_scoped: &[true],
            param_types: &[ParameterType::Static],
            comparisons: &[Comparison::EqualTo],
            comp_values: &values,
        };
        let results = [
            registry.allow_target(STRANGER, role(), TARGET, ExecutionOptions::Both),
            registry.revoke_target(STRANGER, role(), TARGET),
            registry.scope_target(STRANGER, role(), TARGET),
            registry.scope_allow_function(STRANGER, role(), TARGET, SELECTOR, ExecutionOptions::Both),
            registry.scope_revoke_function(STRANGER, role(), TARGET, SELECTOR),
            registry.scope_function(STRANGER, role(), TARGET, SELECTOR, table, ExecutionOptions::None),
            registry.scope_function_execution_options(STRANGER, role(), TARGET, SELECTOR, ExecutionOptions::Send),
            registry.scope_parameter(STRANGER, role(), TARGET, SELECTOR, 0, ParameterType::Static, Comparison::EqualTo, word(1)),
            registry.scope_parameter_as_one_of(STRANGER, role(), TARGET, SELECTOR, 0, ParameterType::Static, vec![word(1), word(2)]),
            registry.unscope_parameter(STRANGER, role(), TARGET, SELECTOR, 0),
            registry.set_multisend(STRANGER, TARGET),
        ];

        for result in results {
            assert_eq!(result, Err(AdminError::NotOwner));
        }
        assert_eq!(store, before);
    }

    #[test]
    fn uninitialized_owner_rejects_everyone() {
        let mut store = MemoryPolicyStore::default();
        let mut registry = Registry::new(&mut store, Address::ZERO);

        assert_eq!(
            registry.allow_target(Address::ZERO, role(), TARGET, ExecutionOptions::None),
            Err(AdminError::NotOwner)
        );
    }

    #[test]
    fn allow_revoke_allow_leaves_no_residue() {
        let mut once = MemoryPolicyStore::default();
        Registry::new(&mut once, OWNER)
            .allow_target(OWNER, role(), TARGET, ExecutionOptions::Send)
            .unwrap();

        let mut thrice = MemoryPolicyStore::default();
        let mut registry = Registry::new(&mut thrice, OWNER);
        registry.allow_target(OWNER, role(), TARGET, ExecutionOptions::Both).unwrap();
        registry.revoke_target(OWNER, role(), TARGET).unwrap();
        registry.allow_target(OWNER, role(), TARGET, ExecutionOptions::Send).unwrap();

        assert_eq!(once, thrice);
    }

    #[test]
    fn target_events_carry_previous_policy() {
        let mut store = MemoryPolicyStore::default();
        let mut registry = Registry::new(&mut store, OWNER);

        let first = registry.allow_target(OWNER, role(), TARGET, ExecutionOptions::Send).unwrap();
        assert_eq!(
            first,
            RolesEvent::AllowTarget {
                role: role(),
                target: TARGET,
                previous: TargetPolicy::default(),
                options: ExecutionOptions::Send,
            }
        );

        let revoked = registry.revoke_target(OWNER, role(), TARGET).unwrap();
        assert_eq!(
            revoked,
            RolesEvent::RevokeTarget {
                role: role(),
                target: TARGET,
                previous: TargetPolicy { clearance: Clearance::TargetAllowed, options: ExecutionOptions::Send },
            }
        );
    }

    #[test]
    fn scope_target_preserves_options() {
        let mut store = MemoryPolicyStore::default();
        let mut registry = Registry::new(&mut store, OWNER);
        registry.allow_target(OWNER, role(), TARGET, ExecutionOptions::DelegateCall).unwrap();
        let event = registry.scope_target(OWNER, role(), TARGET).unwrap();

        assert_eq!(
            event,
            RolesEvent::ScopeTarget {
                role: role(),
                target: TARGET,
                previous: TargetPolicy { clearance: Clearance::TargetAllowed, options: ExecutionOptions::DelegateCall },
                options: ExecutionOptions::DelegateCall,
            }
        );
        assert_eq!(
            store.target_policy(role(), TARGET),
            TargetPolicy { clearance: Clearance::FunctionScoped, options: ExecutionOptions::DelegateCall }
        );
    }

    #[test]
    fn function_mutations_require_scoped_target() {
        let mut store = MemoryPolicyStore::default();
        let mut registry = Registry::new(&mut store, OWNER);
        registry.allow_target(OWNER, role(), TARGET, ExecutionOptions::None).unwrap();

        assert_eq!(
            registry.scope_allow_function(OWNER, role(), TARGET, SELECTOR, ExecutionOptions::None),
            Err(AdminError::TargetNotScoped)
        );
        assert_eq!(
            registry.scope_parameter(OWNER, role(), TARGET, SELECTOR, 0, ParameterType::Static, Comparison::EqualTo, word(1)),
            Err(AdminError::TargetNotScoped)
        );
        assert_eq!(store.function_policy(role(), TARGET, SELECTOR), None);
    }

    #[test]
    fn allow_then_revoke_function_keeps_parameters() {
        let mut store = scoped_store();
        let mut registry = Registry::new(&mut store, OWNER);
        registry
            .scope_parameter(OWNER, role(), TARGET, SELECTOR, 1, ParameterType::Static, Comparison::LessThan, word(5))
            .unwrap();
        registry.scope_allow_function(OWNER, role(), TARGET, SELECTOR, ExecutionOptions::Send).unwrap();
        registry.scope_revoke_function(OWNER, role(), TARGET, SELECTOR).unwrap();

        let function = store.function_policy(role(), TARGET, SELECTOR).unwrap();
        assert!(!function.allowed);
        assert_eq!(function.options, ExecutionOptions::Send);
        assert_eq!(function.scoped_parameters().map(|(i, _)| i).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn scope_function_replaces_table() {
        let mut store = scoped_store();
        let mut registry = Registry::new(&mut store, OWNER);
        registry
            .scope_parameter(OWNER, role(), TARGET, SELECTOR, 3, ParameterType::Static, Comparison::EqualTo, word(3))
            .unwrap();

        let values = [word(1), b"ignored".to_vec()];
        let table = ParameterTable {
            is_scoped: &[true, false],
            param_types: &[ParameterType::Static, ParameterType::Dynamic],
            comparisons: &[Comparison::GreaterThan, Comparison::EqualTo],
            comp_values: &values,
        };
        let event = registry
            .scope_function(OWNER, role(), TARGET, SELECTOR, table, ExecutionOptions::Both)
            .unwrap();

        let function = store.function_policy(role(), TARGET, SELECTOR).unwrap();
        assert!(function.allowed);
        assert_eq!(function.options, ExecutionOptions::Both);
        assert_eq!(function.parameters.len(), 2);
        assert_eq!(
            function.parameters[0],
            ParameterPolicy::scoped(ParameterType::Static, Comparison::GreaterThan, vec![word(1)])
        );
        assert!(!function.parameters[1].is_scoped);
        assert!(matches!(event, RolesEvent::ScopeFunction { ref parameters, .. } if parameters == &function.parameters));
    }

    #[test]
    fn scope_function_validates_arrays() {
        let mut store = scoped_store();
        let mut registry = Registry::new(&mut store, OWNER);
        let values = [word(1)];

        let mismatched = ParameterTable {
            is_scoped: &[true, true],
            param_types: &[ParameterType::Static],
            comparisons: &[Comparison::EqualTo],
            comp_values: &values,
        };
        assert_eq!(
            registry.scope_function(OWNER, role(), TARGET, SELECTOR, mismatched, ExecutionOptions::None),
            Err(AdminError::ArrayLengthMismatch)
        );

        let one_of = ParameterTable {
            is_scoped: &[true],
            param_types: &[ParameterType::Static],
            comparisons: &[Comparison::OneOf],
            comp_values: &values,
        };
        assert_eq!(
            registry.scope_function(OWNER, role(), TARGET, SELECTOR, one_of, ExecutionOptions::None),
            Err(AdminError::UnsupportedComparisonForSingleValue)
        );

        let flags = vec![false; MAX_PARAMETERS + 1];
        let types = vec![ParameterType::Static; MAX_PARAMETERS + 1];
        let comps = vec![Comparison::EqualTo; MAX_PARAMETERS + 1];
        let many_values = vec![Vec::new(); MAX_PARAMETERS + 1];
        let too_many = ParameterTable {
            is_scoped: &flags,
            param_types: &types,
            comparisons: &comps,
            comp_values: &many_values,
        };
        assert_eq!(
            registry.scope_function(OWNER, role(), TARGET, SELECTOR, too_many, ExecutionOptions::None),
            Err(AdminError::ScopeMaxParametersExceeded)
        );
    }

    #[test]
    fn scope_parameter_validates_shape() {
        let mut store = scoped_store();
        let mut registry = Registry::new(&mut store, OWNER);

        assert_eq!(
            registry.scope_parameter(OWNER, role(), TARGET, SELECTOR, 0, ParameterType::Static, Comparison::OneOf, word(1)),
            Err(AdminError::UnsupportedComparisonForSingleValue)
        );
        assert_eq!(
            registry.scope_parameter(OWNER, role(), TARGET, SELECTOR, 0, ParameterType::Dynamic, Comparison::GreaterThan, b"x".to_vec()),
            Err(AdminError::UnsuitableRelativeComparison)
        );
        assert_eq!(
            registry.scope_parameter(OWNER, role(), TARGET, SELECTOR, 0, ParameterType::Static, Comparison::EqualTo, vec![1u8; 31]),
            Err(AdminError::UnsuitableStaticCompValueSize)
        );
        assert_eq!(
            registry.scope_parameter(OWNER, role(), TARGET, SELECTOR, MAX_PARAMETERS, ParameterType::Static, Comparison::EqualTo, word(1)),
            Err(AdminError::ScopeMaxParametersExceeded)
        );
        assert_eq!(store.function_policy(role(), TARGET, SELECTOR), None);
    }

    #[test]
    fn one_of_requires_two_values() {
        let mut store = scoped_store();
        let mut registry = Registry::new(&mut store, OWNER);

        assert_eq!(
            registry.scope_parameter_as_one_of(OWNER, role(), TARGET, SELECTOR, 0, ParameterType::Static, vec![word(1)]),
            Err(AdminError::NotEnoughCompValuesForOneOf)
        );

        let event = registry
            .scope_parameter_as_one_of(OWNER, role(), TARGET, SELECTOR, 0, ParameterType::Dynamic, vec![b"a".to_vec(), b"b".to_vec()])
            .unwrap();
        assert!(matches!(event, RolesEvent::ScopeParameterAsOneOf { index: 0, .. }));

        let function = store.function_policy(role(), TARGET, SELECTOR).unwrap();
        assert_eq!(function.parameters[0].comparison, Comparison::OneOf);
        assert_eq!(function.parameters[0].comp_values.len(), 2);
        // Parameters can be staged before the selector itself is allowed.
        assert!(!function.allowed);
    }

    #[test]
    fn unscope_parameter_clears_position() {
        let mut store = scoped_store();
        let mut registry = Registry::new(&mut store, OWNER);
        registry
            .scope_parameter(OWNER, role(), TARGET, SELECTOR, 0, ParameterType::Static, Comparison::EqualTo, word(1))
            .unwrap();
        registry.unscope_parameter(OWNER, role(), TARGET, SELECTOR, 0).unwrap();

        let function = store.function_policy(role(), TARGET, SELECTOR).unwrap();
        assert_eq!(function.scoped_parameters().count(), 0);
    }

    #[test]
    fn multisend_is_registry_config() {
        let mut store = MemoryPolicyStore::default();
        let event = Registry::new(&mut store, OWNER).set_multisend(OWNER, TARGET).unwrap();

        assert_eq!(event, RolesEvent::SetMultisendAddress { multisend: TARGET });
        assert_eq!(store.multisend(), TARGET);
    }

    #[test]
    fn membership_gates_an_allowed_target_end_to_end() {
        let role = U256::ZERO;
        let invoker = STRANGER;
        let mut store = MemoryPolicyStore::default();
        Registry::new(&mut store, OWNER)
            .allow_target(OWNER, role, TARGET, ExecutionOptions::None)
            .unwrap();

        let data = [0xde, 0xad, 0xbe, 0xef];
        let tx = Transaction {
            to: TARGET,
            value: U256::ZERO,
            data: &data,
            operation: Operation::Call,
        };
        let mut badges = MemoryMembership::default();

        assert_eq!(
            Checker::new(&store, &badges).check(invoker, role, &tx),
            Err(PermissionError::NoMembership)
        );

        badges.mint(invoker, role, U256::from(1u64));
        assert_eq!(Checker::new(&store, &badges).check(invoker, role, &tx), Ok(()));

        badges.burn(invoker, role, U256::from(1u64));
        assert_eq!(
            Checker::new(&store, &badges).check(invoker, role, &tx),
            Err(PermissionError::NoMembership)
        );
    }

    #[test]
    fn scoped_function_options_grant_send_and_delegatecall() {
        let mut store = scoped_store();
        Registry::new(&mut store, OWNER)
            .scope_allow_function(OWNER, role(), TARGET, SELECTOR, ExecutionOptions::Both)
            .unwrap();
        let mut badges = MemoryMembership::default();
        badges.mint(STRANGER, role(), U256::from(1u64));

        let data = [0x40, 0xc1, 0x0f, 0x19];
        let send = Transaction {
            to: TARGET,
            value: U256::from(1u64),
            data: &data,
            operation: Operation::Call,
        };
        let delegate = Transaction {
            value: U256::ZERO,
            operation: Operation::DelegateCall,
            ..send
        };

        let checker = Checker::new(&store, &badges);
        assert_eq!(checker.check(STRANGER, role(), &send), Ok(()));
        assert_eq!(checker.check(STRANGER, role(), &delegate), Ok(()));
    }
}
