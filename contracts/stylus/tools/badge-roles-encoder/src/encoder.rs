use alloy_primitives::{Address, Bytes, FixedBytes, U256};
use alloy_sol_types::{sol, SolCall, SolValue};
use badge_roles_types::{Comparison, ExecutionOptions, Operation, ParameterPolicy, ParameterType};
use sha3::{Digest, Keccak256};

sol! {
    interface IBadgeRoles {
        function setUp(bytes initParams) external;
        function transferOwnership(address newOwner) external;
        function setAvatar(address avatar) external;
        function setTarget(address target) external;
        function allowTarget(uint256 role, address target, uint8 options) external;
        function revokeTarget(uint256 role, address target) external;
        function scopeTarget(uint256 role, address target) external;
        function scopeAllowFunction(uint256 role, address target, bytes4 selector, uint8 options) external;
        function scopeRevokeFunction(uint256 role, address target, bytes4 selector) external;
        function scopeFunction(
            uint256 role,
            address target,
            bytes4 selector,
            bool[] isScoped,
            uint8[] paramTypes,
            uint8[] comparisons,
            bytes[] compValues,
            uint8 options
        ) external;
        function scopeFunctionExecutionOptions(uint256 role, address target, bytes4 selector, uint8 options) external;
        function scopeParameter(
            uint256 role,
            address target,
            bytes4 selector,
            uint256 index,
            uint8 paramType,
            uint8 comparison,
            bytes compValue
        ) external;
        function scopeParameterAsOneOf(
            uint256 role,
            address target,
            bytes4 selector,
            uint256 index,
            uint8 paramType,
            bytes[] compValues
        ) external;
        function unscopeParameter(uint256 role, address target, bytes4 selector, uint256 index) external;
        function setMultisendAddress(address multisend) external;
        function execTransactionFromModule(address to, uint256 value, bytes data, uint8 operation, uint256 role) external
            returns (bool);
        function checkTransaction(address invoker, address to, uint256 value, bytes data, uint8 operation, uint256 role)
            external
            view;
    }
}

/// 4-byte selector of a canonical signature such as `transfer(address,uint256)`.
pub fn selector(signature: &str) -> FixedBytes<4> {
    let hash = Keccak256::digest(signature.as_bytes());
    FixedBytes::from_slice(&hash[..4])
}

/// 32-byte comparison value for a `uint256` argument.
pub fn static_comp_value_u256(value: U256) -> Vec<u8> {
    value.to_be_bytes::<32>().to_vec()
}

/// 32-byte comparison value for an `address` argument (left-padded).
pub fn static_comp_value_address(value: Address) -> Vec<u8> {
    value.into_word().to_vec()
}

pub fn static_comp_value_bool(value: bool) -> Vec<u8> {
    static_comp_value_u256(U256::from(value as u8))
}

/// `0x`-prefixed lowercase hex, the form `cast` and block explorers accept.
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// `setUp` argument: `abi.encode(owner, avatar, target, membershipOracle)`.
pub fn encode_init_params(owner: Address, avatar: Address, target: Address, membership_oracle: Address) -> Vec<u8> {
    (owner, avatar, target, membership_oracle).abi_encode_params()
}

pub fn set_up_call(init_params: Vec<u8>) -> Vec<u8> {
    IBadgeRoles::setUpCall {
        initParams: init_params.into(),
    }
    .abi_encode()
}

pub fn transfer_ownership_call(new_owner: Address) -> Vec<u8> {
    IBadgeRoles::transferOwnershipCall { newOwner: new_owner }.abi_encode()
}

pub fn set_avatar_call(avatar: Address) -> Vec<u8> {
    IBadgeRoles::setAvatarCall { avatar }.abi_encode()
}

pub fn set_target_call(target: Address) -> Vec<u8> {
    IBadgeRoles::setTargetCall { target }.abi_encode()
}

pub fn allow_target_call(role: U256, target: Address, options: ExecutionOptions) -> Vec<u8> {
    IBadgeRoles::allowTargetCall {
        role,
        target,
        options: options as u8,
    }
    .abi_encode()
}

pub fn revoke_target_call(role: U256, target: Address) -> Vec<u8> {
    IBadgeRoles::revokeTargetCall { role, target }.abi_encode()
}

pub fn scope_target_call(role: U256, target: Address) -> Vec<u8> {
    IBadgeRoles::scopeTargetCall { role, target }.abi_encode()
}

pub fn scope_allow_function_call(
    role: U256,
    target: Address,
    selector: FixedBytes<4>,
    options: ExecutionOptions,
) -> Vec<u8> {
    IBadgeRoles::scopeAllowFunctionCall {
        role,
        target,
        selector,
        options: options as u8,
    }
    .abi_encode()
}

pub fn scope_revoke_function_call(role: U256, target: Address, selector: FixedBytes<4>) -> Vec<u8> {
    IBadgeRoles::scopeRevokeFunctionCall { role, target, selector }.abi_encode()
}

/// `scopeFunction` from a parameter table; unscoped positions are sent with an empty value.
pub fn scope_function_call(
    role: U256,
    target: Address,
    selector: FixedBytes<4>,
    parameters: &[ParameterPolicy],
    options: ExecutionOptions,
) -> Vec<u8> {
    IBadgeRoles::scopeFunctionCall {
        role,
        target,
        selector,
        isScoped: parameters.iter().map(|p| p.is_scoped).collect(),
        paramTypes: parameters.iter().map(|p| p.param_type as u8).collect(),
        comparisons: parameters.iter().map(|p| p.comparison as u8).collect(),
        compValues: parameters
            .iter()
            .map(|p| Bytes::from(p.comp_values.first().cloned().unwrap_or_default()))
            .collect(),
        options: options as u8,
    }
    .abi_encode()
}

pub fn scope_function_execution_options_call(
    role: U256,
    target: Address,
    selector: FixedBytes<4>,
    options: ExecutionOptions,
) -> Vec<u8> {
    IBadgeRoles::scopeFunctionExecutionOptionsCall {
        role,
        target,
        selector,
        options: options as u8,
    }
    .abi_encode()
}

#[allow(clippy::too_many_arguments)]
pub fn scope_parameter_call(
    role: U256,
    target: Address,
    selector: FixedBytes<4>,
    index: usize,
    param_type: ParameterType,
    comparison: Comparison,
    comp_value: Vec<u8>,
) -> Vec<u8> {
    IBadgeRoles::scopeParameterCall {
        role,
        target,
        selector,
        index: U256::from(index),
        paramType: param_type as u8,
        comparison: comparison as u8,
        compValue: comp_value.into(),
    }
    .abi_encode()
}

pub fn scope_parameter_as_one_of_call(
    role: U256,
    target: Address,
    selector: FixedBytes<4>,
    index: usize,
    param_type: ParameterType,
    comp_values: Vec<Vec<u8>>,
) -> Vec<u8> {
    IBadgeRoles::scopeParameterAsOneOfCall {
        role,
        target,
        selector,
        index: U256::from(index),
        paramType: param_type as u8,
        compValues: comp_values.into_iter().map(Bytes::from).collect(),
    }
    .abi_encode()
}

pub fn unscope_parameter_call(role: U256, target: Address, selector: FixedBytes<4>, index: usize) -> Vec<u8> {
    IBadgeRoles::unscopeParameterCall {
        role,
        target,
        selector,
        index: U256::from(index),
    }
    .abi_encode()
}

pub fn set_multisend_address_call(multisend: Address) -> Vec<u8> {
    IBadgeRoles::setMultisendAddressCall { multisend }.abi_encode()
}

pub fn exec_transaction_from_module_call(
    to: Address,
    value: U256,
    data: Vec<u8>,
    operation: Operation,
    role: U256,
) -> Vec<u8> {
    IBadgeRoles::execTransactionFromModuleCall {
        to,
        value,
        data: data.into(),
        operation: operation as u8,
        role,
    }
    .abi_encode()
}

pub fn check_transaction_call(
    invoker: Address,
    to: Address,
    value: U256,
    data: Vec<u8>,
    operation: Operation,
    role: U256,
) -> Vec<u8> {
    IBadgeRoles::checkTransactionCall {
        invoker,
        to,
        value,
        data: data.into(),
        operation: operation as u8,
        role,
    }
    .abi_encode()
}
