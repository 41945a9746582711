use alloc::vec::Vec;

use alloy_primitives::{FixedBytes, U256};

/// Role identifier. Matches the badge (ERC-1155 token) id that grants membership.
pub type RoleId = U256;

/// 4-byte function selector.
pub type Selector = FixedBytes<4>;

/// Upper bound on the parameter table of a single selector.
pub const MAX_PARAMETERS: usize = 48;

/// Coarse policy level for a (role, target) pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Clearance {
    /// Never configured or explicitly revoked.
    #[default]
    Denied = 0,
    /// Every selector on the target is allowed, subject to execution options.
    TargetAllowed = 1,
    /// Selectors must be enumerated individually.
    FunctionScoped = 2,
}

/// What a call may do beyond a plain zero-value `CALL`.
///
/// Bit 0 permits sending value, bit 1 permits `DELEGATECALL`; `Both` sets the two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ExecutionOptions {
    #[default]
    None = 0,
    Send = 1,
    DelegateCall = 2,
    Both = 3,
}

impl ExecutionOptions {
    const SEND_BIT: u8 = 0b01;
    const DELEGATE_CALL_BIT: u8 = 0b10;

    pub const fn can_send(self) -> bool {
        (self as u8) & Self::SEND_BIT != 0
    }

    pub const fn can_delegate_call(self) -> bool {
        (self as u8) & Self::DELEGATE_CALL_BIT != 0
    }
}

/// Call opcode requested by the invoker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Operation {
    #[default]
    Call = 0,
    DelegateCall = 1,
}

/// ABI shape of a scoped parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ParameterType {
    /// One 32-byte head word.
    #[default]
    Static = 0,
    /// `bytes` / `string`: head word is an offset to a length-prefixed byte tail.
    Dynamic = 1,
    /// `T[]` of 32-byte elements: head word is an offset to a count-prefixed word tail.
    Dynamic32 = 2,
}

/// Rule applied between a decoded argument and the configured reference value(s).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Comparison {
    #[default]
    EqualTo = 0,
    GreaterThan = 1,
    LessThan = 2,
    OneOf = 3,
}

impl Comparison {
    /// `GreaterThan` / `LessThan` interpret both operands as big-endian `uint256`.
    pub const fn is_relative(self) -> bool {
        matches!(self, Self::GreaterThan | Self::LessThan)
    }
}

macro_rules! impl_try_from_u8 {
    ($ty:ident { $($value:literal => $variant:ident),+ $(,)? }) => {
        impl TryFrom<u8> for $ty {
            type Error = ();

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok($ty::$variant),)+
                    _ => Err(()),
                }
            }
        }
    };
}

impl_try_from_u8!(Clearance { 0 => Denied, 1 => TargetAllowed, 2 => FunctionScoped });
impl_try_from_u8!(ExecutionOptions { 0 => None, 1 => Send, 2 => DelegateCall, 3 => Both });
impl_try_from_u8!(Operation { 0 => Call, 1 => DelegateCall });
impl_try_from_u8!(ParameterType { 0 => Static, 1 => Dynamic, 2 => Dynamic32 });
impl_try_from_u8!(Comparison { 0 => EqualTo, 1 => GreaterThan, 2 => LessThan, 3 => OneOf });

/// Policy for one (role, target address).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TargetPolicy {
    pub clearance: Clearance,
    pub options: ExecutionOptions,
}

/// Policy for one parameter position of a scoped selector.
///
/// The default value is "unscoped": the argument at this position is never inspected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterPolicy {
    pub is_scoped: bool,
    pub param_type: ParameterType,
    pub comparison: Comparison,
    /// Exactly one value for `EqualTo` / `GreaterThan` / `LessThan`, one or more for `OneOf`.
    pub comp_values: Vec<Vec<u8>>,
}

impl ParameterPolicy {
    pub fn scoped(param_type: ParameterType, comparison: Comparison, comp_values: Vec<Vec<u8>>) -> Self {
        Self {
            is_scoped: true,
            param_type,
            comparison,
            comp_values,
        }
    }
}

/// Policy for one (role, target, selector). Only authoritative while the parent target is
/// [`Clearance::FunctionScoped`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionPolicy {
    pub allowed: bool,
    pub options: ExecutionOptions,
    /// Indexed by argument position; positions past the end are unscoped.
    pub parameters: Vec<ParameterPolicy>,
}

impl FunctionPolicy {
    /// Upsert the policy at `index`, padding any gap with unscoped entries.
    pub fn set_parameter(&mut self, index: usize, parameter: ParameterPolicy) {
        if self.parameters.len() <= index {
            self.parameters.resize_with(index + 1, ParameterPolicy::default);
        }
        self.parameters[index] = parameter;
    }

    /// Mark `index` as unscoped, dropping trailing unscoped entries.
    pub fn unscope_parameter(&mut self, index: usize) {
        if let Some(parameter) = self.parameters.get_mut(index) {
            *parameter = ParameterPolicy::default();
        }
        while self.parameters.last().is_some_and(|p| !p.is_scoped) {
            self.parameters.pop();
        }
    }

    /// Scoped positions in ascending index order.
    pub fn scoped_parameters(&self) -> impl Iterator<Item = (usize, &ParameterPolicy)> {
        self.parameters
            .iter()
            .enumerate()
            .filter(|(_, parameter)| parameter.is_scoped)
    }
}
