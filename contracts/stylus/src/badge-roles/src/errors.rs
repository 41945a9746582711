use alloy_sol_types::sol;
use stylus_sdk::stylus_proc::SolidityError;

/// Errors while reading an ABI argument out of calldata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    OutOfBounds,
    InvalidOffset,
}

/// Errors during membership lookup.
pub use badge_roles_types::MembershipError;

/// Errors on the validation path. None of these are reachable from admin calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionError {
    NoMembership,
    FunctionSignatureTooShort,
    TargetAddressNotAllowed,
    FunctionNotAllowed,
    DelegateCallNotAllowed,
    SendNotAllowed,
    ParameterNotAllowed,
    ParameterLessThanAllowed,
    ParameterGreaterThanAllowed,
    OutOfBounds,
    InvalidOffset,
    UnacceptableMultiSendOffset,
    InvalidOperation,
    BatchTooDeep,
}

impl From<DecodeError> for PermissionError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::OutOfBounds => Self::OutOfBounds,
            DecodeError::InvalidOffset => Self::InvalidOffset,
        }
    }
}

impl From<MembershipError> for PermissionError {
    fn from(_: MembershipError) -> Self {
        Self::NoMembership
    }
}

/// Errors on the owner-gated configuration path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminError {
    NotOwner,
    ArrayLengthMismatch,
    ScopeMaxParametersExceeded,
    TargetNotScoped,
    UnsupportedComparisonForSingleValue,
    NotEnoughCompValuesForOneOf,
    UnsuitableRelativeComparison,
    UnsuitableStaticCompValueSize,
}

sol! {
    // Configuration
    error AlreadyInitialized();
    error InvalidInitParams();
    error NotOwner();
    error InvalidEnumValue(uint8 value);

    // Registry
    error ArrayLengthMismatch();
    error ScopeMaxParametersExceeded();
    error TargetNotScoped();
    error UnsupportedComparisonForSingleValue();
    error NotEnoughCompValuesForOneOf();
    error UnsuitableRelativeComparison();
    error UnsuitableStaticCompValueSize();

    // Checker
    error NoMembership();
    error FunctionSignatureTooShort();
    error TargetAddressNotAllowed();
    error FunctionNotAllowed();
    error DelegateCallNotAllowed();
    error SendNotAllowed();
    error ParameterNotAllowed();
    error ParameterLessThanAllowed();
    error ParameterGreaterThanAllowed();
    error OutOfBounds();
    error InvalidOffset();
    error UnacceptableMultiSendOffset();
    error InvalidOperation();
    error BatchTooDeep();

    // Forwarding
    error AvatarCallFailed(bytes reason);
}

/// Revert reasons of the contract ABI.
#[derive(SolidityError)]
pub enum RolesError {
    AlreadyInitialized(AlreadyInitialized),
    InvalidInitParams(InvalidInitParams),
    NotOwner(NotOwner),
    InvalidEnumValue(InvalidEnumValue),
    ArrayLengthMismatch(ArrayLengthMismatch),
    ScopeMaxParametersExceeded(ScopeMaxParametersExceeded),
    TargetNotScoped(TargetNotScoped),
    UnsupportedComparisonForSingleValue(UnsupportedComparisonForSingleValue),
    NotEnoughCompValuesForOneOf(NotEnoughCompValuesForOneOf),
    UnsuitableRelativeComparison(UnsuitableRelativeComparison),
    UnsuitableStaticCompValueSize(UnsuitableStaticCompValueSize),
    NoMembership(NoMembership),
    FunctionSignatureTooShort(FunctionSignatureTooShort),
    TargetAddressNotAllowed(TargetAddressNotAllowed),
    FunctionNotAllowed(FunctionNotAllowed),
    DelegateCallNotAllowed(DelegateCallNotAllowed),
    SendNotAllowed(SendNotAllowed),
    ParameterNotAllowed(ParameterNotAllowed),
    ParameterLessThanAllowed(ParameterLessThanAllowed),
    ParameterGreaterThanAllowed(ParameterGreaterThanAllowed),
    OutOfBounds(OutOfBounds),
    InvalidOffset(InvalidOffset),
    UnacceptableMultiSendOffset(UnacceptableMultiSendOffset),
    InvalidOperation(InvalidOperation),
    BatchTooDeep(BatchTooDeep),
    AvatarCallFailed(AvatarCallFailed),
}

impl From<AdminError> for RolesError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::NotOwner => Self::NotOwner(NotOwner {}),
            AdminError::ArrayLengthMismatch => Self::ArrayLengthMismatch(ArrayLengthMismatch {}),
            AdminError::ScopeMaxParametersExceeded => Self::ScopeMaxParametersExceeded(ScopeMaxParametersExceeded {}),
            AdminError::TargetNotScoped => Self::TargetNotScoped(TargetNotScoped {}),
            AdminError::UnsupportedComparisonForSingleValue => {
                Self::UnsupportedComparisonForSingleValue(UnsupportedComparisonForSingleValue {})
            }
            AdminError::NotEnoughCompValuesForOneOf => Self::NotEnoughCompValuesForOneOf(NotEnoughCompValuesForOneOf {}),
            AdminError::UnsuitableRelativeComparison => {
                Self::UnsuitableRelativeComparison(UnsuitableRelativeComparison {})
            }
            AdminError::UnsuitableStaticCompValueSize => {
                Self::UnsuitableStaticCompValueSize(UnsuitableStaticCompValueSize {})
            }
        }
    }
}

impl From<PermissionError> for RolesError {
    fn from(err: PermissionError) -> Self {
        match err {
            PermissionError::NoMembership => Self::NoMembership(NoMembership {}),
            PermissionError::FunctionSignatureTooShort => Self::FunctionSignatureTooShort(FunctionSignatureTooShort {}),
            PermissionError::TargetAddressNotAllowed => Self::TargetAddressNotAllowed(TargetAddressNotAllowed {}),
            PermissionError::FunctionNotAllowed => Self::FunctionNotAllowed(FunctionNotAllowed {}),
            PermissionError::DelegateCallNotAllowed => Self::DelegateCallNotAllowed(DelegateCallNotAllowed {}),
            PermissionError::SendNotAllowed => Self::SendNotAllowed(SendNotAllowed {}),
            PermissionError::ParameterNotAllowed => Self::ParameterNotAllowed(ParameterNotAllowed {}),
            PermissionError::ParameterLessThanAllowed => Self::ParameterLessThanAllowed(ParameterLessThanAllowed {}),
            PermissionError::ParameterGreaterThanAllowed => {
                Self::ParameterGreaterThanAllowed(ParameterGreaterThanAllowed {})
            }
            PermissionError::OutOfBounds => Self::OutOfBounds(OutOfBounds {}),
            PermissionError::InvalidOffset => Self::InvalidOffset(InvalidOffset {}),
            PermissionError::UnacceptableMultiSendOffset => {
                Self::UnacceptableMultiSendOffset(UnacceptableMultiSendOffset {})
            }
            PermissionError::InvalidOperation => Self::InvalidOperation(InvalidOperation {}),
            PermissionError::BatchTooDeep => Self::BatchTooDeep(BatchTooDeep {}),
        }
    }
}
