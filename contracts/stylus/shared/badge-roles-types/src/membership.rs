use alloy_primitives::{Address, U256};

use crate::policy::RoleId;

/// Errors while asking the membership oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipError {
    /// The oracle call reverted or could not be made.
    CallFailed,
    /// Return data was malformed or could not be decoded.
    MalformedReturn,
}

/// Membership oracle abstraction, implemented differently on-chain vs off-chain.
///
/// On-chain this is an ERC-1155 style `balanceOf(account, id)` where the token id is the role.
pub trait MembershipOracle {
    fn balance_of(&self, account: Address, role: RoleId) -> Result<U256, MembershipError>;

    /// An account is a member of `role` iff its balance is non-zero.
    fn is_member(&self, account: Address, role: RoleId) -> Result<bool, MembershipError> {
        Ok(self.balance_of(account, role)? != U256::ZERO)
    }
}
