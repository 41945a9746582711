use alloy_sol_types::SolCall;
use stylus_sdk::{
    alloy_primitives::{Address, U256},
    call::RawCall,
};

use crate::{
    avatar::interfaces::IBadger,
    types::{MembershipError, MembershipOracle, RoleId},
};

/// Reads role membership from an ERC-1155 badge contract with a gas-capped `staticcall`.
#[derive(Clone, Copy, Debug)]
pub struct BadgerMembership {
    pub badger: Address,
    pub gas_cap: u64,
}

impl BadgerMembership {
    pub fn new(badger: Address, gas_cap: u64) -> Self {
        Self { badger, gas_cap }
    }
}

impl MembershipOracle for BadgerMembership {
    fn balance_of(&self, account: Address, role: RoleId) -> Result<U256, MembershipError> {
        if self.badger == Address::ZERO {
            return Err(MembershipError::CallFailed);
        }
        let data = IBadger::balanceOfCall { account, id: role }.abi_encode();
        let out = unsafe { RawCall::new_static().gas(self.gas_cap).call(self.badger, &data) }
            .map_err(|_| MembershipError::CallFailed)?;
        // uint256 => one word
        if out.len() < 32 {
            return Err(MembershipError::MalformedReturn);
        }
        Ok(U256::from_be_slice(&out[0..32]))
    }
}
