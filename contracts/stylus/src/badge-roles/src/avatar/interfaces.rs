//! Solidity ABI of the contracts the modifier talks to.

use stylus_sdk::alloy_sol_types::sol;

sol! {
    /// Safe-style avatar, as seen by an enabled module.
    interface IAvatar {
        function execTransactionFromModule(address to, uint256 value, bytes data, uint8 operation)
            external
            returns (bool success);
        function execTransactionFromModuleReturnData(address to, uint256 value, bytes data, uint8 operation)
            external
            returns (bool success, bytes returnData);
    }

    /// ERC-1155 badge ledger; the token id is the role id.
    interface IBadger {
        function balanceOf(address account, uint256 id) external view returns (uint256);
    }
}
