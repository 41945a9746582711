//! Call limits for outbound calls.

/// Gas forwarded to the membership oracle's `balanceOf`.
pub const MEMBERSHIP_GAS_CAP: u64 = 200_000;
