//! Membership oracle clients. Off-chain tests use `storage::memory::MemoryMembership`.

pub mod onchain;

pub use onchain::BadgerMembership;
