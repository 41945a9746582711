//! Shared utilities for the roles modifier.

pub mod bytes;
pub mod keys;
