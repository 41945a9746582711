//! Minimal big-endian parsing helpers.
//!
//! Used for the packed multiSend payload and the storage encoding of function policies.

use alloc::vec::Vec;

use stylus_sdk::alloy_primitives::{Address, U256};

pub fn read_slice<'a>(bytes: &'a [u8], i: &mut usize, len: usize) -> Result<&'a [u8], ()> {
    let end = i.checked_add(len).ok_or(())?;
    let out = bytes.get(*i..end).ok_or(())?;
    *i = end;
    Ok(out)
}

pub fn read_vec(bytes: &[u8], i: &mut usize, len: usize) -> Result<Vec<u8>, ()> {
    read_slice(bytes, i, len).map(<[u8]>::to_vec)
}

pub fn read_u8(bytes: &[u8], i: &mut usize) -> Result<u8, ()> {
    let b = *bytes.get(*i).ok_or(())?;
    *i += 1;
    Ok(b)
}

pub fn read_u32_be(bytes: &[u8], i: &mut usize) -> Result<u32, ()> {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(read_slice(bytes, i, 4)?);
    Ok(u32::from_be_bytes(buf))
}

pub fn read_u256_be(bytes: &[u8], i: &mut usize) -> Result<U256, ()> {
    read_slice(bytes, i, 32).map(U256::from_be_slice)
}

pub fn read_address(bytes: &[u8], i: &mut usize) -> Result<Address, ()> {
    read_slice(bytes, i, 20).map(Address::from_slice)
}

/// Interpret a 32-byte word as a length/offset. Values that cannot index memory are rejected.
pub fn u256_to_usize(value: U256) -> Result<usize, ()> {
    usize::try_from(value).map_err(|_| ())
}
