//! Byte layout of a [`FunctionPolicy`] as persisted in contract storage.
//!
//! Layout (big-endian for integer fields):
//! - u8 allowed (0 | 1)
//! - u8 execution options
//! - u8 parameter count
//! - per parameter:
//!   - u8 is_scoped (0 | 1)
//!   - u8 parameter type
//!   - u8 comparison
//!   - u32 value count
//!   - per value: u32 len, bytes value
//!
//! An empty byte string means "no policy".

use alloc::vec::Vec;

use crate::{
    types::{Comparison, ExecutionOptions, FunctionPolicy, ParameterPolicy, ParameterType, MAX_PARAMETERS},
    utils::bytes::{read_u32_be, read_u8, read_vec},
};

#[derive(Debug, PartialEq, Eq)]
pub enum CodecError {
    Truncated,
    UnknownVariant(u8),
    TooManyParameters,
    TrailingBytes,
}

pub fn encode_function_policy(policy: &FunctionPolicy) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.push(policy.allowed as u8);
    buf.push(policy.options as u8);
    // Registry caps the table at MAX_PARAMETERS, which fits in a byte.
    buf.push(policy.parameters.len() as u8);
    for parameter in &policy.parameters {
        buf.push(parameter.is_scoped as u8);
        buf.push(parameter.param_type as u8);
        buf.push(parameter.comparison as u8);
        buf.extend_from_slice(&(parameter.comp_values.len() as u32).to_be_bytes());
        for value in &parameter.comp_values {
            buf.extend_from_slice(&(value.len() as u32).to_be_bytes());
            buf.extend_from_slice(value);
        }
    }
    buf
}

pub fn decode_function_policy(bytes: &[u8]) -> Result<FunctionPolicy, CodecError> {
    let mut i = 0usize;
    let allowed = read_bool(bytes, &mut i)?;
    let options = read_enum::<ExecutionOptions>(bytes, &mut i)?;
    let count = read_u8(bytes, &mut i).map_err(|_| CodecError::Truncated)? as usize;
    if count > MAX_PARAMETERS {
        return Err(CodecError::TooManyParameters);
    }

    let mut parameters = Vec::with_capacity(count);
    for _ in 0..count {
        let is_scoped = read_bool(bytes, &mut i)?;
        let param_type = read_enum::<ParameterType>(bytes, &mut i)?;
        let comparison = read_enum::<Comparison>(bytes, &mut i)?;
        let value_count = read_len(bytes, &mut i)?;
        let mut comp_values = Vec::new();
        for _ in 0..value_count {
            let len = read_len(bytes, &mut i)?;
            comp_values.push(read_vec(bytes, &mut i, len).map_err(|_| CodecError::Truncated)?);
        }
        parameters.push(ParameterPolicy {
            is_scoped,
            param_type,
            comparison,
            comp_values,
        });
    }

    if i != bytes.len() {
        return Err(CodecError::TrailingBytes);
    }

    Ok(FunctionPolicy {
        allowed,
        options,
        parameters,
    })
}

fn read_bool(bytes: &[u8], i: &mut usize) -> Result<bool, CodecError> {
    match read_u8(bytes, i).map_err(|_| CodecError::Truncated)? {
        0 => Ok(false),
        1 => Ok(true),
        b => Err(CodecError::UnknownVariant(b)),
    }
}

fn read_enum<T: TryFrom<u8>>(bytes: &[u8], i: &mut usize) -> Result<T, CodecError> {
    let b = read_u8(bytes, i).map_err(|_| CodecError::Truncated)?;
    T::try_from(b).map_err(|_| CodecError::UnknownVariant(b))
}

fn read_len(bytes: &[u8], i: &mut usize) -> Result<usize, CodecError> {
    read_u32_be(bytes, i)
        .map(|len| len as usize)
        .map_err(|_| CodecError::Truncated)
}
