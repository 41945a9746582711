//! ABI calldata decoding for scoped parameters.
//!
//! `data` is the full calldata including the 4-byte selector; parameter slot `n` is the head
//! word at `4 + 32 * n`. Only the three shapes a policy can scope are understood, and every read
//! is bounds-checked with overflow-safe arithmetic since the input is attacker controlled.

use stylus_sdk::alloy_primitives::U256;

use crate::{
    errors::DecodeError,
    types::ParameterType,
    utils::bytes::u256_to_usize,
};

pub const SELECTOR_LEN: usize = 4;
pub const WORD: usize = 32;

/// Read the raw bytes of parameter `index` as `param_type`.
///
/// - `Static`: the 32-byte head word.
/// - `Dynamic`: the `length` bytes following the length word the head offset points at.
/// - `Dynamic32`: the `length * 32` bytes following the count word the head offset points at.
pub fn decode_parameter(data: &[u8], index: usize, param_type: ParameterType) -> Result<&[u8], DecodeError> {
    let head = head_position(index)?;
    match param_type {
        ParameterType::Static => word_at(data, head),
        ParameterType::Dynamic => {
            let (start, len) = tail(data, head)?;
            slice(data, start, len)
        }
        ParameterType::Dynamic32 => {
            let (start, count) = tail(data, head)?;
            let len = count.checked_mul(WORD).ok_or(DecodeError::OutOfBounds)?;
            slice(data, start, len)
        }
    }
}

fn head_position(index: usize) -> Result<usize, DecodeError> {
    index
        .checked_mul(WORD)
        .and_then(|offset| offset.checked_add(SELECTOR_LEN))
        .ok_or(DecodeError::OutOfBounds)
}

/// Follow the head word at `head` to a length-prefixed tail; returns (data start, length word).
fn tail(data: &[u8], head: usize) -> Result<(usize, usize), DecodeError> {
    let offset = read_usize(word_at(data, head)?)?;
    // Offsets are relative to the parameter block and must land on a word boundary.
    if offset % WORD != 0 {
        return Err(DecodeError::InvalidOffset);
    }
    let length_pos = offset.checked_add(SELECTOR_LEN).ok_or(DecodeError::OutOfBounds)?;
    let length = read_usize(word_at(data, length_pos)?)?;
    Ok((length_pos + WORD, length))
}

fn word_at(data: &[u8], pos: usize) -> Result<&[u8], DecodeError> {
    slice(data, pos, WORD)
}

fn slice(data: &[u8], start: usize, len: usize) -> Result<&[u8], DecodeError> {
    let end = start.checked_add(len).ok_or(DecodeError::OutOfBounds)?;
    data.get(start..end).ok_or(DecodeError::OutOfBounds)
}

fn read_usize(word: &[u8]) -> Result<usize, DecodeError> {
    u256_to_usize(U256::from_be_slice(word)).map_err(|_| DecodeError::OutOfBounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::{sol, SolCall};
    use stylus_sdk::alloy_primitives::{address, U256};

    sol! {
        function mint(address to, uint256 amount);
        function setName(uint256 id, string name);
        function setValues(bytes32 tag, uint256[] values);
    }

    fn word(value: u64) -> [u8; 32] {
        U256::from(value).to_be_bytes::<32>()
    }

    #[test]
    fn decodes_static_words() {
        let to = address!("00000000000000000000000000000000000000aa");
        let data = mintCall { to, amount: U256::from(99u64) }.abi_encode();

        let first = decode_parameter(&data, 0, ParameterType::Static).unwrap();
        assert_eq!(&first[12..], to.as_slice());
        assert_eq!(decode_parameter(&data, 1, ParameterType::Static).unwrap(), word(99));
        assert_eq!(
            decode_parameter(&data, 2, ParameterType::Static),
            Err(DecodeError::OutOfBounds)
        );
    }

    #[test]
    fn decodes_dynamic_bytes_longer_than_a_word() {
        let name = "This is an input that is larger than 32 bytes and must be scanned for correctness";
        let data = setNameCall { id: U256::from(7u64), name: name.into() }.abi_encode();

        assert_eq!(decode_parameter(&data, 1, ParameterType::Dynamic).unwrap(), name.as_bytes());
    }

    #[test]
    fn decodes_dynamic32_elements() {
        let values = vec![U256::from(1u64), U256::from(2u64), U256::from(3u64)];
        let data = setValuesCall { tag: Default::default(), values }.abi_encode();

        let decoded = decode_parameter(&data, 1, ParameterType::Dynamic32).unwrap();
        let mut expected = Vec::new();
        for v in [1u64, 2, 3] {
            expected.extend_from_slice(&word(v));
        }
        assert_eq!(decoded, expected.as_slice());
    }

    #[test]
    fn rejects_misaligned_offset() {
        let mut data = setNameCall { id: U256::ZERO, name: "abc".into() }.abi_encode();
        // head of parameter 1 is at 4 + 32; bump the offset from 0x40 to 0x41
        data[4 + 32 + 31] = 0x41;

        assert_eq!(
            decode_parameter(&data, 1, ParameterType::Dynamic),
            Err(DecodeError::InvalidOffset)
        );
    }

    #[test]
    fn rejects_offset_and_length_past_end() {
        let mut data = setNameCall { id: U256::ZERO, name: "abc".into() }.abi_encode();
        let original = data.clone();

        // offset pointing beyond calldata
        data[4 + 32 + 30] = 0x10;
        assert_eq!(
            decode_parameter(&data, 1, ParameterType::Dynamic),
            Err(DecodeError::OutOfBounds)
        );

        // length word claiming more bytes than present
        let mut data = original;
        data[4 + 64 + 31] = 0xff;
        assert_eq!(
            decode_parameter(&data, 1, ParameterType::Dynamic),
            Err(DecodeError::OutOfBounds)
        );
    }

    #[test]
    fn rejects_huge_words_without_overflow() {
        let mut data = vec![0u8; 4];
        data.extend_from_slice(&word(32));
        data.extend_from_slice(&U256::MAX.to_be_bytes::<32>());

        assert_eq!(
            decode_parameter(&data, 0, ParameterType::Dynamic32),
            Err(DecodeError::OutOfBounds)
        );
        assert_eq!(
            decode_parameter(&data, usize::MAX, ParameterType::Static),
            Err(DecodeError::OutOfBounds)
        );
    }
}
