use alloc::vec::Vec;

use stylus_sdk::alloy_primitives::U256;

use crate::{errors::PermissionError, types::Comparison};

/// Apply `comparison` to a decoded argument.
///
/// Equality is byte-exact. Relative comparisons read both operands as big-endian `uint256` and
/// fail closed unless both are exactly one word.
pub fn compare(comparison: Comparison, actual: &[u8], comp_values: &[Vec<u8>]) -> Result<(), PermissionError> {
    match comparison {
        Comparison::EqualTo => match comp_values.first() {
            Some(expected) if expected.as_slice() == actual => Ok(()),
            _ => Err(PermissionError::ParameterNotAllowed),
        },
        Comparison::OneOf => {
            if comp_values.iter().any(|v| v.as_slice() == actual) {
                Ok(())
            } else {
                Err(PermissionError::ParameterNotAllowed)
            }
        }
        Comparison::GreaterThan => match words(actual, comp_values) {
            Some((lhs, rhs)) if lhs > rhs => Ok(()),
            _ => Err(PermissionError::ParameterLessThanAllowed),
        },
        Comparison::LessThan => match words(actual, comp_values) {
            Some((lhs, rhs)) if lhs < rhs => Ok(()),
            _ => Err(PermissionError::ParameterGreaterThanAllowed),
        },
    }
}

fn words(actual: &[u8], comp_values: &[Vec<u8>]) -> Option<(U256, U256)> {
    let reference = comp_values.first()?;
    if actual.len() != 32 || reference.len() != 32 {
        return None;
    }
    Some((U256::from_be_slice(actual), U256::from_be_slice(reference)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(value: u64) -> Vec<u8> {
        U256::from(value).to_be_bytes::<32>().to_vec()
    }

    #[test]
    fn equal_to_is_byte_exact() {
        assert_eq!(compare(Comparison::EqualTo, &word(99), &[word(99)]), Ok(()));
        assert_eq!(
            compare(Comparison::EqualTo, &word(98), &[word(99)]),
            Err(PermissionError::ParameterNotAllowed)
        );
        assert_eq!(compare(Comparison::EqualTo, b"Test", &[b"Test".to_vec()]), Ok(()));
        assert_eq!(
            compare(Comparison::EqualTo, b"Test", &[b"Tes".to_vec()]),
            Err(PermissionError::ParameterNotAllowed)
        );
    }

    #[test]
    fn equal_to_without_reference_fails_closed() {
        assert_eq!(
            compare(Comparison::EqualTo, &word(0), &[]),
            Err(PermissionError::ParameterNotAllowed)
        );
    }

    #[test]
    fn greater_than_is_strict() {
        let reference = [word(99)];
        assert_eq!(compare(Comparison::GreaterThan, &word(100), &reference), Ok(()));
        for value in [99, 98] {
            assert_eq!(
                compare(Comparison::GreaterThan, &word(value), &reference),
                Err(PermissionError::ParameterLessThanAllowed)
            );
        }
    }

    #[test]
    fn less_than_is_strict() {
        let reference = [word(99)];
        assert_eq!(compare(Comparison::LessThan, &word(98), &reference), Ok(()));
        for value in [99, 100] {
            assert_eq!(
                compare(Comparison::LessThan, &word(value), &reference),
                Err(PermissionError::ParameterGreaterThanAllowed)
            );
        }
    }

    #[test]
    fn relative_comparison_on_non_word_fails_closed() {
        assert_eq!(
            compare(Comparison::GreaterThan, &[0xff; 31], &[word(0)]),
            Err(PermissionError::ParameterLessThanAllowed)
        );
        assert_eq!(
            compare(Comparison::LessThan, &word(0), &[vec![0xff; 33]]),
            Err(PermissionError::ParameterGreaterThanAllowed)
        );
    }

    #[test]
    fn one_of_matches_any_listed_value() {
        let allowed = [word(1), word(2)];
        assert_eq!(compare(Comparison::OneOf, &word(1), &allowed), Ok(()));
        assert_eq!(compare(Comparison::OneOf, &word(2), &allowed), Ok(()));
        assert_eq!(
            compare(Comparison::OneOf, &word(3), &allowed),
            Err(PermissionError::ParameterNotAllowed)
        );
    }
}
