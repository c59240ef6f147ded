//! Luhn checksum validation for card numbers.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) weights every
//! second digit from the right and checks that the total is divisible by 10.
//! It catches single-digit typos and most adjacent transpositions.
//!
//! [`validate_checksum`] works on the raw string form used by the rest of the
//! client. The slice-level functions work on digit values (0-9) and are shared
//! with test card generation.

use crate::error::ParseError;

/// Lookup table for doubled digits: double the value, subtract 9 if > 9.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks a card number string against the Luhn checksum.
///
/// Every character must be an ASCII decimal digit. Separators are not
/// stripped here; use [`crate::CardNumber::parse`] for human-typed input.
///
/// Returns `Ok(false)` for an empty string: there are no digits, so there is
/// nothing to validate.
///
/// # Errors
///
/// Returns [`ParseError`] for the first (leftmost) character that is not a
/// digit. Non-digits are never counted as zero.
///
/// # Example
///
/// ```
/// use card_check::validate_checksum;
///
/// assert_eq!(validate_checksum("4242424242424242"), Ok(true));
/// assert_eq!(validate_checksum("4242424242424241"), Ok(false));
///
/// let err = validate_checksum("12a4").unwrap_err();
/// assert_eq!(err.position, 2);
/// assert_eq!(err.character, 'a');
/// ```
pub fn validate_checksum(number: &str) -> Result<bool, ParseError> {
    let digits = parse_digits(number).map_err(|err| {
        tracing::debug!(
            position = err.position,
            character = %err.character.escape_default(),
            "checksum input is not numeric"
        );
        err
    })?;

    Ok(validate(&digits))
}

/// Converts a string of ASCII digits into digit values.
///
/// # Errors
///
/// Returns [`ParseError`] for the first character that is not `0`-`9`.
///
/// # Example
///
/// ```
/// use card_check::luhn::parse_digits;
///
/// assert_eq!(parse_digits("4012").unwrap(), vec![4, 0, 1, 2]);
/// assert!(parse_digits("40-12").is_err());
/// ```
pub fn parse_digits(number: &str) -> Result<Vec<u8>, ParseError> {
    number
        .chars()
        .enumerate()
        .map(|(position, c)| digit_value(c).ok_or(ParseError::new(position, c)))
        .collect()
}

/// Returns the value of an ASCII decimal digit.
#[inline]
pub(crate) fn digit_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        _ => None,
    }
}

/// Validates a sequence of digit values using the Luhn algorithm.
///
/// Returns `false` for an empty slice.
///
/// # Example
///
/// ```
/// use card_check::luhn::validate;
///
/// let digits = [4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2];
/// assert!(validate(&digits));
///
/// let invalid = [4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 1];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10) for a sequence of digits.
///
/// The rightmost digit is the check digit and is never doubled; from there
/// every second digit moving left is doubled.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    let mut sum: u32 = 0;
    let mut doubling = false;

    for &digit in digits.iter().rev() {
        sum += if doubling {
            DOUBLE_TABLE[digit as usize] as u32
        } else {
            digit as u32
        };
        doubling = !doubling;
    }

    sum
}

/// Computes the check digit to append to a partial card number.
///
/// Once appended, every digit here moves one position further from the right,
/// so the doubling starts with the current rightmost digit.
///
/// # Example
///
/// ```
/// use card_check::luhn::generate_check_digit;
///
/// let partial = [4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4];
/// assert_eq!(generate_check_digit(&partial), 2);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    let mut sum: u32 = 0;
    let mut doubling = true;

    for &digit in digits.iter().rev() {
        sum += if doubling {
            DOUBLE_TABLE[digit as usize] as u32
        } else {
            digit as u32
        };
        doubling = !doubling;
    }

    ((10 - (sum % 10)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert_eq!(validate_checksum("4242424242424242"), Ok(true));
        assert_eq!(validate_checksum("4111111111111111"), Ok(true));
        assert_eq!(validate_checksum("5555555555554444"), Ok(true));
        assert_eq!(validate_checksum("378282246310005"), Ok(true));
        assert_eq!(validate_checksum("6011000000000004"), Ok(true));
        assert_eq!(validate_checksum("30569309025904"), Ok(true));
    }

    #[test]
    fn test_invalid_numbers() {
        assert_eq!(validate_checksum("4242424242424241"), Ok(false));
        assert_eq!(validate_checksum("4111111111111112"), Ok(false));
        assert_eq!(validate_checksum("1234567890123456"), Ok(false));
    }

    #[test]
    fn test_non_digit_is_parse_error() {
        assert_eq!(
            validate_checksum("12a4"),
            Err(ParseError {
                position: 2,
                character: 'a'
            })
        );
    }

    #[test]
    fn test_only_non_digits() {
        let err = validate_checksum("abcd").unwrap_err();
        assert_eq!(err.position, 0);
        assert_eq!(err.character, 'a');
    }

    #[test]
    fn test_separators_are_not_digits() {
        assert!(validate_checksum("4242 4242 4242 4242").is_err());
        assert!(validate_checksum("4242-4242-4242-4242").is_err());
    }

    #[test]
    fn test_leftmost_error_is_reported() {
        let err = validate_checksum("1x2y").unwrap_err();
        assert_eq!(err.position, 1);
        assert_eq!(err.character, 'x');
    }

    #[test]
    fn test_non_ascii_digit_rejected() {
        // Arabic-Indic digit three
        let err = validate_checksum("12\u{0663}4").unwrap_err();
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_empty_input_is_invalid() {
        assert_eq!(validate_checksum(""), Ok(false));
        assert!(!validate(&[]));
    }

    #[test]
    fn test_single_digit() {
        assert_eq!(validate_checksum("0"), Ok(true));
        for d in 1..=9u8 {
            assert!(!validate(&[d]), "single digit {} should fail", d);
        }
    }

    #[test]
    fn test_repeated_digit_even_length() {
        // n copies of d with n even: n/2 plain digits and n/2 doubled ones.
        for d in 0..=9u8 {
            for len in [2usize, 4, 8, 16] {
                let digits = vec![d; len];
                let expected = (len as u32 / 2) * (d as u32 + DOUBLE_TABLE[d as usize] as u32);
                assert_eq!(compute_checksum(&digits), expected);
                assert_eq!(validate(&digits), expected % 10 == 0);
            }
        }
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("0189").unwrap(), vec![0, 1, 8, 9]);
        assert_eq!(parse_digits("").unwrap(), Vec::<u8>::new());
        assert_eq!(parse_digits("9 1").unwrap_err(), ParseError::new(1, ' '));
    }

    #[test]
    fn test_generate_check_digit() {
        let partial = [4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4];
        assert_eq!(generate_check_digit(&partial), 2);

        let partial = [5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4];
        assert_eq!(generate_check_digit(&partial), 4);

        let partial = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0];
        assert_eq!(generate_check_digit(&partial), 5);
    }

    #[test]
    fn test_double_table_values() {
        for i in 0..10 {
            let doubled = i * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[i], expected as u8);
        }
    }

    #[test]
    fn test_idempotent() {
        for input in ["4242424242424242", "12a4", "", "0"] {
            assert_eq!(validate_checksum(input), validate_checksum(input));
        }
    }
}
