//! Masking utilities for card numbers.
//!
//! Only the last four digits of a card number may be shown to users or
//! written to logs. Everything in this module produces output of that shape.

use crate::CardNumber;
use zeroize::Zeroizing;

/// Masks a parsed card number showing only the last 4 digits.
///
/// Format: `****-****-****-1234`
///
/// # Example
///
/// ```
/// use card_check::CardNumber;
///
/// let card = CardNumber::parse("4242 4242 4242 4242").unwrap();
/// assert_eq!(card.masked(), "****-****-****-4242");
/// ```
#[inline]
pub fn mask_card(card: &CardNumber) -> String {
    let digits = Zeroizing::new(card.number());
    mask_digits(&digits)
}

/// Masks a raw card number string.
///
/// Non-digit characters are dropped before masking, so this is safe to call
/// on input that has not been validated yet.
#[inline]
pub fn mask_string(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    mask_digits(&digits)
}

fn mask_digits(digits: &str) -> String {
    let len = digits.len();
    if len <= 4 {
        return "*".repeat(len);
    }

    let masked_count = len - 4;
    let mut result = String::with_capacity(len + len / 4);

    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    if masked_count % 4 == 0 {
        result.push('-');
    }

    result.push_str(&digits[masked_count..]);
    result
}

/// Extracts the last 4 digits from a card number string.
///
/// Returns an empty string if there are fewer than 4 digits.
#[inline]
pub fn last_four_from_string(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 4 {
        digits[digits.len() - 4..].iter().collect()
    } else {
        String::new()
    }
}

/// Constant-time comparison of two byte slices.
///
/// Takes the same time regardless of where the slices differ, so comparing
/// card numbers does not leak how many leading digits matched.
///
/// # Example
///
/// ```
/// use card_check::mask::constant_time_eq;
///
/// assert!(constant_time_eq(b"4242424242424242", b"4242424242424242"));
/// assert!(!constant_time_eq(b"4242424242424242", b"4242424242424241"));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }

    diff == 0
}
