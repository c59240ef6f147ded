//! Test card numbers for sandbox requests.
//!
//! Generated numbers pass the Luhn check and classify as the requested brand.
//! They are not connected to real accounts.
//!
//! # Example
//!
//! ```
//! use card_check::generate::generate_card_deterministic;
//! use card_check::{classify_brand, validate_checksum, CardBrand};
//!
//! let number = generate_card_deterministic(CardBrand::Discover).unwrap();
//! assert!(number.starts_with("6011"));
//! assert_eq!(validate_checksum(&number), Ok(true));
//! assert_eq!(classify_brand(&number), CardBrand::Discover);
//! ```

use crate::classify::BRAND_RULES;
use crate::luhn::{self, digit_value};
use crate::CardBrand;

#[cfg(feature = "generate")]
use rand::Rng;

/// Usual number length for a brand.
pub const fn default_length(brand: CardBrand) -> usize {
    match brand {
        CardBrand::AmericanExpress => 15,
        CardBrand::DinersClub => 14,
        _ => 16,
    }
}

/// Returns the first prefix in the classification table for `brand`.
///
/// Taking the first rule guarantees the generated number classifies back to
/// the same brand. `None` for [`CardBrand::Unknown`].
pub fn prefix_for_brand(brand: CardBrand) -> Option<&'static str> {
    BRAND_RULES
        .iter()
        .find(|rule| rule.brand == brand)
        .map(|rule| rule.prefix)
}

/// Generates a valid number for `brand` with a zero-filled body.
///
/// The same brand always yields the same number.
pub fn generate_card_deterministic(brand: CardBrand) -> Option<String> {
    let prefix = prefix_for_brand(brand)?;
    Some(generate_card_deterministic_with_prefix(
        prefix,
        default_length(brand),
    ))
}

/// Generates a valid number starting with `prefix`, zero-filled to `length`.
///
/// Non-digit characters in `prefix` are skipped. A prefix that already
/// fills `length` is truncated to make room for the check digit.
pub fn generate_card_deterministic_with_prefix(prefix: &str, length: usize) -> String {
    complete_number(prefix, length, |_| 0)
}

fn complete_number(prefix: &str, length: usize, mut fill: impl FnMut(usize) -> u8) -> String {
    let body_len = length.saturating_sub(1);

    let mut digits: Vec<u8> = prefix.chars().filter_map(digit_value).collect();
    digits.truncate(body_len);

    while digits.len() < body_len {
        digits.push(fill(digits.len()));
    }

    let check_digit = luhn::generate_check_digit(&digits);
    digits.push(check_digit);

    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

/// Generates a valid number for `brand` with random body digits.
///
/// Requires the `generate` feature. `None` for [`CardBrand::Unknown`].
#[cfg(feature = "generate")]
pub fn generate_card(brand: CardBrand) -> Option<String> {
    let prefix = prefix_for_brand(brand)?;
    Some(generate_card_with_rng(
        prefix,
        default_length(brand),
        &mut rand::thread_rng(),
    ))
}

/// Generates a valid number using a provided RNG.
///
/// Useful for reproducible test data with a seeded RNG.
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng>(prefix: &str, length: usize, rng: &mut R) -> String {
    complete_number(prefix, length, |_| rng.gen_range(0..10))
}

/// Generates `count` random numbers for `brand`.
#[cfg(feature = "generate")]
pub fn generate_cards(brand: CardBrand, count: usize) -> Vec<String> {
    (0..count).filter_map(|_| generate_card(brand)).collect()
}
