//! Card number intake.
//!
//! [`CardNumber::parse`] is the gate a card number passes before it is put in
//! a request to the payment API. It accepts the separators people type,
//! runs the Luhn check and classifies the brand, and holds the digits in a
//! buffer that is wiped on drop.

use std::fmt;

use zeroize::{Zeroize, Zeroizing};

use crate::classify::classify_brand;
use crate::error::{ParseError, ValidationError};
use crate::luhn::{self, digit_value};
use crate::mask::constant_time_eq;
use crate::CardBrand;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// A card number that passed the Luhn check.
///
/// # Security
///
/// - Digits live in a fixed-size array zeroed on drop
/// - `Debug` and `Display` only show the masked number
/// - Equality is constant time
#[derive(Clone)]
pub struct CardNumber {
    brand: CardBrand,
    digits: [u8; MAX_CARD_DIGITS],
    digit_count: u8,
}

impl CardNumber {
    /// Parses and checks a card number.
    ///
    /// Spaces and hyphens are ignored. The brand is classified but not
    /// required: a number with no known prefix is accepted as
    /// [`CardBrand::Unknown`].
    ///
    /// # Errors
    ///
    /// - [`ValidationError::Empty`] for an empty string
    /// - [`ValidationError::NoDigits`] when only separators were given
    /// - [`ValidationError::Malformed`] for any other non-digit; the position
    ///   refers to the original input
    /// - [`ValidationError::TooLong`] past 19 digits
    /// - [`ValidationError::InvalidChecksum`] when the Luhn check fails
    ///
    /// # Example
    ///
    /// ```
    /// use card_check::{CardBrand, CardNumber, ValidationError};
    ///
    /// let card = CardNumber::parse("4242-4242-4242-4242").unwrap();
    /// assert_eq!(card.brand(), CardBrand::Visa);
    /// assert_eq!(card.last_four(), "4242");
    ///
    /// let err = CardNumber::parse("4242-4242-4242-4241").unwrap_err();
    /// assert_eq!(err, ValidationError::InvalidChecksum);
    /// ```
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::Empty);
        }

        let mut digits = [0u8; MAX_CARD_DIGITS];
        let mut count = 0usize;

        for (position, c) in input.chars().enumerate() {
            if c == ' ' || c == '-' {
                continue;
            }

            let Some(value) = digit_value(c) else {
                digits.zeroize();
                tracing::debug!(position, "card number contains a non-digit");
                return Err(ParseError::new(position, c).into());
            };

            if count == MAX_CARD_DIGITS {
                digits.zeroize();
                return Err(ValidationError::TooLong {
                    length: count + 1,
                    maximum: MAX_CARD_DIGITS,
                });
            }

            digits[count] = value;
            count += 1;
        }

        if count == 0 {
            return Err(ValidationError::NoDigits);
        }

        let mut card = Self {
            brand: CardBrand::Unknown,
            digits,
            digit_count: count as u8,
        };
        // The local array is a copy; clear it now that `card` owns the digits.
        digits.zeroize();

        if !luhn::validate(card.digits()) {
            tracing::debug!(card = %card.masked(), "card number failed the Luhn check");
            return Err(ValidationError::InvalidChecksum);
        }

        card.brand = classify_brand(&Zeroizing::new(card.number()));
        Ok(card)
    }

    /// Returns the classified brand.
    #[inline]
    pub const fn brand(&self) -> CardBrand {
        self.brand
    }

    /// Returns the number of digits.
    #[inline]
    pub const fn length(&self) -> usize {
        self.digit_count as usize
    }

    /// Returns the last four digits.
    #[inline]
    pub fn last_four(&self) -> String {
        let digits = self.digits();
        let start = digits.len().saturating_sub(4);
        digits[start..].iter().map(|&d| (b'0' + d) as char).collect()
    }

    /// Returns the full card number, digits only.
    ///
    /// # Security Warning
    ///
    /// Never log the result. Use [`CardNumber::masked`] for display.
    #[inline]
    pub fn number(&self) -> String {
        self.digits().iter().map(|&d| (b'0' + d) as char).collect()
    }

    /// Returns the number masked for display: `****-****-****-1234`.
    #[inline]
    pub fn masked(&self) -> String {
        crate::mask::mask_card(self)
    }

    #[inline]
    pub(crate) fn digits(&self) -> &[u8] {
        &self.digits[..self.digit_count as usize]
    }
}

impl PartialEq for CardNumber {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(self.digits(), other.digits())
    }
}

impl Eq for CardNumber {}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardNumber")
            .field("brand", &self.brand)
            .field("number", &self.masked())
            .field("length", &self.digit_count)
            .finish()
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.brand, self.masked())
    }
}

impl Drop for CardNumber {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

/// Quick boolean check: does `input` parse as a card number with a valid checksum?
///
/// # Example
///
/// ```
/// use card_check::is_valid;
///
/// assert!(is_valid("4242 4242 4242 4242"));
/// assert!(!is_valid("4242 4242 4242 4241"));
/// assert!(!is_valid(""));
/// ```
#[inline]
pub fn is_valid(input: &str) -> bool {
    CardNumber::parse(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let card = CardNumber::parse("4242424242424242").unwrap();
        assert_eq!(card.brand(), CardBrand::Visa);
        assert_eq!(card.length(), 16);
        assert_eq!(card.number(), "4242424242424242");
    }

    #[test]
    fn test_parse_with_separators() {
        let card = CardNumber::parse("3782 822463 10005").unwrap();
        assert_eq!(card.brand(), CardBrand::AmericanExpress);
        assert_eq!(card.length(), 15);

        let card = CardNumber::parse("6011-0000-0000-0004").unwrap();
        assert_eq!(card.brand(), CardBrand::Discover);
    }

    #[test]
    fn test_unknown_brand_is_accepted() {
        let card = CardNumber::parse("0000000000000000").unwrap();
        assert_eq!(card.brand(), CardBrand::Unknown);
    }

    #[test]
    fn test_empty_and_no_digits() {
        assert_eq!(CardNumber::parse("").unwrap_err(), ValidationError::Empty);
        assert_eq!(
            CardNumber::parse(" - ").unwrap_err(),
            ValidationError::NoDigits
        );
    }

    #[test]
    fn test_malformed_position_is_in_original_input() {
        let err = CardNumber::parse("4242 42x2").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Malformed(ParseError {
                position: 7,
                character: 'x'
            })
        );
    }

    #[test]
    fn test_too_long() {
        let err = CardNumber::parse("42424242424242424242").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                length: 20,
                maximum: MAX_CARD_DIGITS
            }
        );
    }

    #[test]
    fn test_invalid_checksum() {
        assert_eq!(
            CardNumber::parse("4242424242424241").unwrap_err(),
            ValidationError::InvalidChecksum
        );
    }

    #[test]
    fn test_last_four() {
        let card = CardNumber::parse("5555555555554444").unwrap();
        assert_eq!(card.last_four(), "4444");

        let card = CardNumber::parse("0").unwrap();
        assert_eq!(card.last_four(), "0");
    }

    #[test]
    fn test_debug_and_display_are_masked() {
        let card = CardNumber::parse("4242424242424242").unwrap();
        let debug = format!("{:?}", card);
        let display = card.to_string();

        assert!(!debug.contains("4242424242424242"));
        assert!(debug.contains("****"));
        assert_eq!(display, "Visa ****-****-****-4242");
    }

    #[test]
    fn test_equality_ignores_formatting() {
        let a = CardNumber::parse("4242424242424242").unwrap();
        let b = CardNumber::parse("4242 4242 4242 4242").unwrap();
        let c = CardNumber::parse("4111111111111111").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("4242424242424242"));
        assert!(!is_valid("4242424242424241"));
        assert!(!is_valid("12a4"));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_card_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardNumber>();
    }
}
