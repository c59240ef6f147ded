//! Card brand classification using BIN prefix matching.
//!
//! The Bank Identification Number (BIN) is the leading part of a card number
//! and identifies the issuing network. Classification walks [`BRAND_RULES`]
//! from top to bottom and returns the brand of the first rule whose prefix the
//! number starts with. More specific prefixes are listed before the broader
//! ones they overlap with, so precedence is visible in the table itself.
//!
//! A number shorter than a rule's prefix never matches that rule; it simply
//! falls through to the next one.

use crate::CardBrand;

/// A single `(prefix, brand)` classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandRule {
    /// Leading digits a number must start with.
    pub prefix: &'static str,
    /// Brand assigned on a match.
    pub brand: CardBrand,
}

impl BrandRule {
    const fn new(prefix: &'static str, brand: CardBrand) -> Self {
        Self { prefix, brand }
    }

    /// Returns true if `number` starts with this rule's prefix.
    ///
    /// The length check comes from `str::get`, which yields `None` when the
    /// number is shorter than the prefix (or the cut is not on a char boundary).
    #[inline]
    pub fn matches(&self, number: &str) -> bool {
        number.get(..self.prefix.len()) == Some(self.prefix)
    }
}

/// Ordered classification table, evaluated top to bottom, first match wins.
pub const BRAND_RULES: &[BrandRule] = &[
    BrandRule::new("4", CardBrand::Visa),
    BrandRule::new("2131", CardBrand::Jcb),
    BrandRule::new("1800", CardBrand::Jcb),
    BrandRule::new("6011", CardBrand::Discover),
    BrandRule::new("51", CardBrand::MasterCard),
    BrandRule::new("52", CardBrand::MasterCard),
    BrandRule::new("53", CardBrand::MasterCard),
    BrandRule::new("54", CardBrand::MasterCard),
    BrandRule::new("55", CardBrand::MasterCard),
    BrandRule::new("34", CardBrand::AmericanExpress),
    BrandRule::new("37", CardBrand::AmericanExpress),
    BrandRule::new("36", CardBrand::DinersClub),
    BrandRule::new("300", CardBrand::DinersClub),
    BrandRule::new("301", CardBrand::DinersClub),
    BrandRule::new("302", CardBrand::DinersClub),
    BrandRule::new("303", CardBrand::DinersClub),
    BrandRule::new("304", CardBrand::DinersClub),
    BrandRule::new("305", CardBrand::DinersClub),
    // Catch-all for the rest of the 3 range.
    BrandRule::new("3", CardBrand::Jcb),
];

/// Returns the first rule in [`BRAND_RULES`] that matches `number`.
#[inline]
pub fn matching_rule(number: &str) -> Option<&'static BrandRule> {
    BRAND_RULES.iter().find(|rule| rule.matches(number))
}

/// Classifies a card number by its leading digits.
///
/// Never fails: numbers with no matching prefix, including empty or very
/// short input, are [`CardBrand::Unknown`].
///
/// # Example
///
/// ```
/// use card_check::{classify_brand, CardBrand};
///
/// assert_eq!(classify_brand("4242424242424242"), CardBrand::Visa);
/// assert_eq!(classify_brand("6011000000000004"), CardBrand::Discover);
/// assert_eq!(classify_brand("341111111111111"), CardBrand::AmericanExpress);
/// assert_eq!(classify_brand("0000000000000000"), CardBrand::Unknown);
/// assert_eq!(classify_brand("3"), CardBrand::Jcb);
/// ```
pub fn classify_brand(number: &str) -> CardBrand {
    match matching_rule(number) {
        Some(rule) => {
            tracing::trace!(prefix = rule.prefix, brand = %rule.brand, "brand rule matched");
            rule.brand
        }
        None => CardBrand::Unknown,
    }
}
