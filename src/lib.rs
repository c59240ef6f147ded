//! # card_check
//!
//! Card number checks for a payment API client: Luhn checksum validation and
//! brand classification from BIN prefixes. Both are pure functions that run
//! before any request reaches the remote API.
//!
//! ## Quick Start
//!
//! ```rust
//! use card_check::{classify_brand, validate_checksum, CardBrand};
//!
//! assert_eq!(validate_checksum("4242424242424242"), Ok(true));
//! assert_eq!(validate_checksum("4242424242424241"), Ok(false));
//! assert!(validate_checksum("12a4").is_err());
//!
//! assert_eq!(classify_brand("4242424242424242"), CardBrand::Visa);
//! assert_eq!(classify_brand("6011000000000004"), CardBrand::Discover);
//! assert_eq!(classify_brand("0000000000000000"), CardBrand::Unknown);
//! ```
//!
//! ## Card Intake
//!
//! ```rust
//! use card_check::{CardBrand, CardNumber};
//!
//! let card = CardNumber::parse("3782 822463 10005").unwrap();
//! assert_eq!(card.brand(), CardBrand::AmericanExpress);
//!
//! // Safe for logging - never exposes the full number
//! assert_eq!(card.masked(), "****-****-***0005");
//! ```
//!
//! ## Supported Card Brands
//!
//! | Brand | Prefix |
//! |-------|--------|
//! | Visa | 4 |
//! | JCB | 2131, 1800, other 3 |
//! | Discover | 6011 |
//! | MasterCard | 51-55 |
//! | American Express | 34, 37 |
//! | Diners Club | 36, 300-305 |
//!
//! Anything else is `Unknown`.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Brand labels as JSON strings |
//! | `generate` | Random test card generation |
//! | `cli` | `cardcheck` command-line tool |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod brand;
pub mod classify;
pub mod error;
pub mod expiry;
pub mod generate;
pub mod luhn;
pub mod mask;
pub mod validate;

// Re-export main types at crate root
pub use brand::{CardBrand, UnknownBrandLabel};
pub use classify::{classify_brand, BrandRule, BRAND_RULES};
pub use error::{ParseError, ValidationError};
pub use luhn::validate_checksum;
pub use validate::{is_valid, CardNumber, MAX_CARD_DIGITS};
