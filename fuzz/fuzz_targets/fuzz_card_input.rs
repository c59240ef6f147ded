//! Fuzz target for arbitrary card number input.
//!
//! None of the string entry points may panic, and a parsed card must agree
//! with the two core checks.

#![no_main]

use card_check::{classify_brand, validate_checksum, CardNumber};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let brand = classify_brand(data);
    let checksum = validate_checksum(data);

    if let Ok(card) = CardNumber::parse(data) {
        if checksum.is_ok() {
            assert_eq!(checksum, Ok(true));
            assert_eq!(card.brand(), brand);
        }
    }
});
