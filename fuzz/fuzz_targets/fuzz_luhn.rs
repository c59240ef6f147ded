//! Fuzz target for the Luhn checksum.
//!
//! Digit-slice and string entry points must agree, and the generated check
//! digit must always complete a valid number.

#![no_main]

use card_check::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();
    let number: String = digits.iter().map(|&d| (b'0' + d) as char).collect();

    assert_eq!(
        luhn::validate_checksum(&number),
        Ok(luhn::validate(&digits)),
        "string and slice checks disagree"
    );

    let check = luhn::generate_check_digit(&digits);
    assert!(check <= 9, "check digit should be 0-9");

    let mut with_check = digits;
    with_check.push(check);
    assert!(luhn::validate(&with_check), "adding the check digit should make it valid");
});
