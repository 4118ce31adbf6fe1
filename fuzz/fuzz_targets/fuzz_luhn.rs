//! Fuzz target for Luhn algorithm.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use card_brand::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();
    let text: String = digits.iter().map(|&d| (b'0' + d) as char).collect();

    assert_eq!(luhn::validate(&digits), luhn::luhn_check(&text));

    // Raw bytes are not guaranteed to be digits
    if let Ok(raw) = std::str::from_utf8(data) {
        let _ = luhn::luhn_check(raw);
    }

    let check = luhn::generate_check_digit(&digits);
    assert!(check <= 9, "Check digit should be 0-9");

    let mut with_check = digits.clone();
    with_check.push(check);
    assert!(luhn::validate(&with_check), "Adding check digit should make valid");
});
