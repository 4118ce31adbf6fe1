//! Fuzz target for card validation.
//!
//! Tests that validate() never panics and that its verdict agrees with the
//! detailed check and the classifier.

#![no_main]

use card_brand::{check, classify, passes_luhn, validate, ValidationResult};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let result = validate(data);
    assert_eq!(result, ValidationResult::from(check(data)));
    let _ = passes_luhn(data);

    if result.is_valid() {
        assert!(result.brand().is_some(), "valid verdict without a brand");
        assert_eq!(result.brand(), classify(data));
    }

    // Separators never change the verdict
    let spaced: String = data.chars().flat_map(|c| [c, ' ']).collect();
    assert_eq!(validate(&spaced), result);
});
