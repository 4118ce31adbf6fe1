//! Card brand detection using prefix and length rules.
//!
//! The classifier strips separators, then walks [`BRAND_RULES`] in order and
//! returns the first brand whose accepted lengths include the number's
//! length and whose prefix pattern matches its leading digits. Only the
//! leading [`PREFIX_WIDTH`] characters and the length are ever inspected,
//! so classification never copies the number.

use crate::brand::{BrandRule, BRAND_RULES, PREFIX_WIDTH};
use crate::digits::is_separator;
use crate::CardBrand;

/// Detects the card brand of a raw, possibly formatted, card number.
///
/// Whitespace and hyphens are ignored. Other characters are not rejected
/// here; they count towards the length and take part in prefix matching
/// like any other character. Use [`crate::validate`] to also enforce
/// digits-only input and the checksum.
///
/// # Example
///
/// ```
/// use card_brand::detect::classify;
/// use card_brand::CardBrand;
///
/// assert_eq!(classify("4111 1111 1111 1111"), Some(CardBrand::Visa));
/// assert_eq!(classify("3782-822463-10005"), Some(CardBrand::Amex));
/// assert_eq!(classify("1234567890123456"), None);
/// ```
#[inline]
pub fn classify(input: &str) -> Option<CardBrand> {
    matching_rule(input).map(|rule| rule.brand)
}

/// Returns the first rule in [`BRAND_RULES`] that `input` satisfies.
///
/// # Example
///
/// ```
/// use card_brand::detect::matching_rule;
/// use card_brand::CardBrand;
///
/// let rule = matching_rule("5066000000000000").unwrap();
/// assert_eq!(rule.brand, CardBrand::Elo);
/// assert_eq!(rule.lengths, &[16]);
/// ```
pub fn matching_rule(input: &str) -> Option<&'static BrandRule> {
    let mut lead = ['\0'; PREFIX_WIDTH];
    let mut length = 0usize;

    for c in input.chars().filter(|&c| !is_separator(c)) {
        if length < PREFIX_WIDTH {
            lead[length] = c;
        }
        length += 1;
    }

    let lead = &lead[..length.min(PREFIX_WIDTH)];
    BRAND_RULES.iter().find(|rule| rule.matches(lead, length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visa_detection() {
        assert_eq!(classify("4111111111111111"), Some(CardBrand::Visa));
        assert_eq!(classify("4222222222222"), Some(CardBrand::Visa));
        assert_eq!(classify("4000000000000000006"), Some(CardBrand::Visa));
        // 15 digits is not a Visa length
        assert_eq!(classify("411111111111111"), None);
    }

    #[test]
    fn test_mastercard_detection() {
        assert_eq!(classify("5100000000000008"), Some(CardBrand::Mastercard));
        assert_eq!(classify("5500000000000004"), Some(CardBrand::Mastercard));
        assert_eq!(classify("5425233010103442"), Some(CardBrand::Mastercard));
        assert_eq!(classify("5000000000000009"), None);
        assert_eq!(classify("5600000000000000"), None);
        // 2-series is outside the table
        assert_eq!(classify("2223000048400011"), None);
    }

    #[test]
    fn test_amex_detection() {
        assert_eq!(classify("340000000000009"), Some(CardBrand::Amex));
        assert_eq!(classify("378282246310005"), Some(CardBrand::Amex));
        assert_eq!(classify("3782822463100050"), None);
    }

    #[test]
    fn test_elo_detection() {
        assert_eq!(classify("5066000000000000"), Some(CardBrand::Elo));
        assert_eq!(classify("5066991111111118"), Some(CardBrand::Elo));
    }

    #[test]
    fn test_elo_prefixes_starting_with_four_resolve_to_visa() {
        // Visa is evaluated first and also accepts 16 digits
        assert_eq!(classify("4011000000000009"), Some(CardBrand::Visa));
        assert_eq!(classify("4576000000000006"), Some(CardBrand::Visa));
        assert_eq!(classify("4916000000000005"), Some(CardBrand::Visa));
    }

    #[test]
    fn test_diners_detection() {
        assert_eq!(classify("30569309025904"), Some(CardBrand::Diners));
        assert_eq!(classify("36700102000000"), Some(CardBrand::Diners));
        assert_eq!(classify("38520000023237"), Some(CardBrand::Diners));
        assert_eq!(classify("3056930902590"), None);
    }

    #[test]
    fn test_formatted_input() {
        assert_eq!(classify("4111-1111-1111-1111"), Some(CardBrand::Visa));
        assert_eq!(classify(" 3056 930902 5904 "), Some(CardBrand::Diners));
    }

    #[test]
    fn test_non_digits_are_not_rejected() {
        // Length and prefix are all the classifier looks at
        assert_eq!(classify("4abcdefghijklmno"), Some(CardBrand::Visa));
        assert_eq!(classify("invalid"), None);
    }

    #[test]
    fn test_unknown_brand() {
        assert_eq!(classify("1234567890123456"), None);
        assert_eq!(classify("6011111111111117"), None);
        assert_eq!(classify("3530111333300000"), None);
        assert_eq!(classify("0000000000000000"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("  --  "), None);
        assert_eq!(classify("4"), None);
    }

    #[test]
    fn test_matching_rule_is_first_in_table_order() {
        let rule = matching_rule("4011000000000009").unwrap();
        assert_eq!(rule.brand, CardBrand::Visa);
        assert!(std::ptr::eq(rule, &BRAND_RULES[0]));
    }
}
