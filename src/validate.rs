//! Main validation orchestration for card numbers.
//!
//! This module combines normalization, brand detection and the Luhn
//! checksum into a single verdict. Each step is a hard gate:
//!
//! 1. Strip whitespace and hyphens.
//! 2. Reject empty or non-digit input.
//! 3. Classify the brand; reject unrecognized numbers.
//! 4. Run the Luhn check. The brand is reported whatever the outcome.

use tracing::{debug, trace};

use crate::digits::DigitString;
use crate::error::ValidationError;
use crate::{detect, luhn, CardBrand};

/// The verdict for one card number.
///
/// `brand` is present whenever the number matched a brand rule, even if the
/// checksum failed, so "wrong checksum" and "unrecognized number" can be
/// told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationResult {
    valid: bool,
    brand: Option<CardBrand>,
}

impl ValidationResult {
    /// The result for malformed or unrecognized input.
    pub const INVALID: Self = Self {
        valid: false,
        brand: None,
    };

    /// Creates a result from its parts.
    #[inline]
    pub const fn new(valid: bool, brand: Option<CardBrand>) -> Self {
        Self { valid, brand }
    }

    /// Returns true if the number was recognized and passed the checksum.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the detected brand, if any.
    #[inline]
    pub const fn brand(&self) -> Option<CardBrand> {
        self.brand
    }
}

impl From<Result<CardBrand, ValidationError>> for ValidationResult {
    fn from(outcome: Result<CardBrand, ValidationError>) -> Self {
        match outcome {
            Ok(brand) => Self::new(true, Some(brand)),
            Err(err) => Self::new(false, err.brand()),
        }
    }
}

/// Validates a card number and reports its brand.
///
/// This is the primary entry point. It never fails: malformed input,
/// unknown brands and bad checksums are all reported through the returned
/// [`ValidationResult`].
///
/// # Example
///
/// ```
/// use card_brand::{validate, CardBrand};
///
/// let result = validate("4111 1111 1111 1111");
/// assert!(result.is_valid());
/// assert_eq!(result.brand(), Some(CardBrand::Visa));
///
/// // Recognized brand, failing checksum
/// let result = validate("4111111111111112");
/// assert!(!result.is_valid());
/// assert_eq!(result.brand(), Some(CardBrand::Visa));
///
/// // Not a card number at all
/// let result = validate("invalid");
/// assert!(!result.is_valid());
/// assert_eq!(result.brand(), None);
/// ```
#[inline]
pub fn validate(input: &str) -> ValidationResult {
    check(input).into()
}

/// Validates a card number, explaining any rejection.
///
/// Returns the brand of a valid number, or the [`ValidationError`]
/// describing the first gate the number failed.
///
/// # Example
///
/// ```
/// use card_brand::{check, CardBrand, ValidationError};
///
/// assert_eq!(check("378282246310005"), Ok(CardBrand::Amex));
/// assert_eq!(check("1234567890123456"), Err(ValidationError::UnknownBrand));
/// assert_eq!(
///     check("378282246310006"),
///     Err(ValidationError::InvalidChecksum { brand: CardBrand::Amex })
/// );
/// ```
pub fn check(input: &str) -> Result<CardBrand, ValidationError> {
    let digits = DigitString::parse(input).map_err(|err| {
        trace!(error = %err, "card number rejected during normalization");
        err
    })?;

    let Some(brand) = detect::classify(digits.as_str()) else {
        trace!(length = digits.len(), "no brand rule matched");
        return Err(ValidationError::UnknownBrand);
    };

    if !luhn::luhn_check(digits.as_str()) {
        debug!(brand = brand.id(), length = digits.len(), "checksum mismatch");
        return Err(ValidationError::InvalidChecksum { brand });
    }

    trace!(brand = brand.id(), length = digits.len(), "card number accepted");
    Ok(brand)
}

/// Quickly checks if a card number is valid without returning the brand.
///
/// # Example
///
/// ```
/// use card_brand::is_valid;
///
/// assert!(is_valid("4111-1111-1111-1111"));
/// assert!(!is_valid("4111-1111-1111-1112"));
/// ```
#[inline]
pub fn is_valid(input: &str) -> bool {
    check(input).is_ok()
}

/// Checks only the Luhn checksum of a formatted card number.
///
/// Separators are stripped first. Brand rules are not consulted; empty or
/// non-digit input fails.
///
/// # Example
///
/// ```
/// use card_brand::passes_luhn;
///
/// assert!(passes_luhn("6011 1111 1111 1117"));
/// assert!(!passes_luhn("4111111111111112"));
/// assert!(!passes_luhn(""));
/// ```
#[inline]
pub fn passes_luhn(input: &str) -> bool {
    DigitString::parse(input)
        .map(|digits| luhn::luhn_check(digits.as_str()))
        .unwrap_or(false)
}
