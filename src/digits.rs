//! Input normalization.
//!
//! Card numbers arrive formatted for humans (`4111 1111 1111 1111`,
//! `4111-1111-1111-1111`). Normalization drops whitespace and hyphens and
//! nothing else; whatever remains must be ASCII digits.

use std::fmt;
use zeroize::Zeroize;

use crate::error::ValidationError;

/// Returns true for characters removed during normalization.
#[inline]
pub fn is_separator(c: char) -> bool {
    c == '-' || c.is_whitespace()
}

/// Strips separators from `input` without checking what remains.
///
/// # Example
///
/// ```
/// use card_brand::digits::normalize;
///
/// assert_eq!(normalize("4111 1111-1111 1111"), "4111111111111111");
/// assert_eq!(normalize("41x1"), "41x1");
/// ```
pub fn normalize(input: &str) -> String {
    input.chars().filter(|&c| !is_separator(c)).collect()
}

/// A non-empty string of ASCII digits derived from raw input.
///
/// The buffer is wiped when the value is dropped, and neither `Debug`
/// nor any other formatting exposes the digits.
#[derive(Clone, PartialEq, Eq)]
pub struct DigitString {
    digits: String,
}

impl DigitString {
    /// Normalizes `input` and checks that only digits remain.
    ///
    /// # Errors
    ///
    /// * [`ValidationError::InvalidCharacter`] for the first character that
    ///   is neither a digit nor a separator.
    /// * [`ValidationError::Empty`] if no digits are left.
    ///
    /// # Example
    ///
    /// ```
    /// use card_brand::digits::DigitString;
    ///
    /// let digits = DigitString::parse("3782 822463 10005").unwrap();
    /// assert_eq!(digits.as_str(), "378282246310005");
    /// assert_eq!(digits.len(), 15);
    /// ```
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let mut digits = String::with_capacity(input.len());

        for (position, c) in input.chars().enumerate() {
            if c.is_ascii_digit() {
                digits.push(c);
            } else if !is_separator(c) {
                digits.zeroize();
                return Err(ValidationError::InvalidCharacter {
                    position,
                    character: c,
                });
            }
        }

        if digits.is_empty() {
            return Err(ValidationError::Empty);
        }

        Ok(Self { digits })
    }

    /// Returns the digits as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Returns the digits as numeric values (0-9).
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits.bytes().map(|b| b - b'0')
    }

    /// Returns the number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false; a parsed digit string holds at least one digit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl fmt::Debug for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitString")
            .field("len", &self.digits.len())
            .finish_non_exhaustive()
    }
}

impl Drop for DigitString {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}
