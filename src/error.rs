//! Rich error types for card number validation.
//!
//! [`crate::validate`] never fails; it folds every outcome into a
//! [`crate::ValidationResult`]. [`crate::check`] exposes the same outcomes
//! as a [`ValidationError`] for callers that want to say *why* a number
//! was rejected.

use crate::CardBrand;
use std::fmt;

/// Reasons a card number is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No digits remain once separators are stripped.
    Empty,

    /// A character other than a digit or separator was found.
    ///
    /// Only digits (0-9), whitespace, and hyphens are allowed.
    InvalidCharacter {
        /// The position in the input string, counted in characters.
        position: usize,
        /// The invalid character that was found.
        character: char,
    },

    /// The digits match no known brand's length and prefix.
    UnknownBrand,

    /// The brand was recognized but the Luhn checksum failed.
    ///
    /// This usually indicates a typo in the card number.
    InvalidChecksum {
        /// The brand the number was classified as.
        brand: CardBrand,
    },
}

impl ValidationError {
    /// Returns the brand that was recognized before the failure, if any.
    #[inline]
    pub const fn brand(&self) -> Option<CardBrand> {
        match self {
            Self::InvalidChecksum { brand } => Some(*brand),
            _ => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number contains no digits"),

            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits, spaces, and hyphens allowed)",
                    character.escape_default(),
                    position
                )
            }

            Self::UnknownBrand => {
                write!(f, "unknown card brand - check the card number prefix and length")
            }

            Self::InvalidChecksum { brand } => {
                write!(
                    f,
                    "invalid checksum for {} card (Luhn check failed) - please verify the card number",
                    brand
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Error returned when parsing an unrecognized brand identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBrandError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseBrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown card brand '{}' (expected visa, mastercard, amex, elo, or diners)",
            self.input.escape_default()
        )
    }
}

impl std::error::Error for ParseBrandError {}
