//! Card brands and the rule table used to recognize them.
//!
//! Each brand is described by a [`BrandRule`]: the digit lengths it accepts
//! and a predicate over the leading digits. The rules live in
//! [`BRAND_RULES`], an ordered table that the classifier walks front to
//! back. The first rule that matches wins.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseBrandError;

/// Number of leading characters the widest prefix pattern inspects.
pub const PREFIX_WIDTH: usize = 4;

/// Card networks recognized by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardBrand {
    /// Visa - Prefix 4, lengths 13, 16, 19
    Visa,
    /// Mastercard - Prefix 51-55, length 16
    Mastercard,
    /// American Express - Prefix 34, 37, length 15
    Amex,
    /// Elo - Brazilian network, Prefix 4011, 5066, 4576, 4916, length 16
    Elo,
    /// Diners Club - Prefix 30, 36, 38, length 14
    Diners,
}

impl CardBrand {
    /// Every brand, in rule-table order.
    pub const ALL: [CardBrand; 5] = [
        Self::Visa,
        Self::Mastercard,
        Self::Amex,
        Self::Elo,
        Self::Diners,
    ];

    /// Returns the stable lowercase identifier (`"visa"`, `"amex"`, ...).
    #[inline]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Elo => "elo",
            Self::Diners => "diners",
        }
    }

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Elo => "Elo",
            Self::Diners => "Diners Club",
        }
    }

    /// Returns the rule describing this brand.
    #[inline]
    pub fn rule(&self) -> &'static BrandRule {
        &BRAND_RULES[self.index()]
    }

    /// Returns the valid lengths for this card brand.
    #[inline]
    pub fn valid_lengths(&self) -> &'static [u8] {
        self.rule().lengths
    }

    /// Returns true if the given length is valid for this brand.
    #[inline]
    pub fn is_valid_length(&self, length: usize) -> bool {
        self.rule().accepts_length(length)
    }

    /// Position of this brand in [`BRAND_RULES`].
    #[inline]
    pub(crate) const fn index(&self) -> usize {
        match self {
            Self::Visa => 0,
            Self::Mastercard => 1,
            Self::Amex => 2,
            Self::Elo => 3,
            Self::Diners => 4,
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CardBrand {
    type Err = ParseBrandError;

    /// Parses a brand identifier. Matching is ASCII case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|brand| brand.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseBrandError {
                input: s.to_string(),
            })
    }
}

/// A predicate over the leading characters of a normalized card number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    /// Matches when the number starts with any of the listed literals.
    OneOf(&'static [&'static str]),
    /// Matches when the first `width` characters are digits whose value
    /// lies in `low..=high`.
    Range {
        /// How many leading digits form the compared value.
        width: usize,
        /// Lowest accepted value, inclusive.
        low: u16,
        /// Highest accepted value, inclusive.
        high: u16,
    },
}

impl Prefix {
    /// Tests the prefix against the leading characters of a number.
    ///
    /// `lead` holds at most [`PREFIX_WIDTH`] characters; a pattern longer
    /// than what is available never matches.
    pub fn matches(&self, lead: &[char]) -> bool {
        match *self {
            Self::OneOf(literals) => literals.iter().any(|literal| {
                literal.chars().count() <= lead.len()
                    && literal.chars().zip(lead).all(|(expected, &c)| expected == c)
            }),
            Self::Range { width, low, high } => {
                if lead.len() < width {
                    return false;
                }
                let mut value: u16 = 0;
                for &c in &lead[..width] {
                    match c.to_digit(10) {
                        Some(d) => value = value * 10 + d as u16,
                        None => return false,
                    }
                }
                (low..=high).contains(&value)
            }
        }
    }
}

/// Length and prefix constraints identifying one brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandRule {
    /// The brand this rule identifies.
    pub brand: CardBrand,
    /// Accepted digit counts.
    pub lengths: &'static [u8],
    /// Leading-digit pattern.
    pub prefix: Prefix,
}

impl BrandRule {
    /// Returns true if `length` is one of the accepted lengths.
    #[inline]
    pub const fn accepts_length(&self, length: usize) -> bool {
        let mut i = 0;
        while i < self.lengths.len() {
            if self.lengths[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns true if a number with these leading characters and this
    /// length satisfies the rule.
    #[inline]
    pub fn matches(&self, lead: &[char], length: usize) -> bool {
        self.accepts_length(length) && self.prefix.matches(lead)
    }
}

/// The rule table, in evaluation order.
///
/// Visa precedes Elo, so the Elo prefixes starting with `4` are only
/// reachable for lengths Visa does not accept. With the current lengths
/// that leaves `5066` as the effective Elo prefix.
pub static BRAND_RULES: [BrandRule; 5] = [
    BrandRule {
        brand: CardBrand::Visa,
        lengths: &[13, 16, 19],
        prefix: Prefix::OneOf(&["4"]),
    },
    BrandRule {
        brand: CardBrand::Mastercard,
        lengths: &[16],
        prefix: Prefix::Range {
            width: 2,
            low: 51,
            high: 55,
        },
    },
    BrandRule {
        brand: CardBrand::Amex,
        lengths: &[15],
        prefix: Prefix::OneOf(&["34", "37"]),
    },
    BrandRule {
        brand: CardBrand::Elo,
        lengths: &[16],
        prefix: Prefix::OneOf(&["4011", "5066", "4576", "4916"]),
    },
    BrandRule {
        brand: CardBrand::Diners,
        lengths: &[14],
        prefix: Prefix::OneOf(&["30", "36", "38"]),
    },
];
