//! Card number generation for testing purposes.
//!
//! Generated numbers pass the Luhn check and classify as the requested
//! brand, but they are not connected to real accounts.
//!
//! # Example
//!
//! ```
//! use card_brand::generate::{generate_card_deterministic, CardGenerator};
//! use card_brand::{validate, CardBrand};
//!
//! // Generate a deterministic Visa card (no randomness required)
//! let number = generate_card_deterministic(CardBrand::Visa);
//! assert!(number.starts_with('4'));
//! assert_eq!(validate(&number).brand(), Some(CardBrand::Visa));
//!
//! // Use builder pattern
//! let number = CardGenerator::new(CardBrand::Elo).generate_deterministic();
//! assert_eq!(validate(&number).brand(), Some(CardBrand::Elo));
//! ```

use crate::luhn;
use crate::CardBrand;

#[cfg(feature = "generate")]
use rand::Rng;

/// Returns the prefix used to generate numbers for a brand.
///
/// Elo uses `5066`: its other prefixes begin with `4` and are claimed by
/// Visa, which is evaluated first.
pub const fn prefix_for_brand(brand: CardBrand) -> &'static str {
    match brand {
        CardBrand::Visa => "4",
        CardBrand::Mastercard => "51",
        CardBrand::Amex => "34",
        CardBrand::Elo => "5066",
        CardBrand::Diners => "36",
    }
}

/// Default length for each card brand.
pub const fn default_length(brand: CardBrand) -> usize {
    match brand {
        CardBrand::Visa => 16,
        CardBrand::Mastercard => 16,
        CardBrand::Amex => 15,
        CardBrand::Elo => 16,
        CardBrand::Diners => 14,
    }
}

/// Generates a valid card number for the given brand using random digits.
///
/// Requires the `generate` feature (which enables the `rand` dependency).
#[cfg(feature = "generate")]
pub fn generate_card(brand: CardBrand) -> String {
    generate_card_with_prefix(prefix_for_brand(brand), default_length(brand))
}

/// Generates a valid card number with the given prefix and length.
///
/// Requires the `generate` feature.
///
/// # Panics
///
/// Panics if prefix length >= total length.
#[cfg(feature = "generate")]
pub fn generate_card_with_prefix(prefix: &str, length: usize) -> String {
    let mut rng = rand::thread_rng();
    generate_card_with_rng(prefix, length, &mut rng)
}

/// Generates a valid card number using a provided RNG.
///
/// This is useful for reproducible test generation with seeded RNGs.
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng>(prefix: &str, length: usize, rng: &mut R) -> String {
    fill_and_finish(prefix, length, || rng.gen_range(0..10))
}

/// Generates a valid card number deterministically (no randomness).
///
/// # Example
///
/// ```
/// use card_brand::generate::generate_card_deterministic;
/// use card_brand::CardBrand;
///
/// let number = generate_card_deterministic(CardBrand::Diners);
/// assert_eq!(number, "36000000000008");
/// assert_eq!(number, generate_card_deterministic(CardBrand::Diners));
/// ```
pub fn generate_card_deterministic(brand: CardBrand) -> String {
    generate_card_deterministic_with_prefix(prefix_for_brand(brand), default_length(brand))
}

/// Generates a valid card number deterministically with a custom prefix.
///
/// Fills middle digits with zeros and calculates a valid check digit.
///
/// # Panics
///
/// Panics if prefix length >= total length.
pub fn generate_card_deterministic_with_prefix(prefix: &str, length: usize) -> String {
    fill_and_finish(prefix, length, || 0)
}

fn fill_and_finish(prefix: &str, length: usize, mut next_digit: impl FnMut() -> u8) -> String {
    assert!(
        prefix.len() < length,
        "Prefix length must be less than total length"
    );

    let mut digits: Vec<u8> = prefix
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();

    while digits.len() < length - 1 {
        digits.push(next_digit());
    }

    let check_digit = luhn::generate_check_digit(&digits);
    digits.push(check_digit);

    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

/// Card generator builder for more complex generation scenarios.
#[derive(Debug, Clone)]
pub struct CardGenerator {
    prefix: String,
    length: usize,
}

impl CardGenerator {
    /// Creates a new card generator for the given brand.
    pub fn new(brand: CardBrand) -> Self {
        Self {
            prefix: prefix_for_brand(brand).to_string(),
            length: default_length(brand),
        }
    }

    /// Creates a new card generator with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            length: 16,
        }
    }

    /// Sets the card length.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Generates a card number deterministically.
    pub fn generate_deterministic(&self) -> String {
        generate_card_deterministic_with_prefix(&self.prefix, self.length)
    }

    /// Generates a card number with randomness.
    #[cfg(feature = "generate")]
    pub fn generate(&self) -> String {
        generate_card_with_prefix(&self.prefix, self.length)
    }

    /// Generates multiple card numbers.
    #[cfg(feature = "generate")]
    pub fn generate_many(&self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.generate()).collect()
    }
}
