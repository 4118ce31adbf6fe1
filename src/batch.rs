//! Batch processing for cleansing lists of card numbers.
//!
//! Every function here is a thin loop over [`validate`]; results keep the
//! order of the input. The `parallel` feature adds rayon-backed variants.

use tracing::debug;

use crate::validate::validate;
use crate::{CardBrand, ValidationResult};

/// Aggregate counts for a batch of card numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    valid: usize,
    invalid: usize,
    unrecognized: usize,
    brands: [usize; 5],
}

impl BatchSummary {
    /// Creates an empty summary.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one result to the summary.
    pub fn record(&mut self, result: &ValidationResult) {
        if result.is_valid() {
            self.valid += 1;
        } else {
            self.invalid += 1;
        }

        match result.brand() {
            Some(brand) => self.brands[brand.index()] += 1,
            None => self.unrecognized += 1,
        }
    }

    /// Total number of results recorded.
    #[inline]
    pub fn total(&self) -> usize {
        self.valid + self.invalid
    }

    /// Number of valid cards.
    #[inline]
    pub fn valid(&self) -> usize {
        self.valid
    }

    /// Number of invalid cards, including unrecognized ones.
    #[inline]
    pub fn invalid(&self) -> usize {
        self.invalid
    }

    /// Number of inputs that matched no brand (or were malformed).
    #[inline]
    pub fn unrecognized(&self) -> usize {
        self.unrecognized
    }

    /// Number of inputs classified as `brand`, whether or not the checksum
    /// passed.
    #[inline]
    pub fn count_for(&self, brand: CardBrand) -> usize {
        self.brands[brand.index()]
    }

    /// Combines two summaries.
    pub fn merge(mut self, other: &Self) -> Self {
        self.valid += other.valid;
        self.invalid += other.invalid;
        self.unrecognized += other.unrecognized;
        for (mine, theirs) in self.brands.iter_mut().zip(other.brands.iter()) {
            *mine += theirs;
        }
        self
    }
}

impl FromIterator<ValidationResult> for BatchSummary {
    fn from_iter<T: IntoIterator<Item = ValidationResult>>(iter: T) -> Self {
        let mut summary = Self::new();
        for result in iter {
            summary.record(&result);
        }
        summary
    }
}

/// Validates a slice of cards, one result per input.
///
/// # Example
///
/// ```
/// use card_brand::batch::validate_batch;
///
/// let cards = ["4111111111111111", "5500000000000004"];
/// let results = validate_batch(&cards);
/// assert!(results[0].is_valid());
/// assert!(results[1].is_valid());
/// ```
#[inline]
pub fn validate_batch<S: AsRef<str>>(cards: &[S]) -> Vec<ValidationResult> {
    cards.iter().map(|c| validate(c.as_ref())).collect()
}

/// Validates a slice of cards in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn validate_batch_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> Vec<ValidationResult> {
    use rayon::prelude::*;
    cards.par_iter().map(|c| validate(c.as_ref())).collect()
}

/// Counts valid and invalid cards in a batch.
///
/// # Returns
///
/// Tuple of (valid_count, invalid_count)
///
/// # Example
///
/// ```
/// use card_brand::batch::count_valid;
///
/// let cards = ["4111111111111111", "1234567890123456", "5500000000000004"];
/// let (valid, invalid) = count_valid(&cards);
/// assert_eq!(valid, 2);
/// assert_eq!(invalid, 1);
/// ```
#[inline]
pub fn count_valid<S: AsRef<str>>(cards: &[S]) -> (usize, usize) {
    let valid = cards
        .iter()
        .filter(|c| validate(c.as_ref()).is_valid())
        .count();

    (valid, cards.len() - valid)
}

/// Counts valid and invalid cards in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn count_valid_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> (usize, usize) {
    use rayon::prelude::*;

    let valid: usize = cards
        .par_iter()
        .filter(|c| validate(c.as_ref()).is_valid())
        .count();

    (valid, cards.len() - valid)
}

/// Validates a batch and returns aggregate counts.
///
/// # Example
///
/// ```
/// use card_brand::batch::summarize;
/// use card_brand::CardBrand;
///
/// let cards = ["4111111111111111", "4111111111111112", "378282246310005", "bad"];
/// let summary = summarize(&cards);
/// assert_eq!(summary.valid(), 2);
/// assert_eq!(summary.count_for(CardBrand::Visa), 2);
/// assert_eq!(summary.unrecognized(), 1);
/// ```
pub fn summarize<S: AsRef<str>>(cards: &[S]) -> BatchSummary {
    let summary: BatchSummary = cards.iter().map(|c| validate(c.as_ref())).collect();
    debug!(
        total = summary.total(),
        valid = summary.valid(),
        unrecognized = summary.unrecognized(),
        "batch validated"
    );
    summary
}

/// Validates a batch in parallel and returns aggregate counts.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn summarize_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> BatchSummary {
    use rayon::prelude::*;

    let summary = cards
        .par_iter()
        .fold(BatchSummary::new, |mut acc, c| {
            acc.record(&validate(c.as_ref()));
            acc
        })
        .reduce(BatchSummary::new, |a, b| a.merge(&b));
    debug!(
        total = summary.total(),
        valid = summary.valid(),
        unrecognized = summary.unrecognized(),
        "batch validated in parallel"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_VISA: &str = "4111111111111111";
    const VALID_MC: &str = "5500000000000004";
    const VALID_AMEX: &str = "378282246310005";
    const BAD_CHECKSUM_VISA: &str = "4111111111111112";
    const INVALID: &str = "1234567890123456";

    #[test]
    fn test_validate_batch_keeps_order() {
        let cards = vec![VALID_VISA, VALID_MC, INVALID, VALID_AMEX];
        let results = validate_batch(&cards);

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].brand(), Some(CardBrand::Visa));
        assert_eq!(results[1].brand(), Some(CardBrand::Mastercard));
        assert_eq!(results[2], ValidationResult::INVALID);
        assert_eq!(results[3].brand(), Some(CardBrand::Amex));
    }

    #[test]
    fn test_count_valid() {
        let cards = [VALID_VISA, INVALID, VALID_MC, "bad"];
        let (valid, invalid) = count_valid(&cards);
        assert_eq!(valid, 2);
        assert_eq!(invalid, 2);
    }

    #[test]
    fn test_summarize() {
        let cards = [VALID_VISA, BAD_CHECKSUM_VISA, VALID_MC, INVALID, "bad", ""];
        let summary = summarize(&cards);

        assert_eq!(summary.total(), 6);
        assert_eq!(summary.valid(), 2);
        assert_eq!(summary.invalid(), 4);
        assert_eq!(summary.unrecognized(), 3);
        assert_eq!(summary.count_for(CardBrand::Visa), 2);
        assert_eq!(summary.count_for(CardBrand::Mastercard), 1);
        assert_eq!(summary.count_for(CardBrand::Diners), 0);
    }

    #[test]
    fn test_summary_merge() {
        let left = summarize(&[VALID_VISA, INVALID]);
        let right = summarize(&[VALID_AMEX]);
        let merged = left.merge(&right);

        assert_eq!(merged, summarize(&[VALID_VISA, INVALID, VALID_AMEX]));
    }

    #[test]
    fn test_empty_batch() {
        let cards: Vec<&str> = vec![];
        assert!(validate_batch(&cards).is_empty());
        assert_eq!(count_valid(&cards), (0, 0));
        assert_eq!(summarize(&cards), BatchSummary::new());
    }

    #[test]
    fn test_with_owned_strings() {
        let cards: Vec<String> = vec![VALID_VISA.to_string(), INVALID.to_string()];
        assert_eq!(count_valid(&cards), (1, 1));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_validation() {
        let cards: Vec<String> = (0..1000).map(|_| VALID_VISA.to_string()).collect();

        let results = validate_batch_parallel(&cards);
        assert_eq!(results.len(), 1000);
        assert!(results.iter().all(|r| r.is_valid()));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let cards = [VALID_VISA, BAD_CHECKSUM_VISA, VALID_MC, INVALID, "bad"];
        assert_eq!(count_valid_parallel(&cards), count_valid(&cards));
        assert_eq!(summarize_parallel(&cards), summarize(&cards));
    }
}
