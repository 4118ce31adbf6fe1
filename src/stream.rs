//! Streaming validation for processing cards as they arrive.
//!
//! This module provides iterator adapters for validating card numbers
//! lazily, useful for cleansing large files without loading everything
//! into memory.
//!
//! # Example
//!
//! ```
//! use card_brand::stream::ValidateExt;
//!
//! let cards = vec!["4111111111111111", "5500000000000004", "invalid"];
//! let valid_count = cards.iter()
//!     .copied()
//!     .validate_cards()
//!     .filter(|r| r.is_valid())
//!     .count();
//!
//! assert_eq!(valid_count, 2);
//! ```

use crate::validate::{check, validate};
use crate::{CardBrand, ValidationResult};

/// A streaming validator that wraps an iterator of card number strings.
///
/// This struct is created by the `validate_cards` method on iterators.
#[derive(Debug, Clone)]
pub struct ValidateStream<I> {
    inner: I,
}

impl<I> ValidateStream<I> {
    /// Creates a new ValidateStream wrapping the given iterator.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Consumes the stream and returns the inner iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, S> Iterator for ValidateStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = ValidationResult;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| validate(s.as_ref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, S> ExactSizeIterator for ValidateStream<I>
where
    I: ExactSizeIterator<Item = S>,
    S: AsRef<str>,
{
}

impl<I, S> DoubleEndedIterator for ValidateStream<I>
where
    I: DoubleEndedIterator<Item = S>,
    S: AsRef<str>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|s| validate(s.as_ref()))
    }
}

/// A streaming validator that only yields valid cards, paired with their
/// brand.
///
/// Invalid cards are silently skipped.
#[derive(Debug, Clone)]
pub struct ValidOnlyStream<I> {
    inner: I,
}

impl<I> ValidOnlyStream<I> {
    /// Creates a new ValidOnlyStream wrapping the given iterator.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I, S> Iterator for ValidOnlyStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = (S, CardBrand);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(|s| match check(s.as_ref()) {
            Ok(brand) => Some((s, brand)),
            Err(_) => None,
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper) // Lower bound is 0 since all might be invalid
    }
}

/// A streaming validator that yields results with their original index.
#[derive(Debug, Clone)]
pub struct IndexedValidateStream<I> {
    inner: I,
    index: usize,
}

impl<I> IndexedValidateStream<I> {
    /// Creates a new IndexedValidateStream.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner, index: 0 }
    }
}

impl<I, S> Iterator for IndexedValidateStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = (usize, ValidationResult);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| {
            let result = validate(s.as_ref());
            let index = self.index;
            self.index += 1;
            (index, result)
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Extension trait for adding card validation to any iterator.
///
/// This trait is automatically implemented for all iterators.
pub trait ValidateExt: Iterator + Sized {
    /// Validates each card number yielded by the iterator.
    ///
    /// # Example
    ///
    /// ```
    /// use card_brand::stream::ValidateExt;
    ///
    /// let cards = ["4111111111111111", "5500000000000004"];
    /// for result in cards.iter().copied().validate_cards() {
    ///     if let Some(brand) = result.brand() {
    ///         println!("{} card, valid: {}", brand, result.is_valid());
    ///     }
    /// }
    /// ```
    fn validate_cards(self) -> ValidateStream<Self>;

    /// Validates and yields only valid cards with their brand.
    ///
    /// # Example
    ///
    /// ```
    /// use card_brand::stream::ValidateExt;
    /// use card_brand::CardBrand;
    ///
    /// let cards = ["4111111111111111", "invalid", "378282246310005"];
    /// let valid: Vec<_> = cards.iter().copied().validate_valid_only().collect();
    /// assert_eq!(valid, vec![
    ///     ("4111111111111111", CardBrand::Visa),
    ///     ("378282246310005", CardBrand::Amex),
    /// ]);
    /// ```
    fn validate_valid_only(self) -> ValidOnlyStream<Self>;

    /// Validates with index tracking.
    ///
    /// # Example
    ///
    /// ```
    /// use card_brand::stream::ValidateExt;
    ///
    /// let cards = ["4111111111111111", "invalid"];
    /// let rejected: Vec<usize> = cards.iter()
    ///     .copied()
    ///     .validate_indexed()
    ///     .filter(|(_, result)| !result.is_valid())
    ///     .map(|(idx, _)| idx)
    ///     .collect();
    /// assert_eq!(rejected, vec![1]);
    /// ```
    fn validate_indexed(self) -> IndexedValidateStream<Self>;
}

impl<I: Iterator + Sized> ValidateExt for I {
    #[inline]
    fn validate_cards(self) -> ValidateStream<Self> {
        ValidateStream::new(self)
    }

    #[inline]
    fn validate_valid_only(self) -> ValidOnlyStream<Self> {
        ValidOnlyStream::new(self)
    }

    #[inline]
    fn validate_indexed(self) -> IndexedValidateStream<Self> {
        IndexedValidateStream::new(self)
    }
}

/// Creates a validation stream from a slice of strings.
#[inline]
pub fn validate_stream<'a, S: AsRef<str> + 'a>(
    cards: &'a [S],
) -> ValidateStream<impl Iterator<Item = &'a S>> {
    ValidateStream::new(cards.iter())
}
