//! # card_brand
//!
//! Offline payment card number validation: Luhn checksum and brand
//! detection, with no network calls and no persistence.
//!
//! ## Quick Start
//!
//! ```rust
//! use card_brand::{validate, CardBrand};
//!
//! let result = validate("4111 1111 1111 1111");
//! assert!(result.is_valid());
//! assert_eq!(result.brand(), Some(CardBrand::Visa));
//!
//! // A recognized brand with a bad checksum keeps its brand
//! let result = validate("4111111111111112");
//! assert!(!result.is_valid());
//! assert_eq!(result.brand(), Some(CardBrand::Visa));
//!
//! // Anything else has no brand
//! assert_eq!(validate("invalid").brand(), None);
//! ```
//!
//! ## Why a Number Was Rejected
//!
//! ```rust
//! use card_brand::{check, CardBrand, ValidationError};
//!
//! assert_eq!(check("378282246310005"), Ok(CardBrand::Amex));
//! assert_eq!(check("1234567890123456"), Err(ValidationError::UnknownBrand));
//! assert!(matches!(
//!     check("4111-1111-1111-111X"),
//!     Err(ValidationError::InvalidCharacter { character: 'X', .. })
//! ));
//! ```
//!
//! ## Batch Processing
//!
//! ```rust
//! use card_brand::batch;
//!
//! let cards = vec!["4111111111111111", "5500000000000004", "invalid"];
//! let (valid_count, invalid_count) = batch::count_valid(&cards);
//! assert_eq!((valid_count, invalid_count), (2, 1));
//! ```
//!
//! ## Supported Card Brands
//!
//! Rules are evaluated top to bottom; the first match wins.
//!
//! | Brand | Prefix | Length |
//! |-------|--------|--------|
//! | Visa | 4 | 13, 16, 19 |
//! | Mastercard | 51-55 | 16 |
//! | American Express | 34, 37 | 15 |
//! | Elo | 4011, 5066, 4576, 4916 | 16 |
//! | Diners Club | 30, 36, 38 | 14 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for results and brands |
//! | `parallel` | Rayon-based batch validation |
//! | `generate` | Random test card generation |
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events at `trace` and `debug` level. Events
//! carry the brand and digit count, never the card number.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod brand;
pub mod detect;
pub mod digits;
pub mod error;
pub mod generate;
pub mod luhn;
pub mod stream;
pub mod validate;

// Re-export main types at crate root
pub use brand::{BrandRule, CardBrand, Prefix, BRAND_RULES};
pub use detect::classify;
pub use error::{ParseBrandError, ValidationError};
pub use luhn::luhn_check;
pub use validate::{check, is_valid, passes_luhn, validate, ValidationResult};
