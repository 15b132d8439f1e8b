//! # Extractor Module
//!
//! Finds phone numbers in recognized text and collects them.
//!
//! ## Components
//! - [`PhoneExtractor`] - regex matcher for international numbers
//! - [`PhoneNumberSet`] - deduplicating, sorted accumulator
//!
//! ## Example
//! ```rust,ignore
//! let extractor = PhoneExtractor::new();
//! let mut numbers = PhoneNumberSet::new();
//! numbers.extend(extractor.find_all("Call +54 9 376 411 0177"));
//! ```

mod pattern;
mod set;

pub use pattern::{PhoneExtractor, DEFAULT_PHONE_PATTERN};
pub use set::PhoneNumberSet;
