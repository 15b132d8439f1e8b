//! # OCR Module
//!
//! Turns a screenshot into plain text.
//!
//! Recognition itself is delegated to Tesseract; this module only decodes the
//! image up front (so broken files fail with a clear message) and maps engine
//! failures onto [`OcrError`](crate::error::OcrError).
//!
//! ## Engines
//! - [`TesseractEngine`] - drives the `tesseract` binary through `rusty-tesseract`
//!
//! Other engines (or test doubles) implement [`OcrEngine`].

mod tesseract;
mod traits;

pub use tesseract::{TesseractConfig, TesseractEngine};
pub use traits::{decode_image, OcrEngine};
