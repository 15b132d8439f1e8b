//! # Core Module
//!
//! The UI-agnostic extraction engine.
//!
//! ## Modules
//! - `scanner` - Finds screenshots in a folder
//! - `ocr` - Decodes images and recognizes their text
//! - `extractor` - Matches and deduplicates phone numbers
//! - `output` - Writes the sorted number list
//! - `pipeline` - Orchestrates the full workflow

pub mod extractor;
pub mod ocr;
pub mod output;
pub mod pipeline;
pub mod scanner;

// Re-export commonly used types
pub use extractor::{PhoneExtractor, PhoneNumberSet};
pub use ocr::{OcrEngine, TesseractConfig, TesseractEngine};
pub use pipeline::{Pipeline, PipelineResult};
pub use scanner::ImageFile;
