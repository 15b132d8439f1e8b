//! # Pipeline Module
//!
//! Orchestrates the full extraction workflow.
//!
//! ## Pipeline Stages
//! 1. **Scan** - List the screenshots in the input folder
//! 2. **Recognize** - Run OCR on each image and match phone numbers
//! 3. **Write** - Store the distinct numbers, sorted, one per line
//!
//! Images are processed sequentially, one at a time.

mod executor;

pub use executor::{
    Pipeline, PipelineBuilder, PipelineConfig, PipelineResult, DEFAULT_INPUT_DIR,
    DEFAULT_OUTPUT_FILE,
};
