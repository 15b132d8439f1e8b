//! # Phone Number Extractor
//!
//! Reads WhatsApp-style group screenshots, recognizes their text and collects
//! every international phone number into a sorted, deduplicated list.
//!
//! ## Architecture
//! - `core` - Scanning, OCR, matching and output
//! - `events` - Event-driven progress reporting
//! - `error` - Error types
//!
//! OCR and image decoding are delegated to Tesseract and the `image` crate.

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{ExtractorError, Result};

/// Initialize tracing for the library
///
/// `default_directive` applies when `RUST_LOG` is not set.
/// This should be called by the application entry point.
pub fn init_tracing(default_directive: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
