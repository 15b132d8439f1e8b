//! # Scanner Module
//!
//! Finds the screenshots to read in an input folder.
//!
//! ## Supported Formats
//! - PNG (.png)
//! - JPEG (.jpg, .jpeg)
//!
//! ## Example
//! ```rust,ignore
//! use phone_number_extractor::core::scanner::{ImageScanner, ScanConfig, WalkDirScanner};
//!
//! let scanner = WalkDirScanner::new(ScanConfig::default());
//! let images = scanner.scan("capturas_numeros_grupos".as_ref())?;
//! ```

mod filter;
mod walker;

pub use filter::ImageFilter;
pub use walker::{ScanConfig, WalkDirScanner};

use crate::error::ScanError;
use crate::events::EventSender;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A discovered image file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageFile {
    /// Path to the image
    pub path: PathBuf,
    /// Format detected from the extension
    pub format: ImageFormat,
}

/// Image formats the extractor reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Unknown,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "png" => ImageFormat::Png,
            "jpg" | "jpeg" => ImageFormat::Jpeg,
            _ => ImageFormat::Unknown,
        }
    }
}

/// Result of a scan
#[derive(Debug)]
pub struct ScanResult {
    /// Images found, sorted by path
    pub images: Vec<ImageFile>,
    /// Entries that could not be read (non-fatal)
    pub errors: Vec<ScanError>,
}

/// Trait for image scanners
pub trait ImageScanner: Send + Sync {
    /// Scan a folder and return the images in it
    fn scan(&self, root: &Path) -> Result<ScanResult, ScanError>;

    /// Scan with progress reporting via events
    fn scan_with_events(&self, root: &Path, events: &EventSender)
        -> Result<ScanResult, ScanError>;
}
