//! Trait definitions for text recognition.

use crate::error::OcrError;
use image::DynamicImage;
use std::path::Path;

/// Extracts the visible text of an image
///
/// Implement this trait to plug in another OCR backend, or a stub for tests.
pub trait OcrEngine: Send + Sync {
    /// Read all text in the image at `path`
    fn extract_text(&self, path: &Path) -> Result<String, OcrError>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Decode an image from disk, sniffing the format from its content
pub fn decode_image(path: &Path) -> Result<DynamicImage, OcrError> {
    image::ImageReader::open(path)
        .map_err(|e| OcrError::DecodeFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
        .with_guessed_format()
        .map_err(|e| OcrError::DecodeFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
        .decode()
        .map_err(|e| OcrError::DecodeFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}
