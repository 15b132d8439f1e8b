//! Tesseract-backed OCR engine.

use super::traits::{decode_image, OcrEngine};
use crate::error::OcrError;
use rusty_tesseract::{Args, Image};
use std::collections::HashMap;
use std::path::Path;

/// Options passed to Tesseract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TesseractConfig {
    /// Language pack(s), e.g. `eng` or `spa+eng`
    pub lang: String,
    /// Page segmentation mode (None = Tesseract default)
    pub psm: Option<i32>,
    /// Resolution hint in DPI (None = Tesseract default)
    pub dpi: Option<i32>,
}

impl Default for TesseractConfig {
    fn default() -> Self {
        Self {
            lang: "eng".to_string(),
            psm: None,
            dpi: None,
        }
    }
}

impl TesseractConfig {
    fn to_args(&self) -> Args {
        Args {
            lang: self.lang.clone(),
            config_variables: HashMap::new(),
            dpi: self.dpi,
            psm: self.psm,
            oem: None,
        }
    }
}

/// OCR engine running the locally installed `tesseract` binary
pub struct TesseractEngine {
    config: TesseractConfig,
}

impl TesseractEngine {
    pub fn new(config: TesseractConfig) -> Self {
        Self { config }
    }

    /// Check that the tesseract binary can be invoked
    pub fn check_available() -> Result<String, OcrError> {
        let version = rusty_tesseract::get_tesseract_version().map_err(|e| {
            OcrError::EngineUnavailable {
                reason: e.to_string(),
            }
        })?;
        tracing::debug!("using {}", version.lines().next().unwrap_or_default());
        Ok(version)
    }
}

impl TesseractEngine {
    /// Decode the screenshot and wrap it for Tesseract
    fn load_input(path: &Path) -> Result<Image, OcrError> {
        let decoded = decode_image(path)?;
        tracing::debug!(
            path = %path.display(),
            "decoded {}x{} image",
            decoded.width(),
            decoded.height()
        );

        Image::from_dynamic_image(&decoded).map_err(|e| OcrError::EngineFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new(TesseractConfig::default())
    }
}

impl OcrEngine for TesseractEngine {
    fn extract_text(&self, path: &Path) -> Result<String, OcrError> {
        let input = Self::load_input(path)?;
        let text = rusty_tesseract::image_to_string(&input, &self.config.to_args()).map_err(
            |e| OcrError::EngineFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        )?;

        tracing::debug!(
            path = %path.display(),
            "recognized {} characters",
            text.chars().count()
        );
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "tesseract"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::fs;
    use tempfile::TempDir;

    fn save_white(path: &Path, format: ImageFormat) {
        RgbImage::from_pixel(6, 4, Rgb([255, 255, 255]))
            .save_with_format(path, format)
            .unwrap();
    }

    #[test]
    fn default_config_reads_english() {
        let config = TesseractConfig::default();
        let args = config.to_args();

        assert_eq!(args.lang, "eng");
        assert!(args.psm.is_none());
        assert!(args.config_variables.is_empty());
    }

    #[test]
    fn config_options_reach_tesseract_args() {
        let config = TesseractConfig {
            lang: "spa+eng".to_string(),
            psm: Some(6),
            dpi: Some(300),
        };
        let args = config.to_args();

        assert_eq!(args.lang, "spa+eng");
        assert_eq!(args.psm, Some(6));
        assert_eq!(args.dpi, Some(300));
    }

    #[test]
    fn undecodable_image_fails_before_running_tesseract() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corrupt.jpg");
        fs::write(&path, b"not a jpeg").unwrap();

        let err = TesseractEngine::default().extract_text(&path).unwrap_err();

        assert!(matches!(err, OcrError::DecodeFailed { .. }));
    }

    #[test]
    fn tiff_screenshots_are_handed_over_decoded() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scan.tif");
        save_white(&path, ImageFormat::Tiff);

        assert!(TesseractEngine::load_input(&path).is_ok());
    }

    #[test]
    fn extension_does_not_decide_the_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("capture.screenshot");
        save_white(&path, ImageFormat::Png);

        assert!(TesseractEngine::load_input(&path).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_file_names_are_accepted() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir
            .path()
            .join(OsStr::from_bytes(b"grupo_\xff\xfe.png"));
        save_white(&path, ImageFormat::Png);

        assert!(TesseractEngine::load_input(&path).is_ok());
    }
}
