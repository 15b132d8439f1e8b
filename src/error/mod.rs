//! # Error Module
//!
//! Error types for the phone number extractor.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - paths, file names, what went wrong
//! - **Recovery hints** - suggest how to fix when possible

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("Scanning error: {0}")]
    Scan(#[from] ScanError),

    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors that occur while looking for images
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Permission denied accessing: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while decoding an image or running OCR on it
#[derive(Error, Debug)]
pub enum OcrError {
    #[error("Failed to decode image {path}: {reason}")]
    DecodeFailed { path: PathBuf, reason: String },

    #[error("Text recognition failed for {path}: {reason}")]
    EngineFailed { path: PathBuf, reason: String },

    #[error("Tesseract is not available: {reason}. Install tesseract-ocr and make sure it is on PATH.")]
    EngineUnavailable { reason: String },
}

/// Errors caused by the phone number pattern
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid pattern `{pattern}`: {reason}")]
    Invalid { pattern: String, reason: String },
}

/// Errors that occur while writing the result file
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, ExtractorError>;
