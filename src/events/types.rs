//! Event type definitions for progress reporting.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All events emitted by the extraction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Scanning phase events
    Scan(ScanEvent),
    /// OCR phase events
    Ocr(OcrEvent),
    /// Pipeline-level events
    Pipeline(PipelineEvent),
}

/// Events during the scanning phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScanEvent {
    /// Scanning has started
    Started { root: PathBuf },
    /// An image was found
    ImageFound { path: PathBuf },
    /// An error occurred but scanning continues
    Error { path: PathBuf, message: String },
    /// Scanning completed
    Completed { total_images: usize },
}

/// Events during the OCR phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OcrEvent {
    /// OCR has started
    Started { total_images: usize },
    /// An image was read
    Progress(OcrProgress),
    /// An image could not be read, processing continues
    Error { path: PathBuf, message: String },
    /// OCR completed
    Completed {
        images_processed: usize,
        images_failed: usize,
    },
}

/// Progress information during OCR
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrProgress {
    /// Number of images handled so far
    pub completed: usize,
    /// Total number of images
    pub total: usize,
    /// Image just handled
    pub current_path: PathBuf,
    /// Phone numbers matched in this image (before deduplication)
    pub matches: usize,
    /// Distinct phone numbers collected so far
    pub unique_numbers: usize,
}

/// Pipeline-level events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PipelineEvent {
    /// Pipeline has started
    Started,
    /// Moving to a new phase
    PhaseChanged { phase: PipelinePhase },
    /// Pipeline completed successfully
    Completed { summary: PipelineSummary },
    /// Pipeline encountered a fatal error
    Error { message: String },
}

/// Phases of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelinePhase {
    Scanning,
    Recognizing,
    Writing,
}

/// Summary of pipeline results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    /// Images found in the input folder
    pub total_images: usize,
    /// Images that failed to decode or recognize
    pub images_failed: usize,
    /// Distinct phone numbers written
    pub unique_numbers: usize,
    /// Where the numbers were written
    pub output_path: PathBuf,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl std::fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelinePhase::Scanning => write!(f, "Scanning"),
            PipelinePhase::Recognizing => write!(f, "Recognizing text"),
            PipelinePhase::Writing => write!(f, "Writing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_serializable() {
        let event = Event::Ocr(OcrEvent::Progress(OcrProgress {
            completed: 3,
            total: 10,
            current_path: PathBuf::from("/shots/group.png"),
            matches: 4,
            unique_numbers: 7,
        }));

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();

        match deserialized {
            Event::Ocr(OcrEvent::Progress(p)) => {
                assert_eq!(p.unique_numbers, 7);
                assert_eq!(p.matches, 4);
            }
            _ => panic!("Wrong event type"),
        }
    }

    #[test]
    fn phase_display_is_human_readable() {
        assert_eq!(PipelinePhase::Recognizing.to_string(), "Recognizing text");
    }

    #[test]
    fn pipeline_summary_is_serializable() {
        let summary = PipelineSummary {
            total_images: 12,
            images_failed: 1,
            unique_numbers: 42,
            output_path: PathBuf::from("numeros_extraidos.txt"),
            duration_ms: 5000,
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("numeros_extraidos.txt"));
        assert!(json.contains("42"));
    }
}
