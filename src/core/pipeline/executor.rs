//! Pipeline execution implementation.

use crate::core::extractor::{PhoneExtractor, PhoneNumberSet};
use crate::core::ocr::{OcrEngine, TesseractEngine};
use crate::core::output::write_numbers_to_file;
use crate::core::scanner::{ImageScanner, ScanConfig, WalkDirScanner};
use crate::error::ExtractorError;
use crate::events::{
    null_sender, Event, EventSender, OcrEvent, OcrProgress, PipelineEvent, PipelinePhase,
    PipelineSummary,
};
use std::path::PathBuf;
use std::time::Instant;

/// Folder read when none is given
pub const DEFAULT_INPUT_DIR: &str = "capturas_numeros_grupos";

/// File written when none is given
pub const DEFAULT_OUTPUT_FILE: &str = "numeros_extraidos.txt";

/// Result of pipeline execution
#[derive(Debug)]
pub struct PipelineResult {
    /// Distinct numbers, sorted
    pub numbers: PhoneNumberSet,
    /// Images found in the input folder
    pub total_images: usize,
    /// Images whose text was read
    pub images_processed: usize,
    /// Images skipped because they could not be read
    pub images_failed: usize,
    /// Non-fatal errors, as messages
    pub errors: Vec<String>,
    /// Where the numbers were written
    pub output_path: PathBuf,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

/// Configuration for the pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Folder holding the screenshots
    pub input_dir: PathBuf,
    /// Text file receiving the numbers
    pub output_path: PathBuf,
    /// Scanner configuration
    pub scan_config: ScanConfig,
    /// Custom phone number regex (None = default pattern)
    pub pattern: Option<String>,
    /// Abort on the first unreadable image
    pub fail_fast: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            scan_config: ScanConfig::default(),
            pattern: None,
            fail_fast: true,
        }
    }
}

/// Builder for pipeline configuration
pub struct PipelineBuilder {
    config: PipelineConfig,
    engine: Option<Box<dyn OcrEngine>>,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
            engine: None,
        }
    }

    /// Set the folder to read
    pub fn input_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_dir = path.into();
        self
    }

    /// Set the file to write
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Descend into subfolders
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.config.scan_config.recursive = recursive;
        self
    }

    /// Follow symbolic links while scanning
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.config.scan_config.follow_symlinks = follow;
        self
    }

    /// Include hidden files
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.config.scan_config.include_hidden = include;
        self
    }

    /// Override the accepted image extensions
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.config.scan_config.extensions = Some(extensions);
        self
    }

    /// Use a custom phone number regex
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.pattern = Some(pattern.into());
        self
    }

    /// Abort on the first unreadable image (default), or skip it
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.config.fail_fast = fail_fast;
        self
    }

    /// Set the OCR engine
    pub fn engine(mut self, engine: Box<dyn OcrEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Build the pipeline, compiling the phone number pattern
    pub fn build(self) -> Result<Pipeline, ExtractorError> {
        if self.config.output_path.is_dir() {
            return Err(ExtractorError::Config(format!(
                "output path {} is a directory",
                self.config.output_path.display()
            )));
        }

        if let Some(ref extensions) = self.config.scan_config.extensions {
            if extensions.iter().all(|e| e.trim_start_matches('.').is_empty()) {
                return Err(ExtractorError::Config(
                    "at least one image extension is required".to_string(),
                ));
            }
        }

        let extractor = match self.config.pattern {
            Some(ref pattern) => PhoneExtractor::with_pattern(pattern)?,
            None => PhoneExtractor::new(),
        };

        Ok(Pipeline {
            config: self.config,
            extractor,
            engine: self
                .engine
                .unwrap_or_else(|| Box::new(TesseractEngine::default())),
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Screenshot to phone-number-list pipeline
pub struct Pipeline {
    config: PipelineConfig,
    extractor: PhoneExtractor,
    engine: Box<dyn OcrEngine>,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline without events
    pub fn run(&self) -> Result<PipelineResult, ExtractorError> {
        self.run_with_events(&null_sender())
    }

    /// Run the pipeline with event reporting
    pub fn run_with_events(
        &self,
        events: &EventSender,
    ) -> Result<PipelineResult, ExtractorError> {
        events.send(Event::Pipeline(PipelineEvent::Started));

        let result = self.execute(events);
        if let Err(ref e) = result {
            events.send(Event::Pipeline(PipelineEvent::Error {
                message: e.to_string(),
            }));
        }
        result
    }

    fn execute(&self, events: &EventSender) -> Result<PipelineResult, ExtractorError> {
        let start_time = Instant::now();
        let mut errors = Vec::new();

        // Phase 1: Scanning
        events.send(Event::Pipeline(PipelineEvent::PhaseChanged {
            phase: PipelinePhase::Scanning,
        }));

        let scanner = WalkDirScanner::new(self.config.scan_config.clone());
        let scan_result = scanner.scan_with_events(&self.config.input_dir, events)?;

        errors.extend(scan_result.errors.iter().map(|e| e.to_string()));

        let images = scan_result.images;
        let total_images = images.len();
        tracing::info!(
            "found {} images in {}, reading with {}",
            total_images,
            self.config.input_dir.display(),
            self.engine.name()
        );

        // Phase 2: Recognizing, one image at a time
        events.send(Event::Pipeline(PipelineEvent::PhaseChanged {
            phase: PipelinePhase::Recognizing,
        }));
        events.send(Event::Ocr(OcrEvent::Started { total_images }));

        let mut numbers = PhoneNumberSet::new();
        let mut images_processed = 0;
        let mut images_failed = 0;

        for (index, image) in images.iter().enumerate() {
            let file_name = image
                .path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy();
            tracing::info!("Processing file: {}", file_name);

            match self.engine.extract_text(&image.path) {
                Ok(text) => {
                    let matches = self.extractor.find_all(&text);
                    tracing::debug!(
                        path = %image.path.display(),
                        "{} phone numbers matched",
                        matches.len()
                    );
                    let match_count = matches.len();
                    numbers.extend(matches);
                    images_processed += 1;

                    events.send(Event::Ocr(OcrEvent::Progress(OcrProgress {
                        completed: index + 1,
                        total: total_images,
                        current_path: image.path.clone(),
                        matches: match_count,
                        unique_numbers: numbers.len(),
                    })));
                }
                Err(e) if self.config.fail_fast => {
                    tracing::error!("{}", e);
                    return Err(e.into());
                }
                Err(e) => {
                    tracing::warn!("skipping {}: {}", file_name, e);
                    events.send(Event::Ocr(OcrEvent::Error {
                        path: image.path.clone(),
                        message: e.to_string(),
                    }));
                    images_failed += 1;
                    errors.push(e.to_string());
                }
            }
        }

        events.send(Event::Ocr(OcrEvent::Completed {
            images_processed,
            images_failed,
        }));

        // Phase 3: Writing
        events.send(Event::Pipeline(PipelineEvent::PhaseChanged {
            phase: PipelinePhase::Writing,
        }));

        write_numbers_to_file(&self.config.output_path, &numbers)?;

        let duration_ms = start_time.elapsed().as_millis() as u64;
        tracing::info!(
            "Extraction complete. {} numbers saved to {}",
            numbers.len(),
            self.config.output_path.display()
        );

        events.send(Event::Pipeline(PipelineEvent::Completed {
            summary: PipelineSummary {
                total_images,
                images_failed,
                unique_numbers: numbers.len(),
                output_path: self.config.output_path.clone(),
                duration_ms,
            },
        }));

        Ok(PipelineResult {
            numbers,
            total_images,
            images_processed,
            images_failed,
            errors,
            output_path: self.config.output_path.clone(),
            duration_ms,
        })
    }
}
