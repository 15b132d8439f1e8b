//! # CLI Module
//!
//! Command-line interface for the phone number extractor.
//!
//! ## Usage
//! ```bash
//! # Read ./capturas_numeros_grupos, write ./numeros_extraidos.txt
//! phone-extract
//!
//! # Custom folders and Spanish + English OCR
//! phone-extract extract ~/Screenshots -o numbers.txt --lang spa+eng
//!
//! # Skip unreadable screenshots instead of stopping
//! phone-extract extract ~/Screenshots --keep-going
//!
//! # JSON summary for scripting
//! phone-extract extract ~/Screenshots --format json
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use phone_number_extractor::core::ocr::{TesseractConfig, TesseractEngine};
use phone_number_extractor::core::pipeline::{
    Pipeline, PipelineResult, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_FILE,
};
use phone_number_extractor::error::Result;
use phone_number_extractor::events::{Event, EventChannel, OcrEvent, PipelineEvent, ScanEvent};
use std::path::PathBuf;
use std::thread;

/// Phone Number Extractor - Collect phone numbers from screenshots
///
/// Without a subcommand, runs `extract` with the given options.
#[derive(Parser, Debug)]
#[command(name = "phone-extract")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    extract: ExtractArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract phone numbers from the screenshots in a folder
    Extract(ExtractArgs),
}

#[derive(Args, Debug)]
struct ExtractArgs {
    /// Folder holding the screenshots
    #[arg(default_value = DEFAULT_INPUT_DIR)]
    input: PathBuf,

    /// File receiving the sorted numbers
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Also read images in subfolders
    #[arg(short, long)]
    recursive: bool,

    /// Follow symbolic links
    #[arg(long)]
    follow_symlinks: bool,

    /// Include hidden files
    #[arg(long)]
    include_hidden: bool,

    /// Image extensions to read (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Custom phone number regex
    #[arg(short, long)]
    pattern: Option<String>,

    /// Tesseract language(s), e.g. eng or spa+eng
    #[arg(long, default_value = "eng")]
    lang: String,

    /// Tesseract page segmentation mode
    #[arg(long)]
    psm: Option<i32>,

    /// Resolution hint for Tesseract
    #[arg(long)]
    dpi: Option<i32>,

    /// Skip unreadable images instead of stopping
    #[arg(long)]
    keep_going: bool,

    /// Summary format
    #[arg(short, long, default_value = "pretty")]
    format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Progress bar and colored summary
    Pretty,
    /// JSON summary for scripting
    Json,
    /// The numbers only, one per line
    Minimal,
}

impl Cli {
    fn into_extract_args(self) -> ExtractArgs {
        match self.command {
            Some(Commands::Extract(args)) => args,
            None => self.extract,
        }
    }
}

/// Run the CLI
pub fn run() -> Result<()> {
    run_extract(Cli::parse().into_extract_args())
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    let default_directive = match (args.verbose, args.format) {
        (true, _) => "debug",
        (false, OutputFormat::Pretty) => "warn",
        (false, _) => "info",
    };
    phone_number_extractor::init_tracing(default_directive);

    let term = Term::stderr();

    if matches!(args.format, OutputFormat::Pretty) {
        term.write_line(&format!(
            "{} {}",
            style("Phone Number Extractor").bold().cyan(),
            style(concat!("v", env!("CARGO_PKG_VERSION"))).dim()
        ))
        .ok();
        term.write_line("").ok();
    }

    TesseractEngine::check_available()?;

    let tesseract = TesseractConfig {
        lang: args.lang,
        psm: args.psm,
        dpi: args.dpi,
    };

    let mut builder = Pipeline::builder()
        .input_dir(args.input)
        .output_path(args.output)
        .recursive(args.recursive)
        .follow_symlinks(args.follow_symlinks)
        .include_hidden(args.include_hidden)
        .fail_fast(!args.keep_going)
        .engine(Box::new(TesseractEngine::new(tesseract)));

    if !args.extensions.is_empty() {
        builder = builder.extensions(args.extensions);
    }
    if let Some(pattern) = args.pattern {
        builder = builder.pattern(pattern);
    }

    let pipeline = builder.build()?;

    let (sender, receiver) = EventChannel::new();

    let progress = if matches!(args.format, OutputFormat::Pretty) {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
        Some(pb)
    } else {
        None
    };

    let event_thread = thread::spawn(move || {
        let Some(pb) = progress else {
            return;
        };

        for event in receiver.iter() {
            match event {
                Event::Pipeline(PipelineEvent::PhaseChanged { phase }) => {
                    pb.set_message(phase.to_string());
                }
                Event::Scan(ScanEvent::Completed { total_images }) => {
                    pb.set_length(total_images as u64);
                }
                Event::Ocr(OcrEvent::Progress(p)) => {
                    pb.set_position(p.completed as u64);
                    pb.set_message(format!(
                        "{} ({} numbers)",
                        p.current_path
                            .file_name()
                            .unwrap_or_default()
                            .to_string_lossy(),
                        p.unique_numbers
                    ));
                }
                Event::Ocr(OcrEvent::Error { path, message }) => {
                    pb.inc(1);
                    pb.println(format!(
                        "{} {}: {}",
                        style("!").yellow().bold(),
                        path.display(),
                        message
                    ));
                }
                Event::Pipeline(PipelineEvent::Completed { .. })
                | Event::Pipeline(PipelineEvent::Error { .. }) => {
                    pb.finish_and_clear();
                }
                _ => {}
            }
        }
    });

    let result = pipeline.run_with_events(&sender);

    drop(sender);
    event_thread.join().ok();

    let result = result?;

    match args.format {
        OutputFormat::Pretty => print_pretty_results(&term, &result, args.verbose),
        OutputFormat::Json => print_json_results(&result),
        OutputFormat::Minimal => print_minimal_results(&result),
    }

    Ok(())
}

fn print_pretty_results(term: &Term, result: &PipelineResult, verbose: bool) {
    term.write_line(&format!("{} Extraction Complete", style("✓").green().bold()))
        .ok();
    term.write_line("").ok();

    term.write_line(&format!(
        "  {} images read in {:.1}s",
        style(result.images_processed).cyan(),
        result.duration_ms as f64 / 1000.0
    ))
    .ok();

    if result.images_failed > 0 {
        term.write_line(&format!(
            "  {} images skipped",
            style(result.images_failed).yellow()
        ))
        .ok();
    }

    term.write_line(&format!(
        "  {} unique phone numbers",
        style(result.numbers.len()).cyan()
    ))
    .ok();

    term.write_line(&format!(
        "  saved to {}",
        style(result.output_path.display()).bold()
    ))
    .ok();

    if verbose {
        term.write_line("").ok();
        for number in result.numbers.iter() {
            term.write_line(&format!("    {}", number)).ok();
        }
    }

    if verbose && !result.errors.is_empty() {
        term.write_line("").ok();
        term.write_line(&format!("{}", style("Warnings:").bold().underlined()))
            .ok();
        for error in &result.errors {
            term.write_line(&format!("  {} {}", style("!").yellow(), error))
                .ok();
        }
    }
}

fn print_json_results(result: &PipelineResult) {
    let output = serde_json::json!({
        "total_images": result.total_images,
        "images_processed": result.images_processed,
        "images_failed": result.images_failed,
        "unique_numbers": result.numbers.len(),
        "numbers": result.numbers,
        "output_path": result.output_path,
        "errors": result.errors,
        "duration_ms": result.duration_ms,
    });

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!("failed to serialize summary: {}", e),
    }
}

fn print_minimal_results(result: &PipelineResult) {
    for number in result.numbers.iter() {
        println!("{}", number);
    }
}
