//! ocr2txt - Group detector output into lines and paragraphs
//!
//! A command line tool that reads text-detector output (JSON), runs the
//! grouping pipeline and writes the grouped text as plain text or JSON.
//! With `--click X,Y` it instead resolves the point to the group under
//! it and prints that group's copy text.

mod records;

use clap::{ArgAction, Parser, ValueEnum};
use records::{GroupRecord, load_detections};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use textgrab_core::error::{GrabError, Result};
use textgrab_core::high_level::{GroupOptions, group_detections};
use textgrab_core::layout::{GroupingParams, hit_test};
use textgrab_core::utils::Point;

/// Output type for the grouped content.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Plain text output, one group per line (default)
    #[default]
    Text,
    /// JSON output with group boxes
    Json,
}

/// A command line tool for grouping detected text regions into lines and
/// paragraphs, and resolving click points to copyable text.
#[derive(Parser, Debug)]
#[command(name = "ocr2txt")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more paths to detector-output JSON files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    // === Grouping options ===
    /// Maximum horizontal gap between fragments on one line (pixels)
    #[arg(short = 'x', long = "x-threshold", default_value = "50")]
    x_threshold: f64,

    /// Maximum top-edge offset between fragments on one line (pixels)
    #[arg(short = 'y', long = "y-threshold", default_value = "90")]
    y_threshold: f64,

    /// Maximum height difference between fragments on one line (pixels)
    #[arg(short = 'f', long = "font-threshold", default_value = "10")]
    font_threshold: f64,

    /// Maximum gap between a paragraph and its next line (pixels)
    #[arg(long = "para-y-threshold", default_value = "5")]
    para_y_threshold: f64,

    /// Maximum left-edge offset between a paragraph and a line (pixels)
    #[arg(long = "para-x-threshold", default_value = "47")]
    para_x_threshold: f64,

    /// Stop after line grouping; do not merge lines into paragraphs
    #[arg(short = 'n', long = "no-paragraphs", action = ArgAction::SetTrue)]
    no_paragraphs: bool,

    // === Hit testing ===
    /// Resolve this point (e.g. "120,48") against the final groups and
    /// print the matched group's copy text instead of all groups
    #[arg(short = 'c', long = "click")]
    click: Option<String>,

    // === Output options ===
    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Type of output to generate
    #[arg(short = 't', long = "output_type", value_enum, default_value = "text")]
    output_type: OutputType,
}

/// Parse a click point given as "X,Y".
fn parse_click(s: &str) -> std::result::Result<Point, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(format!("expected X,Y got {:?}", s));
    }
    let x = parts[0]
        .parse::<f64>()
        .map_err(|_| format!("invalid x coordinate: {}", parts[0]))?;
    let y = parts[1]
        .parse::<f64>()
        .map_err(|_| format!("invalid y coordinate: {}", parts[1]))?;
    Ok((x, y))
}

/// Infer output type from file extension.
fn infer_output_type(path: &str) -> Option<OutputType> {
    if path.to_lowercase().ends_with(".json") {
        Some(OutputType::Json)
    } else {
        None
    }
}

/// Build grouping options from command line arguments.
fn build_options(args: &Args) -> Result<GroupOptions> {
    let params = GroupingParams {
        x_threshold: args.x_threshold,
        y_threshold: args.y_threshold,
        font_threshold: args.font_threshold,
        para_y_threshold: args.para_y_threshold,
        para_x_threshold: args.para_x_threshold,
    };
    params.validate()?;
    Ok(GroupOptions {
        params,
        paragraphs: !args.no_paragraphs,
    })
}

fn process_file(
    path: &Path,
    output: &mut dyn Write,
    options: &GroupOptions,
    click: Option<Point>,
    output_type: OutputType,
) -> Result<()> {
    let detections = load_detections(path)?;
    tracing::debug!(file = %path.display(), detections = detections.len(), "loaded");

    let groups = group_detections(detections, options);

    if let Some(pt) = click {
        match hit_test(&groups, pt) {
            Some(group) => writeln!(output, "{}", group.copy_text())?,
            None => eprintln!("no text at ({}, {})", pt.0, pt.1),
        }
        return Ok(());
    }

    match output_type {
        OutputType::Text => {
            for group in &groups {
                writeln!(output, "{}", group.text())?;
            }
        }
        OutputType::Json => {
            let records: Vec<GroupRecord> = groups.iter().map(GroupRecord::from).collect();
            serde_json::to_writer_pretty(&mut *output, &records)
                .map_err(|e| GrabError::MalformedInput(e.to_string()))?;
            writeln!(output)?;
        }
    }

    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let options = match build_options(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let click = match args.click.as_deref().map(parse_click).transpose() {
        Ok(click) => click,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Determine output type (may be inferred from output filename)
    let output_type = if matches!(args.output_type, OutputType::Text) && args.outfile != "-" {
        infer_output_type(&args.outfile).unwrap_or(args.output_type)
    } else {
        args.output_type
    };

    // Open output file or use stdout
    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = fs::File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    // Process each input file
    for path in &args.files {
        if !path.exists() {
            eprintln!("Error: File not found: {}", path.display());
            std::process::exit(1);
        }

        if let Err(e) = process_file(path, &mut output, &options, click, output_type) {
            eprintln!("Error processing {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    // Ensure output is flushed
    output.flush()?;

    Ok(())
}
