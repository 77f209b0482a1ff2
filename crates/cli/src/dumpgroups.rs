//! dumpgroups - Dump every grouping stage for inspection
//!
//! A command line debug tool that runs the pipeline over detector output
//! and emits all three stages (raw detections, line groups, paragraph
//! groups) as JSON, for tuning thresholds against a real image.

mod records;

use clap::{ArgAction, Parser};
use records::{DetectionRecord, GroupRecord, load_detections};
use serde::Serialize;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use textgrab_core::error::{GrabError, Result};
use textgrab_core::layout::{GroupingParams, group_lines, group_paragraphs};
use textgrab_core::utils::bbox2str;

/// All pipeline stages for one input file.
#[derive(Debug, Serialize)]
struct StageDump {
    detections: Vec<DetectionRecord>,
    lines: Vec<GroupRecord>,
    paragraphs: Vec<GroupRecord>,
}

/// A command line tool for dumping the grouping stages as JSON.
#[derive(Parser, Debug)]
#[command(name = "dumpgroups")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a detector-output JSON file
    file: PathBuf,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

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

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,
}

fn dump_stages(path: &Path, output: &mut dyn Write, params: &GroupingParams) -> Result<()> {
    let detections = load_detections(path)?;

    let lines = group_lines(detections.clone(), params);
    let paragraphs = group_paragraphs(lines.clone(), params);

    for paragraph in &paragraphs {
        tracing::debug!(bbox = %bbox2str(paragraph.quad().bounds()), "paragraph");
    }

    let dump = StageDump {
        detections: detections.iter().map(DetectionRecord::from).collect(),
        lines: lines.iter().map(GroupRecord::from).collect(),
        paragraphs: paragraphs.iter().map(GroupRecord::from).collect(),
    };

    serde_json::to_writer_pretty(&mut *output, &dump)
        .map_err(|e| GrabError::MalformedInput(e.to_string()))?;
    writeln!(output)?;
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

    let params = GroupingParams {
        x_threshold: args.x_threshold,
        y_threshold: args.y_threshold,
        font_threshold: args.font_threshold,
        para_y_threshold: args.para_y_threshold,
        para_x_threshold: args.para_x_threshold,
    };
    if let Err(e) = params.validate() {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if !args.file.exists() {
        eprintln!("Error: File not found: {}", args.file.display());
        std::process::exit(1);
    }

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = fs::File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    if let Err(e) = dump_stages(&args.file, &mut output, &params) {
        eprintln!("Error processing {}: {}", args.file.display(), e);
        std::process::exit(1);
    }

    output.flush()?;

    Ok(())
}
