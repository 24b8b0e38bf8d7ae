#![forbid(unsafe_code)]
//! # Sentiment Analysis CLI
//!
//! Command-line interface for the `sentiment_analysis` crate: analyze the
//! sentiment and emotional content of text strings or `.txt`/`.pdf`/
//! `.docx`/`.odt` documents without writing Rust code.
//!
//! ## Features
//! - Analyze each file individually or all files combined.
//! - Export the result tables in multiple formats.
//! - Analyze an ad-hoc string with `--text`.
//! - Session summary across all analyzed documents.
//!
//! ## Example
//! ```bash
//! cargo run --release -- path/to/docs --export-format csv
//! ```
//!
//! See `--help` for all available options.

use clap::Parser;
use log::error;
use sentiment_analysis::{
    AnalysisOptions, AnalysisSession, ExportFormat, analyze_path, analyze_text,
    print_failed_files,
};
use std::path::Path;
use std::process;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// File or directory to analyze (txt, pdf, docx, odt)
    #[arg(required_unless_present = "text")]
    path: Option<String>,

    /// Analyze this text string instead of files
    #[arg(long, conflicts_with = "path")]
    text: Option<String>,

    /// Output format for exported result tables (txt, csv, tsv, json)
    #[arg(long, default_value = "txt")]
    export_format: ExportFormat,

    /// Analyze all files together as one combined document
    #[arg(long, default_value_t = false)]
    combine: bool,

    /// Skip files reliably detected as non-English
    #[arg(long, default_value_t = false)]
    english_only: bool,

    /// Print the summary only, without writing result files
    #[arg(long, default_value_t = false)]
    no_export: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let opts = AnalysisOptions {
        export_format: cli.export_format,
        combine: cli.combine,
        english_only: cli.english_only,
        export: !cli.no_export,
    };
    let mut session = AnalysisSession::new();

    if let Some(text) = cli.text.as_deref() {
        let report = analyze_text(text, &opts, &mut session);
        print!("{}", report.summary);
        if !report.failed_files.is_empty() {
            print_failed_files(&report.failed_files);
            process::exit(1);
        }
        return;
    }

    // clap guarantees path is present when --text is absent
    let path = cli.path.expect("path argument");
    let mut any_errors = false;
    match analyze_path(Path::new(&path), &opts, &mut session) {
        Ok(report) => {
            print!("{}", report.summary);
            if !report.failed_files.is_empty() {
                print_failed_files(&report.failed_files);
                any_errors = true;
            }
        }
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    }

    if session.len() > 1 {
        let dist = session.overall_distribution();
        println!(
            "Session: {} documents | positive {}, negative {}, neutral {}",
            session.len(),
            dist.positive,
            dist.negative,
            dist.neutral
        );
    }

    if any_errors {
        process::exit(1);
    }
}
