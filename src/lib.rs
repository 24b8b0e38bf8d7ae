//! # Sentiment Analysis
//!
//! Lexicon-based sentiment and emotion analysis for plain text and
//! documents (`.txt`, `.pdf`, `.docx`, `.odt`).
//!
//! The core pipeline segments text into sentences, scores each unit with
//! a pluggable [`PolarityScorer`], classifies scores with a strict
//! zero-threshold rule, and derives every downstream statistic (summary
//! counts, timeline, heatmap buckets, top words, emotion counts) from the
//! same scored-sentence sequence.
//!
//! ```
//! use sentiment_analysis::{Sentiment, SentimentAnalyzer};
//!
//! let analyzer = SentimentAnalyzer::new();
//! let result = analyzer.analyze("I love this. I hate that.");
//! assert_eq!(result.sentences.len(), 2);
//! assert_eq!(result.sentences[0].label, Sentiment::Positive);
//! assert_eq!(result.sentences[1].label, Sentiment::Negative);
//! ```

pub mod analysis;
pub mod emotion;
pub mod export;
pub mod history;
pub mod input;
mod lexicon;
pub mod office;
pub mod phrases;
pub mod score;
pub mod tokenize;

use std::path::Path;

use log::warn;
use rayon::prelude::*;
use walkdir::WalkDir;

pub use analysis::{
    AnalysisResult, DocumentAnalysis, HeatmapCell, SentenceSentiment, Sentiment,
    SentimentAnalyzer, SentimentSummary, TimelinePoint, TopWords, WordFrequency,
};
pub use emotion::{Emotion, EmotionCounts};
pub use export::{ExportFormat, csv_safe_cell, export_document, export_stem, render_document};
pub use history::{AnalysisSession, HistoryRecord};
pub use input::{DocumentFormat, read_document};
pub use office::{docx_to_text, odt_to_text};
pub use phrases::PhraseSentiment;
pub use score::{LexiconScorer, PolarityScorer};

/// Options shared by the library drivers and the CLI.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    pub export_format: ExportFormat,
    /// Analyze all collected files as one concatenated document.
    pub combine: bool,
    /// Skip files whose text is reliably detected as non-English instead
    /// of analyzing them with the English lexicon.
    pub english_only: bool,
    /// Write result tables; turned off for summary-only runs.
    pub export: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            export_format: ExportFormat::Txt,
            combine: false,
            english_only: false,
            export: true,
        }
    }
}

/// Outcome of a driver run: the human-readable report plus any files
/// that were skipped, with the reason.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub summary: String,
    pub failed_files: Vec<(String, String)>,
}

/// Collects supported files under `path` (a file or a directory), in
/// walk order.
pub fn collect_files(path: &Path) -> Vec<String> {
    WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| DocumentFormat::from_path(entry.path()).is_some())
        .map(|entry| entry.path().to_string_lossy().into_owned())
        .collect()
}

/// Language gate: `Err` when strict and the text is reliably detected as
/// non-English; otherwise a warning is logged and the text passes.
fn check_language(name: &str, text: &str, strict: bool) -> Result<(), String> {
    if let Some(info) = whatlang::detect(text) {
        if info.lang() != whatlang::Lang::Eng {
            let message = format!(
                "Detected language {}; the valence lexicon is English-only",
                info.lang().eng_name()
            );
            if strict && info.is_reliable() {
                return Err(message);
            }
            warn!("{name}: {message}");
        }
    }
    Ok(())
}

/// Runs the full pipeline for one decoded document: analyze, export (if
/// enabled), record in the session, render the report section.
fn analyze_document(
    stem: &str,
    text: &str,
    opts: &AnalysisOptions,
    session: &mut AnalysisSession,
) -> Result<String, String> {
    let analyzer = SentimentAnalyzer::new();
    let doc = DocumentAnalysis::compute(&analyzer, text);
    if opts.export {
        export_document(stem, &doc, opts.export_format)?;
    }
    session.record(text, &doc.result);
    Ok(render_document(stem, &doc))
}

/// Analyzes a raw string through the same pipeline as file input.
///
/// Infallible in the analysis itself; an export failure is reported
/// through `failed_files` rather than an error.
pub fn analyze_text(
    text: &str,
    opts: &AnalysisOptions,
    session: &mut AnalysisSession,
) -> AnalysisReport {
    match analyze_document("input", text, opts, session) {
        Ok(summary) => AnalysisReport {
            summary,
            failed_files: Vec::new(),
        },
        Err(e) => AnalysisReport {
            summary: String::new(),
            failed_files: vec![("input".to_string(), e)],
        },
    }
}

/// Analyzes every supported file under `path`.
///
/// Per-file mode decodes files in parallel, then analyzes them in walk
/// order; decode and language-gate failures are collected into
/// `failed_files` and the run continues. Combined mode concatenates all
/// decoded texts into one document and aborts on the first failure
/// instead: a partial concatenation would silently change the document
/// being scored.
pub fn analyze_path(
    path: &Path,
    opts: &AnalysisOptions,
    session: &mut AnalysisSession,
) -> Result<AnalysisReport, String> {
    let files = collect_files(path);
    if files.is_empty() {
        return Err(format!(
            "No supported files ({}) found under {}",
            DocumentFormat::extensions().join(", "),
            path.display()
        ));
    }

    // order-preserving parallel decode; the analysis core itself stays
    // single-threaded per document
    let decoded: Vec<(String, Result<String, String>)> = files
        .par_iter()
        .map(|file| (file.clone(), read_document(Path::new(file))))
        .collect();

    if opts.combine {
        let mut texts = Vec::with_capacity(decoded.len());
        for (file, result) in &decoded {
            match result {
                Ok(text) => {
                    check_language(file, text, opts.english_only)
                        .map_err(|e| format!("Combined run aborted: {file}: {e}"))?;
                    texts.push(text.as_str());
                }
                Err(e) => return Err(format!("Combined run aborted: {file}: {e}")),
            }
        }
        let combined = texts.join("\n\n");
        let summary = analyze_document("combined", &combined, opts, session)?;
        return Ok(AnalysisReport {
            summary,
            failed_files: Vec::new(),
        });
    }

    let mut sections = Vec::new();
    let mut failed_files = Vec::new();
    for (file, result) in decoded {
        let text = match result {
            Ok(text) => text,
            Err(e) => {
                failed_files.push((file, e));
                continue;
            }
        };
        if let Err(e) = check_language(&file, &text, opts.english_only) {
            failed_files.push((file, e));
            continue;
        }
        let stem = export_stem(Path::new(&file));
        match analyze_document(&stem, &text, opts, session) {
            Ok(section) => sections.push(section),
            Err(e) => failed_files.push((file, e)),
        }
    }

    Ok(AnalysisReport {
        summary: sections.join("\n"),
        failed_files,
    })
}

/// Prints the skipped-files block to stderr.
pub fn print_failed_files(failed: &[(String, String)]) {
    eprintln!("Warnings ({} file(s) skipped):", failed.len());
    for (file, reason) in failed {
        eprintln!("  {file}: {reason}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = AnalysisOptions::default();
        assert_eq!(opts.export_format, ExportFormat::Txt);
        assert!(!opts.combine);
        assert!(!opts.english_only);
        assert!(opts.export);
    }

    #[test]
    fn analyze_text_records_history() {
        let opts = AnalysisOptions {
            export: false,
            ..AnalysisOptions::default()
        };
        let mut session = AnalysisSession::new();
        let report = analyze_text("What a wonderful day.", &opts, &mut session);
        assert!(report.failed_files.is_empty());
        assert!(report.summary.contains("Overall sentiment: Positive"));
        assert_eq!(session.len(), 1);
        assert_eq!(session.all()[0].sentiment, Sentiment::Positive);
    }

    #[test]
    fn language_gate_lenient_passes_everything() {
        assert!(
            check_language("x", "Ceci est clairement un texte français, pas anglais.", false)
                .is_ok()
        );
        assert!(check_language("x", "", false).is_ok());
    }

    #[test]
    fn language_gate_strict_rejects_reliable_non_english() {
        let french = "Ceci est un long texte écrit entièrement en français. \
                      Il parle de la météo, des saisons et de la ville de Paris. \
                      Personne ne pourrait le confondre avec de l'anglais.";
        let gate = check_language("x", french, true);
        assert!(gate.is_err());
        assert!(gate.unwrap_err().contains("English-only"));
    }

    #[test]
    fn language_gate_strict_accepts_english() {
        let english = "This is a long English paragraph about the weather, \
                       the seasons, and the city of London. Nobody could \
                       mistake it for anything else.";
        assert!(check_language("x", english, true).is_ok());
    }
}
