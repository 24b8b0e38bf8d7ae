//! Export of document analyses to txt/csv/tsv/json.
//!
//! One output file per table, written into the working directory as
//! `<stem>_<YYYYmmdd_HHMMSS>_<table>.<ext>`.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::prelude::*;
use clap::ValueEnum;
use serde::Serialize;

use crate::analysis::DocumentAnalysis;

/// Output format for exported result tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Txt,
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }
}

/// Neutralizes spreadsheet formula injection in a CSV/TSV cell.
///
/// Cells starting with `=`, `+`, `-` or `@` get a leading apostrophe;
/// cells that already carry one are left alone.
pub fn csv_safe_cell(cell: String) -> String {
    match cell.chars().next() {
        Some('=') | Some('+') | Some('-') | Some('@') => format!("'{cell}"),
        _ => cell,
    }
}

/// File stem used for export names (`report.pdf` -> `report`).
pub fn export_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string())
}

#[derive(Serialize)]
struct SummaryRow<'a> {
    label: &'a str,
    score: f64,
    confidence: f64,
    sentences: usize,
    positive: usize,
    negative: usize,
    neutral: usize,
}

#[derive(Serialize)]
struct SentenceRow<'a> {
    position: usize,
    text: &'a str,
    score: f64,
    label: &'a str,
}

#[derive(Serialize)]
struct EmotionRow<'a> {
    emotion: &'a str,
    count: u32,
}

#[derive(Serialize)]
struct TopWordRow<'a> {
    label: &'a str,
    word: &'a str,
}

#[derive(Serialize)]
struct PhraseRow<'a> {
    phrase: &'a str,
    score: f64,
    label: &'a str,
}

/// Writes every table of `doc` into the working directory; returns the
/// created paths.
pub fn export_document(
    stem: &str,
    doc: &DocumentAnalysis,
    format: ExportFormat,
) -> Result<Vec<PathBuf>, String> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let name = |table: &str| PathBuf::from(format!("{stem}_{timestamp}_{table}.{}", format.extension()));

    if format == ExportFormat::Txt {
        let path = name("sentiment");
        write_file(&path, &render_document(stem, doc))?;
        return Ok(vec![path]);
    }

    let mut written = Vec::new();

    let summary = SummaryRow {
        label: doc.result.label.as_str(),
        score: doc.result.confidence / 100.0,
        confidence: doc.result.confidence,
        sentences: doc.result.sentences.len(),
        positive: doc.summary.positive,
        negative: doc.summary.negative,
        neutral: doc.summary.neutral,
    };
    let sentences: Vec<SentenceRow> = doc
        .result
        .sentences
        .iter()
        .enumerate()
        .map(|(position, s)| SentenceRow {
            position,
            text: &s.text,
            score: s.score,
            label: s.label.as_str(),
        })
        .collect();
    let emotions: Vec<EmotionRow> = doc
        .emotions
        .iter()
        .map(|(emotion, count)| EmotionRow {
            emotion: emotion.as_str(),
            count,
        })
        .collect();
    let top_words: Vec<TopWordRow> = [
        ("Positive", &doc.top_words.positive),
        ("Negative", &doc.top_words.negative),
        ("Neutral", &doc.top_words.neutral),
    ]
    .into_iter()
    .flat_map(|(label, words)| words.iter().map(move |w| TopWordRow { label, word: w }))
    .collect();
    let phrases: Vec<PhraseRow> = doc
        .key_phrases
        .iter()
        .map(|p| PhraseRow {
            phrase: &p.phrase,
            score: p.score,
            label: p.label.as_str(),
        })
        .collect();

    match format {
        ExportFormat::Json => {
            written.push(write_json(name("summary"), &summary)?);
            written.push(write_json(name("sentences"), &sentences)?);
            written.push(write_json(name("wordfreq"), &doc.word_frequencies)?);
            written.push(write_json(name("topwords"), &top_words)?);
            written.push(write_json(name("emotions"), &emotions)?);
            written.push(write_json(name("phrases"), &phrases)?);
        }
        ExportFormat::Csv | ExportFormat::Tsv => {
            let delimiter = if format == ExportFormat::Tsv { b'\t' } else { b',' };

            written.push(write_table(
                name("summary"),
                delimiter,
                &[
                    "label",
                    "score",
                    "confidence",
                    "sentences",
                    "positive",
                    "negative",
                    "neutral",
                ],
                vec![vec![
                    summary.label.to_string(),
                    summary.score.to_string(),
                    summary.confidence.to_string(),
                    summary.sentences.to_string(),
                    summary.positive.to_string(),
                    summary.negative.to_string(),
                    summary.neutral.to_string(),
                ]],
            )?);

            written.push(write_table(
                name("sentences"),
                delimiter,
                &["position", "text", "score", "label"],
                sentences
                    .iter()
                    .map(|s| {
                        vec![
                            s.position.to_string(),
                            csv_safe_cell(s.text.to_string()),
                            s.score.to_string(),
                            s.label.to_string(),
                        ]
                    })
                    .collect(),
            )?);

            written.push(write_table(
                name("wordfreq"),
                delimiter,
                &["word", "count"],
                doc.word_frequencies
                    .iter()
                    .map(|e| vec![csv_safe_cell(e.word.clone()), e.count.to_string()])
                    .collect(),
            )?);

            written.push(write_table(
                name("topwords"),
                delimiter,
                &["label", "word"],
                top_words
                    .iter()
                    .map(|r| vec![r.label.to_string(), csv_safe_cell(r.word.to_string())])
                    .collect(),
            )?);

            written.push(write_table(
                name("emotions"),
                delimiter,
                &["emotion", "count"],
                emotions
                    .iter()
                    .map(|r| vec![r.emotion.to_string(), r.count.to_string()])
                    .collect(),
            )?);

            written.push(write_table(
                name("phrases"),
                delimiter,
                &["phrase", "score", "label"],
                phrases
                    .iter()
                    .map(|r| {
                        vec![
                            csv_safe_cell(r.phrase.to_string()),
                            r.score.to_string(),
                            r.label.to_string(),
                        ]
                    })
                    .collect(),
            )?);
        }
        ExportFormat::Txt => unreachable!("handled above"),
    }

    Ok(written)
}

/// Renders the human-readable report for one document (stdout and the
/// txt export share this).
pub fn render_document(stem: &str, doc: &DocumentAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {stem} ===");
    let _ = writeln!(
        out,
        "Overall sentiment: {} (score {:.4}, confidence {:.2}%)",
        doc.result.label,
        doc.result.confidence / 100.0,
        doc.result.confidence
    );
    let _ = writeln!(
        out,
        "Sentences: {} | positive {}, negative {}, neutral {}",
        doc.summary.total(),
        doc.summary.positive,
        doc.summary.negative,
        doc.summary.neutral
    );

    let emotion_list = doc
        .emotions
        .iter()
        .map(|(e, n)| format!("{e} {n}"))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "Emotions: {emotion_list}");

    let _ = writeln!(out, "Top words:");
    for entry in &doc.word_frequencies {
        let _ = writeln!(out, "  {}\t{}", entry.word, entry.count);
    }

    if !doc.key_phrases.is_empty() {
        let _ = writeln!(out, "Key phrases:");
        for phrase in &doc.key_phrases {
            let _ = writeln!(
                out,
                "  {} ({}, {:.2})",
                phrase.phrase, phrase.label, phrase.score
            );
        }
    }
    out
}

fn write_json<T: Serialize>(path: PathBuf, value: &T) -> Result<PathBuf, String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Serialize {} failed: {e}", path.display()))?;
    write_file(&path, &json)?;
    Ok(path)
}

fn write_table(
    path: PathBuf,
    delimiter: u8,
    header: &[&str],
    rows: Vec<Vec<String>>,
) -> Result<PathBuf, String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(&path)
        .map_err(|e| format!("Create {} failed: {e}", path.display()))?;
    writer
        .write_record(header)
        .map_err(|e| format!("Write {} failed: {e}", path.display()))?;
    for row in rows {
        writer
            .write_record(&row)
            .map_err(|e| format!("Write {} failed: {e}", path.display()))?;
    }
    writer
        .flush()
        .map_err(|e| format!("Flush {} failed: {e}", path.display()))?;
    Ok(path)
}

fn write_file(path: &Path, content: &str) -> Result<(), String> {
    fs::write(path, content).map_err(|e| format!("Write {} failed: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_cell_neutralizes_formula_starters() {
        assert_eq!(csv_safe_cell("=SUM(A1)".into()), "'=SUM(A1)");
        assert_eq!(csv_safe_cell("+1".into()), "'+1");
        assert_eq!(csv_safe_cell("-1".into()), "'-1");
        assert_eq!(csv_safe_cell("@cmd".into()), "'@cmd");
    }

    #[test]
    fn safe_cell_leaves_safe_cells_alone() {
        assert_eq!(csv_safe_cell("'@already".into()), "'@already");
        assert_eq!(csv_safe_cell("normal".into()), "normal");
        assert_eq!(csv_safe_cell("".into()), "");
    }

    #[test]
    fn stems() {
        assert_eq!(export_stem(Path::new("dir/report.pdf")), "report");
        assert_eq!(export_stem(Path::new("notes.tar.gz")), "notes.tar");
    }

    #[test]
    fn rendered_report_lists_the_views() {
        use crate::analysis::{DocumentAnalysis, SentimentAnalyzer};
        let doc = DocumentAnalysis::compute(
            &SentimentAnalyzer::new(),
            "I love Central Park. The subway was awful.",
        );
        let text = render_document("walk", &doc);
        assert!(text.contains("=== walk ==="));
        assert!(text.contains("Overall sentiment:"));
        assert!(text.contains("positive 1, negative 1, neutral 0"));
        assert!(text.contains("Central Park"));
        assert!(text.contains("Top words:"));
    }
}
