//! Sentiment classification and the aggregation engine.
//!
//! Every statistic a document analysis produces is derived from the one
//! sentence sequence returned by [`SentimentAnalyzer::analyze`], so
//! summary counts, timeline and heatmap can never disagree with each
//! other.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::emotion::{self, EmotionCounts};
use crate::phrases::{self, PhraseSentiment};
use crate::score::{LexiconScorer, PolarityScorer};
use crate::tokenize::{split_sentences, split_words};

/// Number of entries kept in the word-frequency table.
const WORD_FREQUENCY_LIMIT: usize = 10;

/// Discrete sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Zero-threshold classification. Exact zero is Neutral; there is no
    /// epsilon band, since plenty of real sentences legitimately score 0.0.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scored sentence. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct SentenceSentiment {
    pub text: String,
    pub score: f64,
    pub label: Sentiment,
}

/// Whole-document result.
///
/// `label` comes from the zero-threshold rule applied to the whole-text
/// score, independently of the per-sentence labels, which may disagree
/// with it (a mostly-neutral text with one strong sentence, say). That is
/// expected, not a bug.
///
/// `confidence` is the whole-text score scaled by 100 and therefore lives
/// in [-100, 100]; the name is a historical misnomer kept for interface
/// compatibility. It is not a probability and it can be negative.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub label: Sentiment,
    pub confidence: f64,
    pub sentences: Vec<SentenceSentiment>,
}

/// Sentence counts by label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentSummary {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentSummary {
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    pub(crate) fn count(&mut self, label: Sentiment) {
        match label {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }
}

/// One row of the word-frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u32,
}

/// Per-sentence polarity in document order; `position` is the 0-based
/// sentence index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelinePoint {
    pub position: usize,
    pub sentiment: f64,
}

/// Heatmap bucket; same content as the timeline under a charting-oriented
/// name (`segment` is the 0-based sentence index).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub segment: usize,
    pub sentiment: f64,
}

/// Word tokens grouped by their individual label, in appearance order,
/// duplicates retained.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TopWords {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub neutral: Vec<String>,
}

/// The aggregation engine, generic over the scoring backend.
///
/// All operations are pure with respect to the analyzer: calling any of
/// them twice on the same text yields identical results.
#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer<S = LexiconScorer> {
    scorer: S,
}

impl SentimentAnalyzer<LexiconScorer> {
    pub fn new() -> Self {
        SentimentAnalyzer {
            scorer: LexiconScorer::new(),
        }
    }
}

impl<S: PolarityScorer> SentimentAnalyzer<S> {
    /// Wraps an alternative scoring backend.
    pub fn with_scorer(scorer: S) -> Self {
        SentimentAnalyzer { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Full per-sentence breakdown plus overall label and confidence.
    ///
    /// Empty or whitespace-only input yields no sentences, a Neutral
    /// label and confidence 0.0, never an error.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let sentences: Vec<SentenceSentiment> = split_sentences(text)
            .into_iter()
            .map(|sentence| {
                let score = self.scorer.score(&sentence);
                SentenceSentiment {
                    text: sentence,
                    score,
                    label: Sentiment::from_score(score),
                }
            })
            .collect();

        let overall = self.scorer.score(text);
        AnalysisResult {
            label: Sentiment::from_score(overall),
            confidence: overall * 100.0,
            sentences,
        }
    }

    /// Counts sentences by label.
    pub fn summary(&self, text: &str) -> SentimentSummary {
        summary_of(&self.analyze(text))
    }

    /// Identical contract to [`summary`](Self::summary); kept as a
    /// separately named operation for downstream call-site clarity.
    pub fn distribution(&self, text: &str) -> SentimentSummary {
        self.summary(text)
    }

    /// Classifies each word token individually.
    pub fn top_words(&self, text: &str) -> TopWords {
        let mut words = TopWords::default();
        for word in split_words(text) {
            match Sentiment::from_score(self.scorer.score(&word)) {
                Sentiment::Positive => words.positive.push(word),
                Sentiment::Negative => words.negative.push(word),
                Sentiment::Neutral => words.neutral.push(word),
            }
        }
        words
    }

    /// Case-sensitive exact-token counts, descending by count, truncated
    /// to the top 10. Ties keep first-occurrence order (stable sort).
    pub fn word_frequencies(&self, text: &str) -> Vec<WordFrequency> {
        let mut counts: HashMap<String, u32> = HashMap::new();
        let mut order: Vec<String> = Vec::new();
        for word in split_words(text) {
            let slot = counts.entry(word.clone()).or_insert(0);
            if *slot == 0 {
                order.push(word);
            }
            *slot += 1;
        }

        let mut table: Vec<WordFrequency> = order
            .into_iter()
            .map(|word| {
                let count = counts[&word];
                WordFrequency { word, count }
            })
            .collect();
        table.sort_by(|a, b| b.count.cmp(&a.count));
        table.truncate(WORD_FREQUENCY_LIMIT);
        table
    }

    /// Per-sentence polarity in document order.
    pub fn timeline(&self, text: &str) -> Vec<TimelinePoint> {
        timeline_of(&self.analyze(text))
    }

    /// Same pairs as [`timeline`](Self::timeline), as heatmap buckets.
    pub fn heatmap_data(&self, text: &str) -> Vec<HeatmapCell> {
        heatmap_of(&self.analyze(text))
    }

    /// Emotion bucket counts, one pass over the scored sentences.
    pub fn emotions(&self, text: &str) -> EmotionCounts {
        emotions_of(&self.analyze(text))
    }

    /// Scored key phrases (capitalized-run heuristic).
    pub fn key_phrases(&self, text: &str) -> Vec<PhraseSentiment> {
        phrases::key_phrases(text, &self.scorer)
    }
}

fn summary_of(result: &AnalysisResult) -> SentimentSummary {
    let mut summary = SentimentSummary::default();
    for sentence in &result.sentences {
        summary.count(sentence.label);
    }
    summary
}

fn timeline_of(result: &AnalysisResult) -> Vec<TimelinePoint> {
    result
        .sentences
        .iter()
        .enumerate()
        .map(|(position, s)| TimelinePoint {
            position,
            sentiment: s.score,
        })
        .collect()
}

fn heatmap_of(result: &AnalysisResult) -> Vec<HeatmapCell> {
    result
        .sentences
        .iter()
        .enumerate()
        .map(|(segment, s)| HeatmapCell {
            segment,
            sentiment: s.score,
        })
        .collect()
}

fn emotions_of(result: &AnalysisResult) -> EmotionCounts {
    let mut counts = EmotionCounts::default();
    for sentence in &result.sentences {
        if let Some(bucket) = emotion::bucket_for(sentence.score, &sentence.text) {
            counts.bump(bucket);
        }
    }
    counts
}

/// Every view of one document, computed in a single fan-out.
///
/// Summary, timeline, heatmap and emotions are derived from the one
/// sentence sequence in `result`, which is what guarantees that the
/// counts agree across views.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentAnalysis {
    pub result: AnalysisResult,
    pub summary: SentimentSummary,
    pub top_words: TopWords,
    pub word_frequencies: Vec<WordFrequency>,
    pub timeline: Vec<TimelinePoint>,
    pub heatmap: Vec<HeatmapCell>,
    pub emotions: EmotionCounts,
    pub key_phrases: Vec<PhraseSentiment>,
}

impl DocumentAnalysis {
    pub fn compute<S: PolarityScorer>(analyzer: &SentimentAnalyzer<S>, text: &str) -> Self {
        let result = analyzer.analyze(text);
        let summary = summary_of(&result);
        let timeline = timeline_of(&result);
        let heatmap = heatmap_of(&result);
        let emotions = emotions_of(&result);
        DocumentAnalysis {
            summary,
            timeline,
            heatmap,
            emotions,
            top_words: analyzer.top_words(text),
            word_frequencies: analyzer.word_frequencies(text),
            key_phrases: analyzer.key_phrases(text),
            result,
        }
    }
}
