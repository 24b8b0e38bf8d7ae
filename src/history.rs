//! Session history of completed analyses.
//!
//! The session is explicit state owned by the caller: created once,
//! passed by reference into the drivers, cleared only by [`AnalysisSession::reset`].
//! Records live for the lifetime of the session; nothing is persisted.

use serde::Serialize;

use crate::analysis::{AnalysisResult, Sentiment, SentimentSummary};

/// One completed analysis.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
}

/// Append-only record of past analyses.
#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    records: Vec<HistoryRecord>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        AnalysisSession::default()
    }

    /// Appends one record. There is no deduplication and no capacity
    /// limit; records are never mutated or removed.
    pub fn append(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    /// Convenience: records the outcome of a completed analysis.
    pub fn record(&mut self, text: &str, result: &AnalysisResult) {
        self.append(HistoryRecord {
            text: text.to_string(),
            sentiment: result.label,
            confidence: result.confidence,
        });
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Counts records by stored label across the whole history.
    pub fn overall_distribution(&self) -> SentimentSummary {
        let mut summary = SentimentSummary::default();
        for record in &self.records {
            match record.sentiment {
                Sentiment::Positive => summary.positive += 1,
                Sentiment::Negative => summary.negative += 1,
                Sentiment::Neutral => summary.neutral += 1,
            }
        }
        summary
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops all records. The only way a session ever shrinks.
    pub fn reset(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SentimentAnalyzer;

    #[test]
    fn records_keep_insertion_order() {
        let analyzer = SentimentAnalyzer::new();
        let mut session = AnalysisSession::new();
        for text in ["I love this.", "I hate this.", "The door is closed."] {
            let result = analyzer.analyze(text);
            session.record(text, &result);
        }
        assert_eq!(session.len(), 3);
        let all = session.all();
        assert_eq!(all[0].text, "I love this.");
        assert_eq!(all[0].sentiment, Sentiment::Positive);
        assert_eq!(all[1].sentiment, Sentiment::Negative);
        assert_eq!(all[2].sentiment, Sentiment::Neutral);
    }

    #[test]
    fn distribution_sums_to_record_count() {
        let analyzer = SentimentAnalyzer::new();
        let mut session = AnalysisSession::new();
        for text in ["Wonderful!", "Awful.", "Just words."] {
            session.record(text, &analyzer.analyze(text));
        }
        let dist = session.overall_distribution();
        assert_eq!(dist.total(), 3);
        assert_eq!(dist.positive, 1);
        assert_eq!(dist.negative, 1);
        assert_eq!(dist.neutral, 1);
    }

    #[test]
    fn duplicates_are_kept() {
        let analyzer = SentimentAnalyzer::new();
        let mut session = AnalysisSession::new();
        let result = analyzer.analyze("Nice.");
        session.record("Nice.", &result);
        session.record("Nice.", &result);
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = AnalysisSession::new();
        session.append(HistoryRecord {
            text: "x".into(),
            sentiment: Sentiment::Neutral,
            confidence: 0.0,
        });
        assert!(!session.is_empty());
        session.reset();
        assert!(session.is_empty());
        assert_eq!(session.overall_distribution().total(), 0);
    }
}
