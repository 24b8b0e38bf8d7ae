//! Key-phrase extraction.
//!
//! Candidate phrases are runs of capitalized words ("Central Park",
//! "Detective Story"). All-caps tokens and capitalized function words are
//! not phrase material. Each phrase is scored with the shared polarity
//! scorer and labeled with the zero-threshold rule.

use serde::Serialize;

use crate::analysis::Sentiment;
use crate::score::PolarityScorer;
use crate::tokenize::{split_sentences, split_words};

/// Capitalized forms of these never start or extend a phrase.
const FUNCTION_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "if", "then", "so", "of", "in", "on", "at", "to", "for",
    "with", "by", "from", "as", "is", "are", "was", "were", "be", "been", "it", "its", "this",
    "that", "these", "those", "he", "she", "they", "we", "you", "i", "my", "his", "her", "their",
    "our", "your", "not", "no",
];

/// A scored key phrase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhraseSentiment {
    pub phrase: String,
    pub score: f64,
    pub label: Sentiment,
}

/// Extracts and scores key phrases from `text`, in appearance order.
pub fn key_phrases<S: PolarityScorer>(text: &str, scorer: &S) -> Vec<PhraseSentiment> {
    let mut phrases = Vec::new();
    for sentence in split_sentences(text) {
        let words = split_words(&sentence);
        let mut run: Vec<&str> = Vec::new();
        for word in &words {
            if is_phrase_word(word) {
                run.push(word.as_str());
            } else {
                flush_run(&mut run, scorer, &mut phrases);
            }
        }
        flush_run(&mut run, scorer, &mut phrases);
    }
    phrases
}

fn flush_run<S: PolarityScorer>(
    run: &mut Vec<&str>,
    scorer: &S,
    phrases: &mut Vec<PhraseSentiment>,
) {
    if run.is_empty() {
        return;
    }
    let phrase = run.join(" ");
    run.clear();
    let score = scorer.score(&phrase);
    phrases.push(PhraseSentiment {
        phrase,
        score,
        label: Sentiment::from_score(score),
    });
}

/// Capitalized (first letter upper, remainder not all caps), alphabetic,
/// and not a function word.
fn is_phrase_word(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    let rest: &str = chars.as_str();
    // all-upper acronyms (NASA) are not phrase words; single letters
    // neither
    if rest.is_empty() || rest.chars().any(|c| c.is_uppercase()) {
        return false;
    }
    if !word.chars().all(|c| c.is_alphabetic()) {
        return false;
    }
    !FUNCTION_WORDS.contains(&word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::LexiconScorer;

    fn extract(text: &str) -> Vec<PhraseSentiment> {
        key_phrases(text, &LexiconScorer::new())
    }

    #[test]
    fn capitalized_runs_become_phrases() {
        let p = extract("We visited Central Park in Berlin today.");
        let names: Vec<&str> = p.iter().map(|x| x.phrase.as_str()).collect();
        assert_eq!(names, vec!["Central Park", "Berlin"]);
    }

    #[test]
    fn acronyms_and_function_words_are_filtered() {
        let p = extract("The rocket NASA built reached Hamburg.");
        let names: Vec<&str> = p.iter().map(|x| x.phrase.as_str()).collect();
        assert!(!names.iter().any(|n| n.contains("NASA")));
        assert!(!names.iter().any(|n| n.contains("The")));
        assert_eq!(names, vec!["Hamburg"]);
    }

    #[test]
    fn phrases_carry_scores_and_labels() {
        let p = extract("They praised Wonderful Copenhagen loudly.");
        assert_eq!(p.len(), 1);
        assert_eq!(p[0].phrase, "Wonderful Copenhagen");
        assert_eq!(p[0].label, Sentiment::Positive);
        assert_eq!(p[0].score, 1.0);
    }

    #[test]
    fn neutral_phrase_scores_zero() {
        let p = extract("She studied at Humboldt University.");
        assert_eq!(p[0].phrase, "Humboldt University");
        assert_eq!(p[0].score, 0.0);
        assert_eq!(p[0].label, Sentiment::Neutral);
    }

    #[test]
    fn empty_input_yields_no_phrases() {
        assert!(extract("").is_empty());
        assert!(extract("no capitals anywhere here").is_empty());
    }
}
