//! Polarity scoring.
//!
//! The scorer is deliberately a trait with a single method so alternative
//! backends (a different lexicon, an external model) can be dropped in
//! without touching classification or aggregation.

use crate::lexicon;
use crate::tokenize::split_words;

/// How many tokens a negator or booster stays armed before it is
/// discarded unused ("not a good idea" still negates "good").
const MODIFIER_WINDOW: usize = 3;

/// Negated valences are flipped and dampened rather than mirrored:
/// "not good" is mildly negative, not the exact opposite of "good".
const NEGATION_FACTOR: f64 = -0.5;

/// A polarity scoring backend.
///
/// `score` must be a deterministic, pure function of the unit's words,
/// returning a value in `[-1.0, 1.0]`, with exactly `0.0` for input it
/// cannot score. The same rule applies at every granularity (whole text,
/// single sentence, single word), so results are comparable across
/// levels.
pub trait PolarityScorer {
    fn score(&self, unit: &str) -> f64;
}

/// The default scorer: an embedded English valence lexicon with negation
/// and intensity handling.
///
/// Each recognized word contributes its (possibly modified) valence; the
/// unit's score is the arithmetic mean of those contributions, clamped to
/// `[-1.0, 1.0]`. Units without any recognized word score exactly `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        LexiconScorer
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, unit: &str) -> f64 {
        let mut values: Vec<f64> = Vec::new();
        let mut negation: Option<usize> = None;
        let mut boost: Option<(f64, usize)> = None;

        for (i, token) in split_words(unit).iter().enumerate() {
            let word = token.to_lowercase();

            if lexicon::is_negator(&word) {
                negation = Some(i);
                continue;
            }
            if let Some(factor) = lexicon::booster(&word) {
                boost = Some((factor, i));
                continue;
            }

            if let Some(base) = lexicon::valence(&word) {
                let mut value = base;
                if let Some((factor, at)) = boost {
                    if i - at <= MODIFIER_WINDOW {
                        value *= factor;
                    }
                }
                if let Some(at) = negation {
                    if i - at <= MODIFIER_WINDOW {
                        value *= NEGATION_FACTOR;
                    }
                }
                values.push(value.clamp(-1.0, 1.0));
                negation = None;
                boost = None;
            }
        }

        if values.is_empty() {
            return 0.0;
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(unit: &str) -> f64 {
        LexiconScorer::new().score(unit)
    }

    #[test]
    fn unknown_words_score_exactly_zero() {
        assert_eq!(score("the chair stood near the table"), 0.0);
        assert_eq!(score(""), 0.0);
        assert_eq!(score("12345 !!!"), 0.0);
    }

    #[test]
    fn single_word_matches_lexicon_value() {
        assert_eq!(score("happy"), 0.8);
        assert_eq!(score("Happy"), 0.8);
        assert_eq!(score("sad"), -0.5);
    }

    #[test]
    fn sentence_averages_recognized_words() {
        // love = 0.5, hate = -0.8 -> mean -0.15
        let s = score("love hate");
        assert!((s - (-0.15)).abs() < 1e-12);
    }

    #[test]
    fn word_and_sentence_granularity_agree() {
        // One recognized word surrounded by noise scores like the word alone.
        assert_eq!(score("it was a happy accident"), score("happy"));
    }

    #[test]
    fn negation_flips_and_dampens() {
        // not good = 0.7 * -0.5
        let s = score("this is not good");
        assert!((s - (-0.35)).abs() < 1e-12);
    }

    #[test]
    fn contraction_negates() {
        let s = score("it isn't good");
        assert!((s - (-0.35)).abs() < 1e-12);
    }

    #[test]
    fn negation_expires_outside_window() {
        // four tokens between "not" and "good": negation is stale
        let s = score("not that it would ever be good");
        assert_eq!(s, score("good"));
    }

    #[test]
    fn booster_scales_next_valence_word() {
        // very good = 0.7 * 1.3
        let s = score("very good");
        assert!((s - 0.91).abs() < 1e-12);
        // slightly good = 0.7 * 0.5
        let s = score("slightly good");
        assert!((s - 0.35).abs() < 1e-12);
    }

    #[test]
    fn booster_and_negation_combine() {
        // not very good = 0.7 * 1.3 * -0.5
        let s = score("not very good");
        assert!((s - (-0.455)).abs() < 1e-12);
    }

    #[test]
    fn extreme_values_are_clamped() {
        // extremely wonderful = 1.0 * 1.5, clamped to 1.0
        assert_eq!(score("extremely wonderful"), 1.0);
        assert_eq!(score("extremely awful"), -1.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let text = "a truly wonderful day with one terrible moment";
        assert_eq!(score(text), score(text));
    }
}
