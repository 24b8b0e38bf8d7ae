//! Coarse emotion classification over scored sentences.

use serde::Serialize;
use std::fmt;

/// The fixed emotion set. There is no "none" variant; sentences that
/// match no rule simply contribute to no bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Emotion {
    Joy,
    Anger,
    Sadness,
    Fear,
    Surprise,
    Disgust,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Joy,
        Emotion::Anger,
        Emotion::Sadness,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Disgust,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "Joy",
            Emotion::Anger => "Anger",
            Emotion::Sadness => "Sadness",
            Emotion::Fear => "Fear",
            Emotion::Surprise => "Surprise",
            Emotion::Disgust => "Disgust",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-emotion sentence counts for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmotionCounts {
    pub joy: u32,
    pub anger: u32,
    pub sadness: u32,
    pub fear: u32,
    pub surprise: u32,
    pub disgust: u32,
}

impl EmotionCounts {
    pub fn get(&self, emotion: Emotion) -> u32 {
        match emotion {
            Emotion::Joy => self.joy,
            Emotion::Anger => self.anger,
            Emotion::Sadness => self.sadness,
            Emotion::Fear => self.fear,
            Emotion::Surprise => self.surprise,
            Emotion::Disgust => self.disgust,
        }
    }

    pub(crate) fn bump(&mut self, emotion: Emotion) {
        match emotion {
            Emotion::Joy => self.joy += 1,
            Emotion::Anger => self.anger += 1,
            Emotion::Sadness => self.sadness += 1,
            Emotion::Fear => self.fear += 1,
            Emotion::Surprise => self.surprise += 1,
            Emotion::Disgust => self.disgust += 1,
        }
    }

    /// `(emotion, count)` pairs in the fixed bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, u32)> + '_ {
        Emotion::ALL.into_iter().map(move |e| (e, self.get(e)))
    }

    pub fn total(&self) -> u32 {
        Emotion::ALL.iter().map(|e| self.get(*e)).sum()
    }
}

/// Assigns a sentence to at most one emotion bucket, first match wins.
///
/// Rule order is part of the contract: the score bands are checked before
/// the keyword rules, so keyword-based Fear/Surprise/Disgust can only
/// fire for sentences scoring in [0, 0.5]. A strongly negative sentence
/// mentioning "fear" lands in Anger or Sadness, never Fear.
pub fn bucket_for(score: f64, sentence: &str) -> Option<Emotion> {
    if score > 0.5 {
        return Some(Emotion::Joy);
    }
    if score < -0.5 {
        return Some(Emotion::Anger);
    }
    if score < 0.0 {
        return Some(Emotion::Sadness);
    }
    let lower = sentence.to_lowercase();
    if lower.contains("fear") {
        return Some(Emotion::Fear);
    }
    if lower.contains("surprise") {
        return Some(Emotion::Surprise);
    }
    if lower.contains("disgust") {
        return Some(Emotion::Disgust);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bands_take_priority() {
        assert_eq!(bucket_for(0.6, "whatever"), Some(Emotion::Joy));
        assert_eq!(bucket_for(-0.6, "whatever"), Some(Emotion::Anger));
        assert_eq!(bucket_for(-0.2, "whatever"), Some(Emotion::Sadness));
    }

    #[test]
    fn exact_band_edges() {
        // 0.5 is not "> 0.5"; falls through to keyword rules
        assert_eq!(bucket_for(0.5, "plain words"), None);
        assert_eq!(bucket_for(0.5, "a surprise party"), Some(Emotion::Surprise));
        // -0.5 is not "< -0.5"; it is "< 0" -> Sadness
        assert_eq!(bucket_for(-0.5, "whatever"), Some(Emotion::Sadness));
    }

    #[test]
    fn keywords_fire_only_near_neutral() {
        assert_eq!(bucket_for(0.0, "I fear the dark"), Some(Emotion::Fear));
        assert_eq!(bucket_for(0.0, "What a SURPRISE"), Some(Emotion::Surprise));
        assert_eq!(bucket_for(0.0, "pure disgust"), Some(Emotion::Disgust));
    }

    #[test]
    fn fearful_negative_counts_as_sadness() {
        // Faithful to the original rule order: the negative band swallows
        // the sentence before the "fear" keyword is ever checked.
        assert_eq!(bucket_for(-0.3, "I fear the worst"), Some(Emotion::Sadness));
        assert_eq!(bucket_for(-0.9, "fear everywhere"), Some(Emotion::Anger));
    }

    #[test]
    fn keyword_order_is_fixed() {
        // "fear" is checked before "surprise"
        assert_eq!(
            bucket_for(0.0, "a fearful surprise"),
            Some(Emotion::Fear)
        );
    }

    #[test]
    fn no_rule_no_bucket() {
        assert_eq!(bucket_for(0.0, "the train departs at noon"), None);
        assert_eq!(bucket_for(0.3, "mildly pleasant commute"), None);
    }

    #[test]
    fn counts_bump_and_total() {
        let mut counts = EmotionCounts::default();
        counts.bump(Emotion::Joy);
        counts.bump(Emotion::Joy);
        counts.bump(Emotion::Fear);
        assert_eq!(counts.get(Emotion::Joy), 2);
        assert_eq!(counts.get(Emotion::Fear), 1);
        assert_eq!(counts.get(Emotion::Disgust), 0);
        assert_eq!(counts.total(), 3);
        let pairs: Vec<_> = counts.iter().collect();
        assert_eq!(pairs[0], (Emotion::Joy, 2));
        assert_eq!(pairs.len(), 6);
    }
}
