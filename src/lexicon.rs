//! Embedded English valence lexicon.
//!
//! Weights are in [-1.0, 1.0]. Lookup is case-insensitive; callers pass
//! lowercased tokens. The tables are deliberately small and fixed: the
//! scorer is a pure function of this data and never learns or updates.

/// Word valences, positive block first.
pub(crate) const VALENCES: &[(&str, f64)] = &[
    // positive
    ("admirable", 0.7),
    ("adore", 0.6),
    ("amazing", 0.6),
    ("awesome", 0.8),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("bliss", 0.8),
    ("brilliant", 0.9),
    ("calm", 0.3),
    ("charming", 0.6),
    ("cheerful", 0.8),
    ("clean", 0.4),
    ("clever", 0.6),
    ("comfortable", 0.5),
    ("delicious", 0.8),
    ("delight", 0.8),
    ("delighted", 0.8),
    ("delightful", 0.85),
    ("easy", 0.4),
    ("effective", 0.6),
    ("elegant", 0.6),
    ("enjoy", 0.5),
    ("enjoyable", 0.6),
    ("excellent", 1.0),
    ("excited", 0.6),
    ("exciting", 0.7),
    ("fabulous", 0.9),
    ("fantastic", 0.9),
    ("fast", 0.3),
    ("favorite", 0.6),
    ("fine", 0.4),
    ("flawless", 0.9),
    ("fresh", 0.4),
    ("friendly", 0.6),
    ("fun", 0.6),
    ("generous", 0.6),
    ("gentle", 0.4),
    ("glad", 0.6),
    ("good", 0.7),
    ("gorgeous", 0.9),
    ("graceful", 0.6),
    ("great", 0.8),
    ("happy", 0.8),
    ("helpful", 0.5),
    ("honest", 0.5),
    ("hope", 0.4),
    ("hopeful", 0.5),
    ("impressive", 0.7),
    ("incredible", 0.9),
    ("interesting", 0.5),
    ("joy", 0.8),
    ("joyful", 0.9),
    ("kind", 0.6),
    ("laugh", 0.5),
    ("like", 0.3),
    ("love", 0.5),
    ("loved", 0.5),
    ("lovely", 0.8),
    ("loyal", 0.5),
    ("lucky", 0.6),
    ("magnificent", 0.9),
    ("marvelous", 0.9),
    ("nice", 0.6),
    ("outstanding", 0.9),
    ("perfect", 1.0),
    ("pleasant", 0.6),
    ("pleased", 0.6),
    ("positive", 0.4),
    ("pretty", 0.5),
    ("proud", 0.6),
    ("recommend", 0.4),
    ("refreshing", 0.6),
    ("reliable", 0.5),
    ("remarkable", 0.7),
    ("right", 0.3),
    ("safe", 0.4),
    ("satisfied", 0.5),
    ("smart", 0.6),
    ("smooth", 0.4),
    ("solid", 0.4),
    ("splendid", 0.9),
    ("strong", 0.4),
    ("stunning", 0.9),
    ("succeed", 0.6),
    ("success", 0.6),
    ("successful", 0.6),
    ("superb", 0.9),
    ("sweet", 0.5),
    ("terrific", 0.9),
    ("thrilled", 0.8),
    ("useful", 0.4),
    ("valuable", 0.5),
    ("warm", 0.4),
    ("welcome", 0.4),
    ("win", 0.5),
    ("wonderful", 1.0),
    ("worthy", 0.5),
    // negative
    ("abysmal", -1.0),
    ("afraid", -0.6),
    ("angry", -0.7),
    ("annoying", -0.6),
    ("anxious", -0.5),
    ("appalling", -0.9),
    ("atrocious", -1.0),
    ("awful", -1.0),
    ("bad", -0.7),
    ("boring", -0.5),
    ("broken", -0.5),
    ("cheap", -0.3),
    ("cruel", -0.8),
    ("damage", -0.4),
    ("dangerous", -0.6),
    ("dead", -0.5),
    ("depressing", -0.7),
    ("dirty", -0.5),
    ("disappointed", -0.6),
    ("disappointing", -0.6),
    ("disaster", -0.8),
    ("disgusting", -0.8),
    ("dreadful", -0.9),
    ("dull", -0.4),
    ("evil", -0.9),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.6),
    ("fake", -0.4),
    ("foul", -0.7),
    ("frustrating", -0.6),
    ("gloomy", -0.5),
    ("grim", -0.5),
    ("gross", -0.6),
    ("hate", -0.8),
    ("hated", -0.8),
    ("hideous", -0.8),
    ("hopeless", -0.7),
    ("horrible", -1.0),
    ("horrid", -0.9),
    ("hurt", -0.5),
    ("inferior", -0.5),
    ("insult", -0.6),
    ("lame", -0.5),
    ("lonely", -0.5),
    ("lose", -0.4),
    ("loss", -0.4),
    ("lost", -0.4),
    ("mediocre", -0.3),
    ("mess", -0.4),
    ("miserable", -0.8),
    ("nasty", -0.7),
    ("negative", -0.4),
    ("offensive", -0.6),
    ("painful", -0.6),
    ("pathetic", -0.7),
    ("poor", -0.5),
    ("regret", -0.5),
    ("rotten", -0.7),
    ("rude", -0.6),
    ("sad", -0.5),
    ("scared", -0.6),
    ("shame", -0.5),
    ("sick", -0.5),
    ("slow", -0.3),
    ("sorry", -0.3),
    ("stupid", -0.7),
    ("terrible", -1.0),
    ("tragic", -0.8),
    ("ugly", -0.7),
    ("unhappy", -0.6),
    ("unpleasant", -0.6),
    ("unreliable", -0.5),
    ("upset", -0.5),
    ("useless", -0.6),
    ("weak", -0.4),
    ("worse", -0.6),
    ("worst", -1.0),
    ("worthless", -0.7),
    ("wrong", -0.5),
];

/// Tokens that flip and dampen the next valence word (`not good`).
/// Contractions ending in `n't` are handled by the scorer directly.
pub(crate) const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "neither", "nor", "nothing", "nobody", "cannot", "without",
];

/// Intensity modifiers applied to the next valence word.
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 1.4),
    ("barely", 0.4),
    ("extremely", 1.5),
    ("fairly", 0.9),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("rather", 0.9),
    ("really", 1.3),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("totally", 1.3),
    ("truly", 1.3),
    ("very", 1.3),
];

/// Valence for a lowercased token, if the lexicon knows it.
pub(crate) fn valence(word: &str) -> Option<f64> {
    VALENCES.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
}

/// Booster multiplier for a lowercased token, if any.
pub(crate) fn booster(word: &str) -> Option<f64> {
    BOOSTERS.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
}

/// Whether a lowercased token negates the next valence word.
pub(crate) fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valences_stay_in_range() {
        for (word, v) in VALENCES {
            assert!((-1.0..=1.0).contains(v), "{word} out of range: {v}");
            assert!(*v != 0.0, "{word} has zero valence");
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(valence("love"), Some(0.5));
        assert_eq!(valence("hate"), Some(-0.8));
        assert_eq!(valence("table"), None);
    }

    #[test]
    fn emotion_keywords_are_not_valence_words() {
        // Keyword-based emotion rules only fire on near-neutral sentences,
        // so the bare keywords must score 0 through the lexicon.
        for word in ["fear", "surprise", "disgust"] {
            assert_eq!(valence(word), None, "{word} must not carry valence");
        }
    }

    #[test]
    fn negators_and_boosters() {
        assert!(is_negator("not"));
        assert!(is_negator("don't"));
        assert!(!is_negator("knot"));
        assert_eq!(booster("very"), Some(1.3));
        assert_eq!(booster("slightly"), Some(0.5));
        assert_eq!(booster("table"), None);
    }
}
