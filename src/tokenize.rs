//! Sentence segmentation and word tokenization.
//!
//! Both functions are total: empty or whitespace-only input yields an
//! empty vector, never an error.

/// Lowercased tokens that end in a period without ending a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc", "ltd",
    "co", "no", "fig", "al", "dept", "approx", "min", "max", "a.m", "p.m", "u.s", "u.k",
];

/// Splits raw text into trimmed, non-empty sentences.
///
/// Boundaries are `.`, `!` and `?` (runs like `?!` or `...` count once)
/// plus hard line breaks. A period does not end a sentence when it closes
/// a known abbreviation (`Dr.`, `e.g.`), a single-letter initial, or sits
/// between digits (`3.14`).
///
/// # Example
/// ```
/// use sentiment_analysis::tokenize::split_sentences;
/// let s = split_sentences("Dr. Smith left. Mr. Jones stayed!");
/// assert_eq!(s, vec!["Dr. Smith left.", "Mr. Jones stayed!"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\n' {
            flush(&mut current, &mut sentences);
            i += 1;
            continue;
        }

        current.push(c);

        if c == '!' || c == '?' || (c == '.' && period_ends_sentence(&chars, i, &current)) {
            // swallow the rest of a terminator run ("?!", "...")
            while i + 1 < chars.len() && matches!(chars[i + 1], '.' | '!' | '?') {
                i += 1;
                current.push(chars[i]);
            }
            flush(&mut current, &mut sentences);
        }

        i += 1;
    }
    flush(&mut current, &mut sentences);
    sentences
}

fn flush(current: &mut String, sentences: &mut Vec<String>) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

/// Boundary test for a period at `chars[i]`; `current` holds the sentence
/// built so far, ending in that period.
fn period_ends_sentence(chars: &[char], i: usize, current: &str) -> bool {
    // decimal number: digit on both sides
    let prev_digit = i > 0 && chars[i - 1].is_ascii_digit();
    let next_digit = i + 1 < chars.len() && chars[i + 1].is_ascii_digit();
    if prev_digit && next_digit {
        return false;
    }

    // last word before the period, without the period itself
    let body = &current[..current.len() - 1];
    let last_word = body
        .rsplit(|c: char| c.is_whitespace())
        .next()
        .unwrap_or("");
    let last_word = last_word.trim_matches(|c: char| !c.is_alphanumeric() && c != '.');

    // single-letter initial ("J. Smith")
    if last_word.len() == 1 && last_word.chars().all(|c| c.is_alphabetic()) {
        return false;
    }

    let lower = last_word.to_lowercase();
    let lower = lower.trim_end_matches('.');
    !ABBREVIATIONS.contains(&lower)
}

/// Splits text into word tokens.
///
/// Tokens are whitespace-separated with punctuation stripped from both
/// edges; interior apostrophes and hyphens survive (`don't`,
/// `well-known`). Case is preserved.
///
/// # Example
/// ```
/// use sentiment_analysis::tokenize::split_words;
/// let w = split_words("Don't stop -- it's (really) Good!");
/// assert_eq!(w, vec!["Don't", "stop", "it's", "really", "Good"]);
/// ```
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
