//! Word frequency counting
//!
//! Pure functions that normalize free text into tokens and rank them by
//! occurrence. The ranking is a total order: descending count, then ascending
//! token, so two runs over the same text always produce the same list.

use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// A token together with the number of times it appeared
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Matches every run of characters that can't be part of a token.
fn strip_regex() -> &'static Regex {
    static STRIP: OnceLock<Regex> = OnceLock::new();
    STRIP.get_or_init(|| Regex::new(r"[^a-z0-9\t\n\x0C\r ]+").expect("static regex is valid"))
}

/// Split text into normalized tokens
///
/// Lowercases the text, removes everything that is not a lowercase letter,
/// a digit or ASCII whitespace (space, tab, newline, form feed, carriage
/// return), and splits on whitespace runs. Punctuation inside a word is dropped
/// rather than treated as a separator, so `don't` becomes `dont`; the same goes
/// for vertical tabs and non-ASCII spaces such as U+00A0.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = strip_regex().replace_all(&lowered, "");

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Sort a frequency table into its display order
pub fn rank(table: HashMap<String, usize>) -> Vec<WordCount> {
    let mut ranked: Vec<WordCount> = table
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

    ranked
}

/// Tokenize text, count every token and return the ranked table
pub fn count_words(text: &str) -> Vec<WordCount> {
    let mut table: HashMap<String, usize> = HashMap::new();

    for token in tokenize(text) {
        *table.entry(token).or_insert(0) += 1;
    }

    rank(table)
}
