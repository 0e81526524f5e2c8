// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword extraction shared by drift detection (spec §4.3.11, §4.8).

use std::collections::BTreeSet;

/// Standard small English stop-word list (spec §4.8 / §9 Open Question).
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "below", "between", "both", "but", "by", "can",
    "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "would", "you", "your", "yours", "yourself", "yourselves",
];

/// Lowercase, strip punctuation, split on whitespace, drop stop words,
/// dedupe. An input with no surviving terms yields an empty set.
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|word| !word.is_empty() && !STOP_WORDS.contains(&word.as_str()))
        .collect()
}

/// Overlap ratio between two keyword sets: `|intersection| / |union|`.
/// An empty union yields `1.0` (no divergence can be measured).
pub fn overlap_ratio(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union: BTreeSet<&String> = a.union(b).collect();
    if union.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union.len() as f64
}

/// First sentence of `text`, terminated by `.`, `!`, `?`, or newline.
/// If none of those appear, the whole (trimmed) text is the "sentence".
pub fn first_sentence(text: &str) -> String {
    let end = text
        .find(['.', '!', '?', '\n'])
        .map(|idx| idx)
        .unwrap_or(text.len());
    text[..end].trim().to_string()
}

/// Recognized pivot phrases that signal an intentional topic change
/// (spec §4.3.11, Glossary "Pivot phrase").
pub const PIVOT_PHRASES: &[&str] =
    &["now let's", "switch to", "next", "actually", "instead"];

/// Does `prompt` begin with a recognized pivot phrase (case-insensitive)?
pub fn starts_with_pivot_phrase(prompt: &str) -> bool {
    let lower = prompt.trim_start().to_lowercase();
    PIVOT_PHRASES.iter().any(|phrase| lower.starts_with(phrase))
}

#[cfg(test)]
#[path = "keywords_tests.rs"]
mod tests;
