// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn extract_keywords_strips_stop_words_and_punctuation() {
    let keywords = extract_keywords("Refactor the Authentication module, please!");
    assert!(keywords.contains("refactor"));
    assert!(keywords.contains("authentication"));
    assert!(keywords.contains("module"));
    assert!(!keywords.contains("the"));
    assert!(!keywords.contains("please"));
}

#[test]
fn extract_keywords_dedupes() {
    let keywords = extract_keywords("test test TEST");
    assert_eq!(keywords.len(), 1);
}

#[test]
fn extract_keywords_of_only_stop_words_is_empty() {
    let keywords = extract_keywords("the a an");
    assert!(keywords.is_empty());
}

#[test]
fn overlap_ratio_identical_sets_is_one() {
    let a = extract_keywords("database migration scripts");
    let b = extract_keywords("database migration scripts");
    assert_eq!(overlap_ratio(&a, &b), 1.0);
}

#[test]
fn overlap_ratio_disjoint_sets_is_zero() {
    let a = extract_keywords("authentication module refactor");
    let b = extract_keywords("database migration scripts postgres");
    assert_eq!(overlap_ratio(&a, &b), 0.0);
}

#[test]
fn overlap_ratio_empty_union_is_one() {
    let a = extract_keywords("the a an");
    let b = extract_keywords("the a an");
    assert_eq!(overlap_ratio(&a, &b), 1.0);
}

#[test]
fn first_sentence_stops_at_terminator() {
    assert_eq!(first_sentence("Refactor auth. Then update tests."), "Refactor auth");
}

#[test]
fn first_sentence_falls_back_to_whole_text() {
    assert_eq!(first_sentence("keep going"), "keep going");
}

#[test]
fn recognizes_pivot_phrases_case_insensitively() {
    assert!(starts_with_pivot_phrase("Switch to database work"));
    assert!(starts_with_pivot_phrase("actually let's do something else"));
    assert!(!starts_with_pivot_phrase("continue the refactor"));
}
