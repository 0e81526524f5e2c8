// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

#[test]
fn load_absent_file_is_none() {
    let dir = tempdir().unwrap();
    assert_eq!(load(dir.path(), "sess"), None);
}

#[test]
fn load_corrupt_file_is_none() {
    let dir = tempdir().unwrap();
    std::fs::create_dir_all(dir.path()).unwrap();
    std::fs::write(dir.path().join("drift-sess.json"), "not json").unwrap();
    assert_eq!(load(dir.path(), "sess"), None);
}

#[test]
fn store_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let state = DriftState {
        intent: "refactor auth".to_string(),
        keywords: vec!["refactor".to_string(), "auth".to_string()],
        edits: 3,
    };
    store(dir.path(), "sess", &state);
    assert_eq!(load(dir.path(), "sess"), Some(state));
}

#[test]
fn store_overwrites_prior_state() {
    let dir = tempdir().unwrap();
    let first = DriftState { intent: "a".to_string(), keywords: vec![], edits: 0 };
    let second = DriftState { intent: "b".to_string(), keywords: vec![], edits: 1 };
    store(dir.path(), "sess", &first);
    store(dir.path(), "sess", &second);
    assert_eq!(load(dir.path(), "sess"), Some(second));
}
