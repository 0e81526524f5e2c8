// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

#[test]
fn finds_cargo_toml_in_same_directory() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("Cargo.toml"), "").unwrap();
    let sub = dir.path().join("src");
    std::fs::create_dir(&sub).unwrap();

    assert_eq!(discover(&sub), dir.path());
}

#[test]
fn ascends_multiple_levels_to_find_marker() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("package.json"), "{}").unwrap();
    let deep = dir.path().join("a").join("b").join("c");
    std::fs::create_dir_all(&deep).unwrap();

    assert_eq!(discover(&deep), dir.path());
}

#[test]
fn falls_back_to_start_when_no_marker_found() {
    let dir = tempdir().unwrap();
    let isolated = dir.path().join("isolated");
    std::fs::create_dir(&isolated).unwrap();

    assert_eq!(discover(&isolated), isolated);
}

#[test]
fn vcs_directory_counts_as_marker() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    let sub = dir.path().join("src");
    std::fs::create_dir(&sub).unwrap();

    assert_eq!(discover(&sub), dir.path());
}
