// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project root discovery (spec §4.4 "Project root discovery"): ascend from
//! the edited file's directory looking for a marker file.

use std::path::{Path, PathBuf};

const MARKER_FILES: &[&str] =
    &["go.mod", "package.json", "Cargo.toml", "pyproject.toml", "setup.py", "Makefile", "Taskfile.yml"];

const VCS_DIRS: &[&str] = &[".git", ".hg", ".svn", ".jj"];
const JUSTFILE_NAMES: &[&str] = &["justfile", "Justfile"];

fn has_marker(dir: &Path) -> bool {
    if VCS_DIRS.iter().any(|name| dir.join(name).exists()) {
        return true;
    }
    if JUSTFILE_NAMES.iter().any(|name| dir.join(name).is_file()) {
        return true;
    }
    MARKER_FILES.iter().any(|name| dir.join(name).is_file())
}

/// Ascend from `start` until a marker file is found. Falls back to `start`
/// itself when no ancestor carries one (spec §4.4).
pub fn discover(start: &Path) -> PathBuf {
    let mut current = start;
    loop {
        if has_marker(current) {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return start.to_path_buf(),
        }
    }
}

#[cfg(test)]
#[path = "project_root_tests.rs"]
mod tests;
