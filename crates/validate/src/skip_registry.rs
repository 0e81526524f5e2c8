// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filter rules (spec §4.4 "Filters"): built-in path/filename patterns plus
//! the user skip registry read from `<config>/skip.json` (spec §4.7).

use serde::Deserialize;
use std::path::{Path, PathBuf};

const BUILTIN_PATH_SEGMENTS: &[&str] =
    &["/vendor/", "/node_modules/", "/build/", "/.git/", "/dist/", "/__pycache__/", "/.cache/", "/target/", "/.next/"];

const BUILTIN_FILENAME_SUFFIXES: &[&str] = &[
    "_test", ".test", ".spec", ".generated", ".pb", ".gen", "_gen",
];

/// Does `file` match a built-in skip pattern (spec §4.4 item 2)?
///
/// Filename suffixes are checked against the stem before the final
/// extension: `foo_test.rs` matches `_test`, `foo.test.ts` matches `.test`.
pub fn matches_builtin(file: &Path) -> bool {
    let display = file.to_string_lossy().replace('\\', "/");
    if BUILTIN_PATH_SEGMENTS.iter().any(|segment| display.contains(segment)) {
        return true;
    }
    let Some(file_name) = file.file_name().and_then(|n| n.to_str()) else { return false };
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => file_name,
    };
    BUILTIN_FILENAME_SUFFIXES.iter().any(|suffix| stem.ends_with(suffix))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawSkipRegistry {
    lint: Vec<String>,
    test: Vec<String>,
    all: Vec<String>,
}

/// User-maintained directory-level suppression rules (spec §4.7).
#[derive(Debug, Clone, Default)]
pub struct SkipRegistry {
    lint: Vec<String>,
    test: Vec<String>,
    all: Vec<String>,
}

impl SkipRegistry {
    /// Load `<config>/skip.json`. Missing or malformed file yields an empty
    /// registry (spec §4.7: "no suppression").
    pub fn load(config_dir: Option<&Path>) -> Self {
        let Some(config_dir) = config_dir else { return Self::default() };
        let Ok(raw) = std::fs::read_to_string(config_dir.join("skip.json")) else {
            return Self::default();
        };
        let Ok(parsed) = serde_json::from_str::<RawSkipRegistry>(&raw) else {
            return Self::default();
        };
        Self { lint: parsed.lint, test: parsed.test, all: parsed.all }
    }

    fn dir_matches(rules: &[String], dir: &Path) -> bool {
        let display = dir.to_string_lossy();
        rules.iter().any(|rule| display.contains(rule.as_str()))
    }

    pub fn skips_lint(&self, dir: &Path) -> bool {
        Self::dir_matches(&self.all, dir) || Self::dir_matches(&self.lint, dir)
    }

    pub fn skips_test(&self, dir: &Path) -> bool {
        Self::dir_matches(&self.all, dir) || Self::dir_matches(&self.test, dir)
    }
}

/// Directory to compare against the user skip registry for `file`.
pub fn containing_dir(file: &Path) -> PathBuf {
    file.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
#[path = "skip_registry_tests.rs"]
mod tests;
