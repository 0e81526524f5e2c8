// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session record store backing session context (spec §4.3.3) and session
//! end (spec §4.3.13).

use crate::perms;
use hk_core::paths::safe_join;
use serde::{Deserialize, Serialize};
use std::path::Path;

const SUBDIR: &str = "sessions";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub version: String,
    pub id: String,
    pub date: String,
    pub started: String,
    pub ended: String,
    pub title: String,
    pub summary: String,
    #[serde(rename = "toolsUsed")]
    pub tools_used: Vec<String>,
    #[serde(rename = "filesModified")]
    pub files_modified: Vec<String>,
    #[serde(rename = "messageCount")]
    pub message_count: u64,
}

/// Persist a record at `<home>/sessions/<date>-<id>.json`. Write failures
/// are swallowed: the record is advisory, not load-bearing.
pub fn store(home: &Path, record: &SessionRecord) {
    let dir = home.join(SUBDIR);
    let _ = perms::ensure_dir(&dir);
    let filename = format!("{}-{}.json", record.date, record.id);
    let path = safe_join(&dir, &filename);
    let Ok(raw) = serde_json::to_string_pretty(record) else { return };
    match std::fs::write(&path, raw) {
        Ok(()) => perms::harden_file(&path),
        Err(error) => tracing::warn!(path = %path.display(), %error, "failed to write session record"),
    }
}

/// Return the most recently started session record, ordered lexicographically
/// by `<date>-<id>` filename (spec §4.3.3). Absent directory or no entries
/// yields `None`; individually corrupt files are skipped.
pub fn find_latest(home: &Path) -> Option<SessionRecord> {
    let dir = home.join(SUBDIR);
    let mut names: Vec<String> = std::fs::read_dir(&dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(".json"))
        .collect();
    names.sort();
    let latest = names.pop()?;
    let raw = std::fs::read_to_string(dir.join(latest)).ok()?;
    serde_json::from_str(&raw).ok()
}

#[cfg(test)]
#[path = "session_record_tests.rs"]
mod tests;
