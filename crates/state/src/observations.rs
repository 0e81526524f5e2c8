// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only observation log backing the observe handler (spec §4.3.5).
//!
//! Single-generation rotation only (spec §9): when the active log exceeds
//! the configured size, it is renamed to `observations.jsonl.1` and a fresh
//! file is started. A concurrent append during rotation may land in the old
//! file — acceptable per spec §5.

use crate::perms;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

const LOG_NAME: &str = "observations.jsonl";
const DISABLED_SENTINEL: &str = ".disabled";

#[derive(Debug, Clone, Serialize)]
pub struct Observation<'a> {
    pub timestamp: String,
    pub phase: &'a str,
    #[serde(rename = "toolName")]
    pub tool_name: &'a str,
    #[serde(rename = "toolInput")]
    pub tool_input: Option<&'a serde_json::Value>,
    #[serde(rename = "sessionId")]
    pub session_id: &'a str,
}

/// True when the `.disabled` sentinel file is present in `dir`.
pub fn is_disabled(dir: &Path) -> bool {
    dir.join(DISABLED_SENTINEL).exists()
}

/// Append one JSON line, rotating first if the active log exceeds
/// `max_bytes`. Write failures are swallowed: observation logging must never
/// block a hook (spec §7).
pub fn append(dir: &Path, max_bytes: u64, record: &Observation) {
    let _ = perms::ensure_dir(dir);
    let path = dir.join(LOG_NAME);
    rotate_if_oversized(&path, max_bytes);

    let Ok(line) = serde_json::to_string(record) else { return };
    match std::fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(mut file) => {
            let _ = writeln!(file, "{line}");
            perms::harden_file(&path);
        }
        Err(error) => tracing::warn!(path = %path.display(), %error, "failed to append observation"),
    }
}

fn rotate_if_oversized(path: &Path, max_bytes: u64) {
    let Ok(metadata) = std::fs::metadata(path) else { return };
    if metadata.len() > max_bytes {
        let rotated = path.with_extension("jsonl.1");
        let _ = std::fs::rename(path, rotated);
    }
}

#[cfg(test)]
#[path = "observations_tests.rs"]
mod tests;
