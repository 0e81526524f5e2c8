// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured trace file written when `HK_DEBUG`/`config.debug.enabled` is
//! set (spec §6.6 `<cache>/debug/`): one JSONL file per invocation under
//! `<cache>/debug/<project-hash>/<timestamp>.jsonl`, alongside whatever the
//! `tracing` subscriber already writes to stderr at `debug` level.

use crate::perms;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Stable hash of the project root, used as the trace directory name so
/// traces from different projects never collide or interleave.
pub fn project_hash(root: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(root.to_string_lossy().as_bytes());
    let digest = hasher.finalize();
    digest.iter().take(16).map(|byte| format!("{byte:02x}")).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct TraceEvent<'a> {
    pub timestamp: String,
    pub event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'a serde_json::Value>,
}

/// A trace file for one invocation, opened lazily on the first [`append`].
pub struct DebugTrace {
    path: PathBuf,
}

impl DebugTrace {
    /// `timestamp` should be unique per invocation (the hook's own epoch-ms
    /// clock reading is sufficient; collisions just append to the same
    /// file).
    pub fn new(cache_dir: &Path, project_root: &Path, timestamp: &str) -> Self {
        let dir = cache_dir.join("debug").join(project_hash(project_root));
        Self { path: dir.join(format!("{timestamp}.jsonl")) }
    }

    /// Append one JSON line. Write failures are swallowed: a debug trace
    /// must never fail a hook invocation (spec §7).
    pub fn append(&self, event: &TraceEvent) {
        let Some(dir) = self.path.parent() else { return };
        let _ = perms::ensure_dir(dir);
        let Ok(line) = serde_json::to_string(event) else { return };
        match std::fs::OpenOptions::new().create(true).append(true).open(&self.path) {
            Ok(mut file) => {
                let _ = writeln!(file, "{line}");
                perms::harden_file(&self.path);
            }
            Err(error) => tracing::warn!(path = %self.path.display(), %error, "failed to append debug trace"),
        }
    }
}

#[cfg(test)]
#[path = "debug_trace_tests.rs"]
mod tests;
