// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Global compaction audit trail (spec §4.3.7). A single append-only file
//! shared across all sessions, unlike the per-session stores elsewhere in
//! this crate.

use crate::perms;
use hk_core::{timestamp, Clock};
use std::io::Write;
use std::path::Path;

const LOG_NAME: &str = "compaction-log.txt";

/// Append a `[YYYY-MM-DD HH:MM:SS] compaction <reason>` line. Write
/// failures are swallowed: this is an audit trail, not load-bearing state.
pub fn record(dir: &Path, clock: &impl Clock, reason: &str) {
    let _ = perms::ensure_dir(dir);
    let path = dir.join(LOG_NAME);
    let line = format!("[{}] compaction {reason}", timestamp::format_space_separated(clock.epoch_ms()));
    match std::fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(mut file) => {
            let _ = writeln!(file, "{line}");
            perms::harden_file(&path);
        }
        Err(error) => tracing::warn!(path = %path.display(), %error, "failed to append compaction log"),
    }
}

#[cfg(test)]
#[path = "compaction_log_tests.rs"]
mod tests;
