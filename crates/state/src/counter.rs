// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decimal counter files backing the compaction-suggestion (spec §4.3.4) and
//! stop-reminder (spec §4.3.12) handlers.
//!
//! Invariant (spec §3.3): a counter file contains only a decimal integer
//! `>= 0` after any successful write. Parse failure is treated as zero, and
//! the next write restores a well-formed value. Races between concurrent
//! invocations may lose increments — the counter is advisory, only
//! monotonicity-over-time is promised (spec §5).

use crate::perms;
use hk_core::paths::safe_join;
use std::path::Path;

/// Read the counter at `dir/<session>.count` (or `dir/<prefix><session>.count`
/// when `prefix` is non-empty), increment it, write it back, and return the
/// new value. `session` is sanitized via [`safe_join`] before any filesystem
/// access (spec §7 "Security validation").
pub fn increment(dir: &Path, prefix: &str, session: &str) -> u64 {
    let _ = perms::ensure_dir(dir);
    let path = safe_join(dir, &format!("{prefix}{session}.count"));
    let current = read(&path);
    let next = current.saturating_add(1);
    write(&path, next);
    next
}

fn read(path: &Path) -> u64 {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

fn write(path: &Path, value: u64) {
    match std::fs::write(path, value.to_string()) {
        Ok(()) => perms::harden_file(path),
        Err(error) => tracing::warn!(path = %path.display(), %error, "failed to write counter"),
    }
}

#[cfg(test)]
#[path = "counter_tests.rs"]
mod tests;
