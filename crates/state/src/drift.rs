// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-session drift baseline store backing the drift-detection handler
//! (spec §4.3.11).

use crate::perms;
use hk_core::paths::safe_join;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftState {
    pub intent: String,
    pub keywords: Vec<String>,
    pub edits: u32,
}

/// Load the baseline for `session`. Absent file or parse failure is treated
/// as "no prior state" (spec §3.3), not an error.
pub fn load(dir: &Path, session: &str) -> Option<DriftState> {
    let path = safe_join(dir, &format!("drift-{session}.json"));
    let raw = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&raw).ok()
}

/// Overwrite the baseline for `session`.
pub fn store(dir: &Path, session: &str, state: &DriftState) {
    let _ = perms::ensure_dir(dir);
    let path = safe_join(dir, &format!("drift-{session}.json"));
    let Ok(raw) = serde_json::to_string(state) else { return };
    match std::fs::write(&path, raw) {
        Ok(()) => perms::harden_file(&path),
        Err(error) => tracing::warn!(path = %path.display(), %error, "failed to write drift state"),
    }
}

#[cfg(test)]
#[path = "drift_tests.rs"]
mod tests;
