// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cooldown lock (spec §4.4 "Cooldown lock"): an advisory per-project file
//! that elides redundant back-to-back validation runs.

use sha2::{Digest, Sha256};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Stable hash of the absolute project root, used as the cooldown filename.
pub fn project_hash(root: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(root.to_string_lossy().as_bytes());
    let digest = hasher.finalize();
    digest.iter().take(16).map(|byte| format!("{byte:02x}")).collect()
}

fn lock_path(tmp: &Path, root: &Path) -> PathBuf {
    tmp.join(format!("{}.cooldown", project_hash(root)))
}

/// Outcome of attempting to acquire the cooldown lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquired {
    /// No recent run recorded (or the file was stale); proceed.
    Fresh,
    /// A run completed within the cooldown window; skip silently.
    StillCooling,
}

/// Attempt to acquire the lock for `root`. `now_epoch_s` is the caller's
/// current time; `cooldown_seconds` is `config.validate.cooldown`.
///
/// Tries an exclusive create first (spec §4.4: "Exclusive-create the
/// file; on success, write a monotonic timestamp and proceed"). If the file
/// already exists, falls back to reading its timestamp to decide whether
/// the cooldown window has elapsed.
///
/// On [`Acquired::Fresh`], the lock file has already been written with
/// `now_epoch_s` as a placeholder start timestamp — callers must still call
/// [`complete`] once the run finishes to record the completion timestamp.
pub fn acquire(tmp: &Path, root: &Path, now_epoch_s: u64, cooldown_seconds: u64) -> Acquired {
    let path = lock_path(tmp, root);

    match std::fs::OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(mut file) => {
            let _ = write!(file, "{now_epoch_s}");
            return Acquired::Fresh;
        }
        Err(error) if error.kind() == std::io::ErrorKind::AlreadyExists => {}
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "failed to create cooldown lock");
            return Acquired::Fresh;
        }
    }

    if let Ok(raw) = std::fs::read_to_string(&path) {
        if let Ok(previous) = raw.trim().parse::<u64>() {
            if now_epoch_s.saturating_sub(previous) < cooldown_seconds {
                return Acquired::StillCooling;
            }
        }
    }

    write_timestamp(&path, now_epoch_s);
    Acquired::Fresh
}

/// Overwrite the lock file with the completion timestamp (spec §4.4: "After
/// completing the run, overwrite with the completion timestamp").
pub fn complete(tmp: &Path, root: &Path, now_epoch_s: u64) {
    write_timestamp(&lock_path(tmp, root), now_epoch_s);
}

fn write_timestamp(path: &Path, epoch_s: u64) {
    match std::fs::File::create(path) {
        Ok(mut file) => {
            let _ = write!(file, "{epoch_s}");
        }
        Err(error) => tracing::warn!(path = %path.display(), %error, "failed to write cooldown lock"),
    }
}

#[cfg(test)]
#[path = "cooldown_tests.rs"]
mod tests;
