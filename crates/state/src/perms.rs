// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-only permission mask helpers (spec §3.3 invariant: "All writes use
//! the user-only permission mask for regular files and group-excluded for
//! directories"). No-ops on non-Unix targets.

use std::path::Path;

#[cfg(unix)]
pub fn harden_file(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Ok(metadata) = std::fs::metadata(path) {
        let mut perms = metadata.permissions();
        perms.set_mode(0o600);
        let _ = std::fs::set_permissions(path, perms);
    }
}

#[cfg(not(unix))]
pub fn harden_file(_path: &Path) {}

#[cfg(unix)]
pub fn harden_dir(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Ok(metadata) = std::fs::metadata(path) {
        let mut perms = metadata.permissions();
        perms.set_mode(0o700);
        let _ = std::fs::set_permissions(path, perms);
    }
}

#[cfg(not(unix))]
pub fn harden_dir(_path: &Path) {}

/// Create `dir` (and ancestors) then apply the group-excluded directory
/// mask. Best-effort: an error here is swallowed by callers per spec §7
/// ("never block the host due to an internal defect").
pub fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    harden_dir(dir);
    Ok(())
}
