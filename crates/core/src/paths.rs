// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Platform-convention cache/config/home root resolution (spec §6.5, §6.6).
//!
//! Follows the `XDG_STATE_HOME`/`HOME` fallback chain convention,
//! generalized to the three roots this workspace needs.

use std::path::PathBuf;

/// `<cache>` root: `HK_CACHE_DIR` > `XDG_CACHE_HOME/hk` > `~/.cache/hk`.
pub fn cache_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("HK_CACHE_DIR") {
        return Some(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
        return Some(PathBuf::from(xdg).join("hk"));
    }
    dirs::home_dir().map(|home| home.join(".cache").join("hk"))
}

/// `<config>` root: `HK_CONFIG_DIR` > `XDG_CONFIG_HOME/hk` > `~/.config/hk`.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("HK_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg).join("hk"));
    }
    dirs::home_dir().map(|home| home.join(".config").join("hk"))
}

/// `<home>` root: `HK_HOME_DIR` > `~/.hk`.
pub fn home_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("HK_HOME_DIR") {
        return Some(PathBuf::from(dir));
    }
    dirs::home_dir().map(|home| home.join(".hk"))
}

/// Reject path-traversal components (`..`, leading `/`, embedded separators)
/// in an untrusted identifier before it is joined onto a state-store
/// directory (spec §7 "Security validation"). Returns `None` when the
/// identifier is unsafe to join.
pub fn sanitize_path_component(raw: &str) -> Option<&str> {
    if raw.is_empty() || raw == "." || raw == ".." {
        return None;
    }
    if raw.contains('/') || raw.contains('\\') || raw.contains('\0') {
        return None;
    }
    Some(raw)
}

/// Join `component` onto `base` after sanitizing it. Falls back to a fixed
/// `"unknown"` file stem when the component is unsafe, so a hostile session
/// id can never escape the intended directory — it just collides with other
/// hostile ids, which is an acceptable advisory-counter tradeoff (spec §3.4).
pub fn safe_join(base: &std::path::Path, component: &str) -> PathBuf {
    match sanitize_path_component(component) {
        Some(safe) => base.join(safe),
        None => base.join("unknown"),
    }
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
