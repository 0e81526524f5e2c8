// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only configuration snapshot consumed by handlers and the validation
//! pipeline (spec §4.5). Persistence and CLI editing of this data live in a
//! sibling subsystem; this module only defines the shape handlers consume
//! and a best-effort loader so the workspace is runnable end to end.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidateConfig {
    pub timeout_seconds: u64,
    pub cooldown_seconds: u64,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self { timeout_seconds: 60, cooldown_seconds: 30 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompactConfig {
    pub threshold: u32,
    pub reminder_interval: u32,
}

impl Default for CompactConfig {
    fn default() -> Self {
        Self { threshold: 0, reminder_interval: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuietHoursConfig {
    pub enabled: bool,
    pub start: String,
    pub end: String,
}

impl Default for QuietHoursConfig {
    fn default() -> Self {
        Self { enabled: false, start: "21:00".to_string(), end: "07:30".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AudioConfig {
    pub enabled: bool,
    pub directory: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct NotifyConfig {
    pub quiet_hours: QuietHoursConfig,
    pub audio: AudioConfig,
    pub desktop: DesktopConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationsConfig {
    pub push_topic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObserveConfig {
    pub enabled: bool,
    pub max_file_size_mb: u64,
}

impl Default for ObserveConfig {
    fn default() -> Self {
        Self { enabled: true, max_file_size_mb: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LearningConfig {
    pub min_session_length: u32,
    pub learned_skills_path: Option<String>,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self { min_session_length: 10, learned_skills_path: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreCommitConfig {
    pub enabled: bool,
    pub command: String,
}

impl Default for PreCommitConfig {
    fn default() -> Self {
        Self { enabled: true, command: "make precommit".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DriftConfig {
    pub enabled: bool,
    pub min_edits: u32,
    pub threshold: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self { enabled: true, min_edits: 2, threshold: 0.2 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StopReminderConfig {
    pub enabled: bool,
    pub interval: u32,
    pub warn_at: u32,
}

impl Default for StopReminderConfig {
    fn default() -> Self {
        Self { enabled: true, interval: 5, warn_at: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PackageManagerConfig {
    pub preferred: Option<String>,
}

/// Read-only configuration snapshot consumed by handlers (spec §4.5).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub validate: ValidateConfig,
    pub compact: CompactConfig,
    pub notify: NotifyConfig,
    pub notifications: NotificationsConfig,
    pub observe: ObserveConfig,
    pub learning: LearningConfig,
    pub pre_commit: PreCommitConfig,
    pub drift: DriftConfig,
    pub stop_reminder: StopReminderConfig,
    pub package_manager: PackageManagerConfig,
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct DebugConfig {
    pub enabled: bool,
}

impl Config {
    /// Load defaults, merge project then user config files (tolerating any
    /// parse failure as "absent"), then apply environment overrides.
    /// Config corruption never fails a hook invocation — it falls back to
    /// the prior layer's value.
    pub fn load(cwd: &Path) -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::fs::read_to_string(cwd.join(".hk").join("config.json")) {
            config.merge_json(&raw);
        }
        if let Some(config_dir) = crate::paths::config_dir() {
            if let Ok(raw) = std::fs::read_to_string(config_dir.join("config.json")) {
                config.merge_json(&raw);
            }
        }
        config.apply_env();
        config
    }

    /// Deep-merge `raw` onto the current snapshot field by field, so a file
    /// that sets only one option (e.g. `{"validate": {"timeoutSeconds": 5}}`)
    /// composes with whatever an earlier layer already set elsewhere, rather
    /// than resetting every other field to its `#[serde(default)]` value.
    fn merge_json(&mut self, raw: &str) {
        let Ok(incoming) = serde_json::from_str::<serde_json::Value>(raw) else { return };
        let Ok(mut current) = serde_json::to_value(&*self) else { return };
        deep_merge(&mut current, incoming);
        if let Ok(merged) = serde_json::from_value::<Config>(current) {
            *self = merged;
        }
    }

    fn apply_env(&mut self) {
        env_u64("VALIDATE_TIMEOUT_SECONDS", &mut self.validate.timeout_seconds);
        env_u64("VALIDATE_COOLDOWN_SECONDS", &mut self.validate.cooldown_seconds);
        env_u32("COMPACT_THRESHOLD", &mut self.compact.threshold);
        env_u32("COMPACT_REMINDER_INTERVAL", &mut self.compact.reminder_interval);
        env_bool("NOTIFY_QUIET_HOURS_ENABLED", &mut self.notify.quiet_hours.enabled);
        env_string("NOTIFY_QUIET_HOURS_START", &mut self.notify.quiet_hours.start);
        env_string("NOTIFY_QUIET_HOURS_END", &mut self.notify.quiet_hours.end);
        env_bool("NOTIFY_AUDIO_ENABLED", &mut self.notify.audio.enabled);
        if let Ok(dir) = std::env::var("NOTIFY_AUDIO_DIRECTORY") {
            self.notify.audio.directory = Some(dir);
        }
        env_bool("NOTIFY_DESKTOP_ENABLED", &mut self.notify.desktop.enabled);
        if let Ok(topic) = std::env::var("NOTIFICATIONS_PUSH_TOPIC") {
            self.notifications.push_topic = Some(topic);
        }
        env_bool("OBSERVE_ENABLED", &mut self.observe.enabled);
        env_u64("OBSERVE_MAX_FILE_SIZE_MB", &mut self.observe.max_file_size_mb);
        env_u32("LEARNING_MIN_SESSION_LENGTH", &mut self.learning.min_session_length);
        env_bool("PRE_COMMIT_ENABLED", &mut self.pre_commit.enabled);
        env_string("PRE_COMMIT_COMMAND", &mut self.pre_commit.command);
        env_bool("DRIFT_ENABLED", &mut self.drift.enabled);
        env_u32("DRIFT_MIN_EDITS", &mut self.drift.min_edits);
        env_f64("DRIFT_THRESHOLD", &mut self.drift.threshold);
        env_bool("STOP_REMINDER_ENABLED", &mut self.stop_reminder.enabled);
        env_u32("STOP_REMINDER_INTERVAL", &mut self.stop_reminder.interval);
        env_u32("STOP_REMINDER_WARN_AT", &mut self.stop_reminder.warn_at);
        if let Ok(pm) = std::env::var("PACKAGE_MANAGER_PREFERRED") {
            self.package_manager.preferred = Some(pm);
        }
        env_bool("HK_DEBUG", &mut self.debug.enabled);
    }
}

/// Recursively merge `incoming` onto `base`: objects merge key by key,
/// everything else (scalars, arrays, `null`) is replaced wholesale.
fn deep_merge(base: &mut serde_json::Value, incoming: serde_json::Value) {
    match incoming {
        serde_json::Value::Object(incoming_map) => {
            if let serde_json::Value::Object(base_map) = base {
                for (key, value) in incoming_map {
                    deep_merge(base_map.entry(key).or_insert(serde_json::Value::Null), value);
                }
            } else {
                *base = serde_json::Value::Object(incoming_map);
            }
        }
        other => *base = other,
    }
}

fn env_u64(key: &str, field: &mut u64) {
    if let Ok(val) = std::env::var(key).unwrap_or_default().parse() {
        *field = val;
    }
}

fn env_u32(key: &str, field: &mut u32) {
    if let Ok(val) = std::env::var(key).unwrap_or_default().parse() {
        *field = val;
    }
}

fn env_f64(key: &str, field: &mut f64) {
    if let Ok(val) = std::env::var(key).unwrap_or_default().parse() {
        *field = val;
    }
}

fn env_bool(key: &str, field: &mut bool) {
    match std::env::var(key).as_deref() {
        Ok("1") | Ok("true") => *field = true,
        Ok("0") | Ok("false") => *field = false,
        _ => {}
    }
}

fn env_string(key: &str, field: &mut String) {
    if let Ok(val) = std::env::var(key) {
        if !val.is_empty() {
            *field = val;
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
