// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
fn defaults_are_populated() {
    let config = Config::default();
    assert_eq!(config.validate.timeout_seconds, 60);
    assert_eq!(config.drift.min_edits, 2);
    assert!(config.observe.enabled);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let mut config = Config::default();
    config.merge_json(r#"{"compact": {"threshold": 3, "reminderInterval": 2}}"#);
    assert_eq!(config.compact.threshold, 3);
    assert_eq!(config.compact.reminder_interval, 2);
}

#[test]
fn successive_layers_compose_instead_of_replacing() {
    let mut config = Config::default();
    config.merge_json(r#"{"compact": {"threshold": 3}}"#);
    config.merge_json(r#"{"notify": {"audio": {"enabled": false}}}"#);
    // The second layer only mentions `notify.audio`; the first layer's
    // `compact.threshold` must still be set, not reset to its default.
    assert_eq!(config.compact.threshold, 3);
    assert!(!config.notify.audio.enabled);
}

#[test]
fn same_object_later_field_does_not_stomp_sibling_field() {
    let mut config = Config::default();
    config.merge_json(r#"{"notify": {"quietHours": {"start": "22:00"}}}"#);
    config.merge_json(r#"{"notify": {"quietHours": {"end": "06:00"}}}"#);
    assert_eq!(config.notify.quiet_hours.start, "22:00");
    assert_eq!(config.notify.quiet_hours.end, "06:00");
}

#[test]
fn malformed_json_is_ignored() {
    let mut config = Config::default();
    let before = config.clone();
    config.merge_json("{not json");
    assert_eq!(config, before);
}

#[test]
#[serial]
fn env_override_wins_over_defaults() {
    std::env::set_var("COMPACT_THRESHOLD", "7");
    let mut config = Config::default();
    config.apply_env();
    std::env::remove_var("COMPACT_THRESHOLD");
    assert_eq!(config.compact.threshold, 7);
}

#[test]
#[serial]
fn malformed_env_value_leaves_prior_value() {
    std::env::set_var("COMPACT_THRESHOLD", "not-a-number");
    let mut config = Config::default();
    config.apply_env();
    std::env::remove_var("COMPACT_THRESHOLD");
    assert_eq!(config.compact.threshold, 0);
}

#[test]
#[serial]
fn bool_env_accepts_0_and_1() {
    std::env::set_var("DRIFT_ENABLED", "0");
    let mut config = Config::default();
    config.apply_env();
    assert!(!config.drift.enabled);

    std::env::set_var("DRIFT_ENABLED", "1");
    config.apply_env();
    std::env::remove_var("DRIFT_ENABLED");
    assert!(config.drift.enabled);
}
