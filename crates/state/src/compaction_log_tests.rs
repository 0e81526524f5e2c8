// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use hk_core::FakeClock;
use tempfile::tempdir;

#[test]
fn record_appends_one_line_with_reason() {
    let dir = tempdir().unwrap();
    let clock = FakeClock::new();
    clock.set_epoch_ms(1_753_833_600_000); // 2025-07-30T00:00:00Z
    record(dir.path(), &clock, "triggered");

    let contents = std::fs::read_to_string(dir.path().join("compaction-log.txt")).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("compaction triggered"));
    assert!(contents.starts_with("[2025-07-30"));
}

#[test]
fn record_appends_across_calls() {
    let dir = tempdir().unwrap();
    let clock = FakeClock::new();
    record(dir.path(), &clock, "triggered");
    record(dir.path(), &clock, "reminder");

    let contents = std::fs::read_to_string(dir.path().join("compaction-log.txt")).unwrap();
    assert_eq!(contents.lines().count(), 2);
}

