// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use hk_core::EventName;
use tempfile::tempdir;

fn input(session: &str) -> HookInput {
    HookInput { event_name: EventName::Stop, session_id: session.to_string(), ..HookInput::default() }
}

#[tokio::test]
async fn below_interval_is_silent() {
    let dir = tempdir().unwrap();
    let handler = StopReminderHandler::new(dir.path().to_path_buf(), 3, 0);
    let response = handler.handle(&input("s1")).await.unwrap();
    assert!(response.stderr.is_empty());
}

#[tokio::test]
async fn interval_multiple_emits_rotating_reminder() {
    let dir = tempdir().unwrap();
    let handler = StopReminderHandler::new(dir.path().to_path_buf(), 2, 0);
    handler.handle(&input("s1")).await.unwrap();
    let second = handler.handle(&input("s1")).await.unwrap();
    assert_eq!(second.stderr, REMINDERS[0]);

    handler.handle(&input("s1")).await.unwrap();
    let fourth = handler.handle(&input("s1")).await.unwrap();
    assert_eq!(fourth.stderr, REMINDERS[1]);
}

#[tokio::test]
async fn warn_at_threshold_emits_strong_warning_over_reminder() {
    let dir = tempdir().unwrap();
    let handler = StopReminderHandler::new(dir.path().to_path_buf(), 2, 4);
    handler.handle(&input("s1")).await.unwrap();
    handler.handle(&input("s1")).await.unwrap();
    handler.handle(&input("s1")).await.unwrap();
    let fourth = handler.handle(&input("s1")).await.unwrap();
    assert_eq!(fourth.stderr, STRONG_WARNING);
}

#[tokio::test]
async fn sessions_are_counted_independently() {
    let dir = tempdir().unwrap();
    let handler = StopReminderHandler::new(dir.path().to_path_buf(), 2, 0);
    handler.handle(&input("s1")).await.unwrap();
    let other = handler.handle(&input("s2")).await.unwrap();
    assert!(other.stderr.is_empty());
}
