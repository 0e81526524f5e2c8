// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use hk_core::EventName;
use tempfile::tempdir;

fn input(session: &str, prompt: &str) -> HookInput {
    HookInput {
        event_name: EventName::UserPromptSubmit,
        session_id: session.to_string(),
        prompt: Some(prompt.to_string()),
        ..HookInput::default()
    }
}

#[tokio::test]
async fn first_prompt_sets_baseline_without_warning() {
    let dir = tempdir().unwrap();
    let handler = DriftHandler::new(dir.path().to_path_buf(), 2, 0.5);
    let response = handler.handle(&input("s1", "Implement the login flow for the app.")).await.unwrap();
    assert!(response.stderr.is_empty());

    let state = drift::load(dir.path(), "s1").unwrap();
    assert_eq!(state.intent, "Implement the login flow for the app");
    assert_eq!(state.edits, 0);
}

#[tokio::test]
async fn edits_below_min_never_warn() {
    let dir = tempdir().unwrap();
    let handler = DriftHandler::new(dir.path().to_path_buf(), 3, 0.5);
    handler.handle(&input("s1", "Implement the login flow.")).await.unwrap();
    let response = handler.handle(&input("s1", "Completely unrelated database migration work.")).await.unwrap();
    assert!(response.stderr.is_empty());
}

#[tokio::test]
async fn low_overlap_past_min_edits_warns() {
    let dir = tempdir().unwrap();
    let handler = DriftHandler::new(dir.path().to_path_buf(), 1, 0.5);
    handler.handle(&input("s1", "Implement the login flow for the app.")).await.unwrap();
    let response = handler.handle(&input("s1", "Completely unrelated database migration work today.")).await.unwrap();
    assert!(response.stderr.starts_with("Possible drift detected"));
}

#[tokio::test]
async fn high_overlap_past_min_edits_does_not_warn() {
    let dir = tempdir().unwrap();
    let handler = DriftHandler::new(dir.path().to_path_buf(), 1, 0.5);
    handler.handle(&input("s1", "Implement the login flow for the app.")).await.unwrap();
    let response = handler.handle(&input("s1", "Continue implementing the login flow for the app.")).await.unwrap();
    assert!(response.stderr.is_empty());
}

#[tokio::test]
async fn pivot_phrase_resets_baseline_and_zeroes_edits() {
    let dir = tempdir().unwrap();
    let handler = DriftHandler::new(dir.path().to_path_buf(), 1, 0.5);
    handler.handle(&input("s1", "Implement the login flow for the app.")).await.unwrap();
    handler.handle(&input("s1", "Completely unrelated database migration work.")).await.unwrap();
    let response = handler.handle(&input("s1", "Actually, let's switch to the billing module instead.")).await.unwrap();
    assert!(response.stderr.is_empty());

    let state = drift::load(dir.path(), "s1").unwrap();
    assert_eq!(state.edits, 0);
    assert!(state.intent.to_lowercase().contains("billing"));
}
