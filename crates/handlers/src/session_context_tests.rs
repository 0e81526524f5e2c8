// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use hk_state::SessionRecord;
use tempfile::tempdir;

fn record(date: &str, id: &str, summary: &str) -> SessionRecord {
    SessionRecord {
        version: "1".to_string(),
        id: id.to_string(),
        date: date.to_string(),
        started: "2026-07-30T00:00:00Z".to_string(),
        ended: "2026-07-30T01:00:00Z".to_string(),
        title: "Session 00:00".to_string(),
        summary: summary.to_string(),
        tools_used: vec![],
        files_modified: vec![],
        message_count: 3,
    }
}

#[tokio::test]
async fn no_prior_session_yields_no_output() {
    let home = tempdir().unwrap();
    let handler = SessionContextHandler::new(home.path().to_path_buf());
    let response = handler.handle(&HookInput::default()).await.unwrap();
    assert!(response.stdout.is_none());
    assert_eq!(response.stderr, "");
}

#[tokio::test]
async fn prior_session_with_summary_emits_additional_context() {
    let home = tempdir().unwrap();
    session_record::store(home.path(), &record("2026-07-29", "sess-1", "fixed the parser"));

    let handler = SessionContextHandler::new(home.path().to_path_buf());
    let response = handler.handle(&HookInput::default()).await.unwrap();
    let stdout = response.stdout.unwrap();
    assert_eq!(stdout.additional_context, vec!["Previous session (2026-07-29): fixed the parser".to_string()]);
}

#[tokio::test]
async fn prior_session_with_empty_summary_emits_no_output() {
    let home = tempdir().unwrap();
    session_record::store(home.path(), &record("2026-07-29", "sess-1", ""));

    let handler = SessionContextHandler::new(home.path().to_path_buf());
    let response = handler.handle(&HookInput::default()).await.unwrap();
    assert!(response.stdout.is_none());
}

#[tokio::test]
async fn alias_map_present_emits_advisory_stderr() {
    let home = tempdir().unwrap();
    std::fs::write(home.path().join("session-aliases.json"), r#"{"work": "sess-1", "personal": "sess-2"}"#)
        .unwrap();

    let handler = SessionContextHandler::new(home.path().to_path_buf());
    let response = handler.handle(&HookInput::default()).await.unwrap();
    assert!(response.stderr.contains("personal"));
    assert!(response.stderr.contains("work"));
}
