// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use hk_core::EventName;

fn bash_input(command: &str) -> HookInput {
    HookInput {
        event_name: EventName::PreToolUse,
        tool_name: Some("Bash".to_string()),
        tool_input: Some(serde_json::json!({"command": command})),
        ..HookInput::default()
    }
}

#[tokio::test]
async fn fires_on_git_commit() {
    let handler = PrecommitReminderHandler::new(true, "make precommit".to_string());
    let response = handler.handle(&bash_input("git commit -m 'wip'")).await.unwrap();
    assert!(response.stderr.contains("make precommit"));
    assert_eq!(response.exit_code, 0);
}

#[tokio::test]
async fn ignores_other_bash_commands() {
    let handler = PrecommitReminderHandler::new(true, "make precommit".to_string());
    let response = handler.handle(&bash_input("git status")).await.unwrap();
    assert_eq!(response.stderr, "");
}

#[tokio::test]
async fn ignores_non_bash_tools() {
    let handler = PrecommitReminderHandler::new(true, "make precommit".to_string());
    let mut input = bash_input("git commit");
    input.tool_name = Some("Write".to_string());
    let response = handler.handle(&input).await.unwrap();
    assert_eq!(response.stderr, "");
}

#[tokio::test]
async fn disabled_never_fires() {
    let handler = PrecommitReminderHandler::new(false, "make precommit".to_string());
    let response = handler.handle(&bash_input("git commit")).await.unwrap();
    assert_eq!(response.stderr, "");
}
