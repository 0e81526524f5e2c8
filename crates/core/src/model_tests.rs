// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn empty_stdin_yields_zero_value_input() {
    let input = HookInput::parse(b"");
    assert_eq!(input.event_name, EventName::Unknown);
    assert_eq!(input.session_id, "");
}

#[test]
fn malformed_json_yields_zero_value_input() {
    let input = HookInput::parse(b"{not json");
    assert_eq!(input.event_name, EventName::Unknown);
}

#[test]
fn unknown_event_name_parses_to_unknown() {
    let input = HookInput::parse(br#"{"hook_event_name": "SomethingNew"}"#);
    assert_eq!(input.event_name, EventName::Unknown);
}

#[test]
fn recognized_event_name_parses() {
    let input = HookInput::parse(br#"{"hook_event_name": "PreToolUse", "session_id": "abc"}"#);
    assert_eq!(input.event_name, EventName::PreToolUse);
    assert_eq!(input.session_id, "abc");
}

#[test]
fn tool_input_str_extracts_present_key() {
    let input = HookInput::parse(
        br#"{"hook_event_name": "PreToolUse", "tool_input": {"command": "git commit -m x"}}"#,
    );
    assert_eq!(input.tool_input_str("command"), "git commit -m x");
}

#[test]
fn tool_input_str_is_empty_on_missing_key() {
    let input = HookInput::parse(br#"{"hook_event_name": "PreToolUse", "tool_input": {}}"#);
    assert_eq!(input.tool_input_str("command"), "");
}

#[test]
fn tool_input_str_is_empty_on_shape_mismatch() {
    let input = HookInput::parse(
        br#"{"hook_event_name": "PreToolUse", "tool_input": {"command": 5}}"#,
    );
    assert_eq!(input.tool_input_str("command"), "");
}

#[test]
fn tool_input_str_is_empty_when_tool_input_absent() {
    let input = HookInput::parse(br#"{"hook_event_name": "PreToolUse"}"#);
    assert_eq!(input.tool_input_str("command"), "");
}

#[test]
fn hook_output_round_trips_populated_fields() {
    let output = HookOutput {
        continue_: Some(true),
        stop_reason: Some("done".to_string()),
        suppress_output: Some(false),
        system_message: Some("hi".to_string()),
        additional_context: vec!["a".to_string(), "b".to_string()],
        hook_specific_output: Some(serde_json::Map::new()),
        permission_decision: Some("allow".to_string()),
        updated_input: Some(serde_json::json!({"x": 1})),
    };
    let json = serde_json::to_string(&output).unwrap();
    let back: HookOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(output, back);
}

#[test]
fn hook_output_omits_absent_fields() {
    let output = HookOutput::default();
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json, serde_json::json!({}));
}
