// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical hook event/input/output records and their JSON (un)marshal.

use serde::{Deserialize, Serialize};
use std::io::Read;

/// Lifecycle point at which the host invoked us.
///
/// Unknown event names deserialize to [`EventName::Unknown`], which the
/// dispatcher always resolves to a zero-value response (no handlers are ever
/// registered for it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    SessionStart,
    SessionEnd,
    PreToolUse,
    PostToolUse,
    PostToolUseFailure,
    PreCompact,
    Notification,
    UserPromptSubmit,
    Stop,
    SubagentStart,
    SubagentStop,
    Unknown,
}

impl EventName {
    fn parse(raw: &str) -> Self {
        match raw {
            "SessionStart" => Self::SessionStart,
            "SessionEnd" => Self::SessionEnd,
            "PreToolUse" => Self::PreToolUse,
            "PostToolUse" => Self::PostToolUse,
            "PostToolUseFailure" => Self::PostToolUseFailure,
            "PreCompact" => Self::PreCompact,
            "Notification" => Self::Notification,
            "UserPromptSubmit" => Self::UserPromptSubmit,
            "Stop" => Self::Stop,
            "SubagentStart" => Self::SubagentStart,
            "SubagentStop" => Self::SubagentStop,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SessionStart => "SessionStart",
            Self::SessionEnd => "SessionEnd",
            Self::PreToolUse => "PreToolUse",
            Self::PostToolUse => "PostToolUse",
            Self::PostToolUseFailure => "PostToolUseFailure",
            Self::PreCompact => "PreCompact",
            Self::Notification => "Notification",
            Self::UserPromptSubmit => "UserPromptSubmit",
            Self::Stop => "Stop",
            Self::SubagentStart => "SubagentStart",
            Self::SubagentStop => "SubagentStop",
            Self::Unknown => "",
        }
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw wire shape of the event JSON the host pipes in on stdin.
///
/// Field names follow the host's snake_case convention; [`HookInput`] is the
/// ergonomic view the rest of the workspace consumes.
#[derive(Debug, Default, Deserialize)]
struct RawHookInput {
    #[serde(default)]
    hook_event_name: String,
    #[serde(default)]
    session_id: String,
    #[serde(default)]
    transcript_path: Option<String>,
    #[serde(default)]
    cwd: Option<String>,
    #[serde(default)]
    tool_name: Option<String>,
    #[serde(default)]
    tool_input: Option<serde_json::Value>,
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Canonical event record parsed from stdin. Immutable for the duration of
/// one invocation.
#[derive(Debug, Clone)]
pub struct HookInput {
    pub event_name: EventName,
    pub session_id: String,
    pub transcript_path: Option<String>,
    pub cwd: String,
    pub tool_name: Option<String>,
    pub tool_input: Option<serde_json::Value>,
    pub prompt: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
}

impl Default for HookInput {
    /// The zero-value input: an unknown event with every other field empty.
    /// Returned whenever stdin is missing or unparseable — the dispatcher
    /// must never fail the host because it could not understand its input.
    fn default() -> Self {
        Self {
            event_name: EventName::Unknown,
            session_id: String::new(),
            transcript_path: None,
            cwd: String::new(),
            tool_name: None,
            tool_input: None,
            prompt: None,
            title: None,
            message: None,
        }
    }
}

impl HookInput {
    /// Parse from raw JSON bytes. Malformed or empty input yields the
    /// zero-value [`HookInput`] rather than an error.
    pub fn parse(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::default();
        }
        let raw: RawHookInput = match serde_json::from_slice(bytes) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };
        Self {
            event_name: EventName::parse(&raw.hook_event_name),
            session_id: raw.session_id,
            transcript_path: raw.transcript_path,
            cwd: raw.cwd.unwrap_or_default(),
            tool_name: raw.tool_name,
            tool_input: raw.tool_input,
            prompt: raw.prompt,
            title: raw.title,
            message: raw.message,
        }
    }

    /// Read and parse from standard input. I/O errors are treated the same
    /// as malformed JSON: a zero-value input, never a failure.
    pub fn read_stdin() -> Self {
        let mut buf = Vec::new();
        if std::io::stdin().read_to_end(&mut buf).is_err() {
            return Self::default();
        }
        Self::parse(&buf)
    }

    /// Extract a string-valued key from the raw `tool_input` blob. Returns
    /// an empty string on any shape mismatch (missing key, non-object,
    /// non-string value) — this accessor never panics and never propagates
    /// an error, since tool input shape varies per tool and is not modeled.
    pub fn tool_input_str(&self, key: &str) -> &str {
        self.tool_input
            .as_ref()
            .and_then(|v| v.get(key))
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }
}

/// Free-form per-handler context the host understands (§3.2).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HookOutput {
    #[serde(rename = "continue", skip_serializing_if = "Option::is_none")]
    pub continue_: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_output: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_message: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub additional_context: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_specific_output: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_decision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_input: Option<serde_json::Value>,
}

/// Per-handler result: exit code, optional stdout payload, stderr text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    pub exit_code: i32,
    pub stdout: Option<HookOutput>,
    pub stderr: String,
}

impl Response {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn block(stderr: impl Into<String>) -> Self {
        Self { exit_code: 2, stdout: None, stderr: stderr.into() }
    }

    pub fn with_stderr(stderr: impl Into<String>) -> Self {
        Self { exit_code: 0, stdout: None, stderr: stderr.into() }
    }

    pub fn with_stdout(stdout: HookOutput) -> Self {
        Self { exit_code: 0, stdout: Some(stdout), stderr: String::new() }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
