// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session end (spec §4.3.13): summarizes the transcript, if any, and
//! persists a session record for the next session-context handler to find.

use async_trait::async_trait;
use hk_core::{timestamp, Clock, Handler, HookInput, Response};
use hk_state::session_record::{self, SessionRecord};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const DEFAULT_MIN_SESSION_LENGTH: u64 = 10;

struct TranscriptSummary {
    summary: String,
    tools_used: Vec<String>,
    files_modified: Vec<String>,
    message_count: u64,
}

impl Default for TranscriptSummary {
    fn default() -> Self {
        Self { summary: String::new(), tools_used: Vec::new(), files_modified: Vec::new(), message_count: 0 }
    }
}

/// Best-effort JSONL transcript scan. Any I/O or parse error yields the
/// zero-value summary rather than failing the handler.
fn summarize_transcript(path: &Path) -> TranscriptSummary {
    let Ok(contents) = std::fs::read_to_string(path) else { return TranscriptSummary::default() };

    let mut tools_used = BTreeSet::new();
    let mut files_modified = BTreeSet::new();
    let mut message_count = 0u64;
    let mut last_assistant_text = String::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Ok(value) = serde_json::from_str::<serde_json::Value>(line) else { continue };
        let role = value.get("type").and_then(|v| v.as_str()).unwrap_or("");
        if role != "assistant" && role != "user" {
            continue;
        }
        message_count += 1;

        let Some(content) = value.get("message").and_then(|m| m.get("content")).and_then(|c| c.as_array()) else {
            continue;
        };
        for block in content {
            match block.get("type").and_then(|v| v.as_str()) {
                Some("text") => {
                    if role == "assistant" {
                        if let Some(text) = block.get("text").and_then(|v| v.as_str()) {
                            last_assistant_text = text.trim().to_string();
                        }
                    }
                }
                Some("tool_use") => {
                    if let Some(name) = block.get("name").and_then(|v| v.as_str()) {
                        tools_used.insert(name.to_string());
                        if matches!(name, "Edit" | "Write" | "MultiEdit" | "NotebookEdit") {
                            if let Some(file_path) =
                                block.get("input").and_then(|i| i.get("file_path")).and_then(|v| v.as_str())
                            {
                                files_modified.insert(file_path.to_string());
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }

    TranscriptSummary {
        summary: last_assistant_text,
        tools_used: tools_used.into_iter().collect(),
        files_modified: files_modified.into_iter().collect(),
        message_count,
    }
}

pub struct SessionEndHandler<C: Clock> {
    home: PathBuf,
    clock: Arc<C>,
    min_session_length: u64,
}

impl<C: Clock> SessionEndHandler<C> {
    pub fn new(home: PathBuf, clock: Arc<C>, min_session_length: Option<u64>) -> Self {
        Self { home, clock, min_session_length: min_session_length.unwrap_or(DEFAULT_MIN_SESSION_LENGTH) }
    }
}

#[async_trait]
impl<C: Clock + 'static> Handler for SessionEndHandler<C> {
    fn name(&self) -> &str {
        "session-end"
    }

    async fn handle(&self, input: &HookInput) -> anyhow::Result<Response> {
        let summary = match &input.transcript_path {
            Some(path) if !path.is_empty() => summarize_transcript(Path::new(path)),
            _ => TranscriptSummary::default(),
        };

        let now_ms = self.clock.epoch_ms();
        let now_iso = timestamp::format_iso8601(now_ms);
        let date = now_iso[..10].to_string();
        let time = &now_iso[11..16];

        let record = SessionRecord {
            version: "1".to_string(),
            id: input.session_id.clone(),
            date,
            started: now_iso.clone(),
            ended: now_iso,
            title: format!("Session {time}"),
            summary: summary.summary,
            tools_used: summary.tools_used,
            files_modified: summary.files_modified,
            message_count: summary.message_count,
        };

        session_record::store(&self.home, &record);

        if record.message_count >= self.min_session_length {
            return Ok(Response::with_stderr(
                "This was a substantial session. Consider extracting reusable patterns before starting the next one.",
            ));
        }

        Ok(Response::ok())
    }
}

#[cfg(test)]
#[path = "session_end_tests.rs"]
mod tests;
