// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session context (spec §4.3.3): surfaces the prior session's summary, and
//! an advisory note about any configured session aliases, on session start.

use async_trait::async_trait;
use hk_core::{Handler, HookInput, HookOutput, Response};
use hk_state::session_record;
use std::path::PathBuf;

pub struct SessionContextHandler {
    home: PathBuf,
}

impl SessionContextHandler {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }
}

#[async_trait]
impl Handler for SessionContextHandler {
    fn name(&self) -> &str {
        "session-context"
    }

    async fn handle(&self, _input: &HookInput) -> anyhow::Result<Response> {
        let mut stdout = None;
        if let Some(record) = session_record::find_latest(&self.home) {
            if !record.summary.is_empty() {
                stdout = Some(HookOutput {
                    additional_context: vec![format!("Previous session ({}): {}", record.date, record.summary)],
                    ..HookOutput::default()
                });
            }
        }

        let mut stderr = String::new();
        if let Some(names) = alias_names(&self.home) {
            stderr.push_str(&format!("Known session aliases: {}\n", names.join(", ")));
        }

        Ok(Response { exit_code: 0, stdout, stderr })
    }
}

/// Read the global alias map (owned by an external alias subcommand; spec
/// §3.3 "read-only from core"). Absent or malformed file yields `None`.
fn alias_names(home: &std::path::Path) -> Option<Vec<String>> {
    let raw = std::fs::read_to_string(home.join("session-aliases.json")).ok()?;
    let value: serde_json::Value = serde_json::from_str(&raw).ok()?;
    let map = value.as_object()?;
    if map.is_empty() {
        return None;
    }
    let mut names: Vec<String> = map.keys().cloned().collect();
    names.sort();
    Some(names)
}

#[cfg(test)]
#[path = "session_context_tests.rs"]
mod tests;
