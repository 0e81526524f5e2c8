// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pre-commit reminder (spec §4.3.6): suggests running the project's
//! pre-commit command when a `git commit` invocation is about to happen.
//! Advisory only — never blocks.

use async_trait::async_trait;
use hk_core::{Handler, HookInput, Response};

pub struct PrecommitReminderHandler {
    enabled: bool,
    command: String,
}

impl PrecommitReminderHandler {
    pub fn new(enabled: bool, command: String) -> Self {
        Self { enabled, command }
    }
}

#[async_trait]
impl Handler for PrecommitReminderHandler {
    fn name(&self) -> &str {
        "precommit-reminder"
    }

    async fn handle(&self, input: &HookInput) -> anyhow::Result<Response> {
        if !self.enabled || input.tool_name.as_deref() != Some("Bash") {
            return Ok(Response::ok());
        }
        let command = input.tool_input_str("command");
        if !command.contains("git commit") {
            return Ok(Response::ok());
        }
        Ok(Response::with_stderr(format!("Consider running `{}` before committing.\n", self.command)))
    }
}

#[cfg(test)]
#[path = "precommit_reminder_tests.rs"]
mod tests;
