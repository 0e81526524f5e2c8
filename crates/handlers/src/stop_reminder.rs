// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stop reminder (spec §4.3.12): counts consecutive stops per session and
//! escalates from a rotating soft reminder to a strong warning.

use async_trait::async_trait;
use hk_core::{Handler, HookInput, Response};
use hk_state::counter;
use std::path::PathBuf;

const COUNTER_PREFIX: &str = "stop-";

const REMINDERS: [&str; 3] = [
    "Consider wrapping up: use `/compact` or start a fresh session soon.",
    "This session is getting long. A fresh session may produce better results.",
    "Long-running sessions can drift. Consider summarizing progress and restarting.",
];

const STRONG_WARNING: &str =
    "This session has run far longer than recommended. Strongly consider ending it now.";

pub struct StopReminderHandler {
    dir: PathBuf,
    interval: u64,
    warn_at: u64,
}

impl StopReminderHandler {
    pub fn new(dir: PathBuf, interval: u64, warn_at: u64) -> Self {
        Self { dir, interval, warn_at }
    }
}

#[async_trait]
impl Handler for StopReminderHandler {
    fn name(&self) -> &str {
        "stop-reminder"
    }

    async fn handle(&self, input: &HookInput) -> anyhow::Result<Response> {
        let count = counter::increment(&self.dir, COUNTER_PREFIX, &input.session_id);

        if self.warn_at > 0 && count >= self.warn_at {
            return Ok(Response::with_stderr(STRONG_WARNING));
        }

        if self.interval > 0 && count % self.interval == 0 {
            let index = ((count / self.interval).saturating_sub(1)) as usize % REMINDERS.len();
            return Ok(Response::with_stderr(REMINDERS[index]));
        }

        Ok(Response::ok())
    }
}

#[cfg(test)]
#[path = "stop_reminder_tests.rs"]
mod tests;
