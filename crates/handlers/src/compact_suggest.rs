// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compaction suggestion (spec §4.3.4): nudges the user toward `/compact`
//! once the per-session tool-call counter crosses a threshold, then at a
//! configurable cadence afterward.

use async_trait::async_trait;
use hk_core::{Handler, HookInput, Response};
use hk_state::counter;
use std::path::PathBuf;

pub struct CompactSuggestHandler {
    dir: PathBuf,
    threshold: u64,
    reminder_interval: u64,
}

impl CompactSuggestHandler {
    pub fn new(dir: PathBuf, threshold: u64, reminder_interval: u64) -> Self {
        Self { dir, threshold, reminder_interval }
    }
}

#[async_trait]
impl Handler for CompactSuggestHandler {
    fn name(&self) -> &str {
        "compact-suggest"
    }

    async fn handle(&self, input: &HookInput) -> anyhow::Result<Response> {
        let count = counter::increment(&self.dir, "", &input.session_id);
        if should_suggest(count, self.threshold, self.reminder_interval) {
            return Ok(Response::with_stderr(format!(
                "You've made {count} tool calls this session. Consider running /compact to reduce context.\n"
            )));
        }
        Ok(Response::ok())
    }
}

fn should_suggest(count: u64, threshold: u64, reminder_interval: u64) -> bool {
    if threshold == 0 {
        return false;
    }
    if count == threshold {
        return true;
    }
    reminder_interval > 0 && count > threshold && (count - threshold) % reminder_interval == 0
}

#[cfg(test)]
#[path = "compact_suggest_tests.rs"]
mod tests;
