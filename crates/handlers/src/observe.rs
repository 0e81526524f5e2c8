// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observation logging (spec §4.3.5): registered once per phase
//! (`PreToolUse`, `PostToolUse`, `PostToolUseFailure`), appending a JSONL
//! record of each tool invocation to a rotating global log.

use async_trait::async_trait;
use hk_core::{timestamp, Clock, Handler, HookInput, Response};
use hk_state::observations::{self, Observation};
use std::path::PathBuf;
use std::sync::Arc;

const MB: u64 = 1024 * 1024;

pub struct ObserveHandler<C: Clock> {
    dir: PathBuf,
    phase: &'static str,
    enabled: bool,
    max_file_size_mb: u64,
    clock: Arc<C>,
}

impl<C: Clock> ObserveHandler<C> {
    pub fn new(dir: PathBuf, phase: &'static str, enabled: bool, max_file_size_mb: u64, clock: Arc<C>) -> Self {
        Self { dir, phase, enabled, max_file_size_mb, clock }
    }
}

#[async_trait]
impl<C: Clock + 'static> Handler for ObserveHandler<C> {
    fn name(&self) -> &str {
        match self.phase {
            "pre" => "observe-pre",
            "post" => "observe-post",
            _ => "observe-failure",
        }
    }

    async fn handle(&self, input: &HookInput) -> anyhow::Result<Response> {
        if !self.enabled || observations::is_disabled(&self.dir) {
            return Ok(Response::ok());
        }

        let record = Observation {
            timestamp: timestamp::format_iso8601(self.clock.epoch_ms()),
            phase: self.phase,
            tool_name: input.tool_name.as_deref().unwrap_or(""),
            tool_input: input.tool_input.as_ref(),
            session_id: &input.session_id,
        };
        observations::append(&self.dir, self.max_file_size_mb * MB, &record);
        Ok(Response::ok())
    }
}

#[cfg(test)]
#[path = "observe_tests.rs"]
mod tests;
