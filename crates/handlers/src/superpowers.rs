// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Superpowers context injection (spec §4.3.1): surfaces a well-known skill
//! descriptor on session open so the host discovers it without a separate
//! round-trip.

use async_trait::async_trait;
use hk_core::{Handler, HookInput, HookOutput, Response};
use std::path::Path;

const SKILL_RELATIVE_PATH: &str = ".claude/skills/using-superpowers/SKILL.md";

pub struct SuperpowersHandler;

impl SuperpowersHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SuperpowersHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Handler for SuperpowersHandler {
    fn name(&self) -> &str {
        "superpowers"
    }

    async fn handle(&self, input: &HookInput) -> anyhow::Result<Response> {
        let path = Path::new(&input.cwd).join(SKILL_RELATIVE_PATH);
        let Ok(contents) = std::fs::read_to_string(&path) else {
            return Ok(Response::ok());
        };

        let mut hook_specific_output = serde_json::Map::new();
        hook_specific_output.insert("skill".to_string(), serde_json::Value::String(contents));
        Ok(Response::with_stdout(HookOutput {
            hook_specific_output: Some(hook_specific_output),
            ..HookOutput::default()
        }))
    }
}

#[cfg(test)]
#[path = "superpowers_tests.rs"]
mod tests;
