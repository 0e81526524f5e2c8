// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Drift detection (spec §4.3.11): tracks a per-session intent baseline and
//! warns when the conversation's keyword overlap with that baseline drops
//! below a configured threshold.

use async_trait::async_trait;
use hk_core::keywords::{extract_keywords, first_sentence, overlap_ratio, starts_with_pivot_phrase};
use hk_core::{Handler, HookInput, Response};
use hk_state::drift::{self, DriftState};
use std::path::PathBuf;

pub struct DriftHandler {
    dir: PathBuf,
    min_edits: u32,
    threshold: f64,
}

impl DriftHandler {
    pub fn new(dir: PathBuf, min_edits: u32, threshold: f64) -> Self {
        Self { dir, min_edits, threshold }
    }
}

#[async_trait]
impl Handler for DriftHandler {
    fn name(&self) -> &str {
        "drift"
    }

    async fn handle(&self, input: &HookInput) -> anyhow::Result<Response> {
        let prompt = input.prompt.as_deref().unwrap_or("");
        let prior = drift::load(&self.dir, &input.session_id);

        let Some(mut baseline) = prior else {
            let intent = first_sentence(prompt);
            let keywords = extract_keywords(&intent).into_iter().collect();
            let state = DriftState { intent, keywords, edits: 0 };
            drift::store(&self.dir, &input.session_id, &state);
            return Ok(Response::ok());
        };

        if starts_with_pivot_phrase(prompt) {
            let intent = first_sentence(prompt);
            let keywords = extract_keywords(&intent).into_iter().collect();
            let state = DriftState { intent, keywords, edits: 0 };
            drift::store(&self.dir, &input.session_id, &state);
            return Ok(Response::ok());
        }

        baseline.edits += 1;
        if baseline.edits < self.min_edits {
            drift::store(&self.dir, &input.session_id, &baseline);
            return Ok(Response::ok());
        }

        let prior_keywords: std::collections::BTreeSet<String> = baseline.keywords.iter().cloned().collect();
        let prompt_keywords = extract_keywords(prompt);
        let ratio = overlap_ratio(&prior_keywords, &prompt_keywords);

        let response = if !prompt_keywords.is_empty() && ratio < self.threshold {
            Response::with_stderr(format!("Possible drift detected from intent: {}", baseline.intent))
        } else {
            Response::ok()
        };

        drift::store(&self.dir, &input.session_id, &baseline);
        Ok(response)
    }
}

#[cfg(test)]
#[path = "drift_tests.rs"]
mod tests;
