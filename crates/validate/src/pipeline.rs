// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation pipeline orchestration (spec §4.4 state machine): filter,
//! discover, lock, run, report.

use crate::commands::{self, DiscoveredCommands};
use crate::cooldown::{self, Acquired};
use crate::project_root;
use crate::skip_registry::{self, SkipRegistry};
use crate::subprocess::{self, RunOutcome};
use hk_core::HookInput;
use std::path::Path;
use std::time::Duration;

const EDIT_TOOLS: &[&str] = &["Write", "Edit", "MultiEdit", "NotebookEdit"];

/// Final verdict of one validation invocation.
pub struct Outcome {
    pub exit_code: i32,
    pub stderr: String,
}

impl Outcome {
    fn ok() -> Self {
        Self { exit_code: 0, stderr: String::new() }
    }

    fn blocked(stderr: String) -> Self {
        Self { exit_code: 2, stderr }
    }
}

/// Run the full pipeline for one hook invocation.
///
/// `package_manager` is the preferred package manager name (from the
/// package-manager-detection handler's persisted state, or `"npm"` as a
/// last resort) used to pick the `package.json` script runner.
pub async fn run(
    input: &HookInput,
    tmp_dir: &Path,
    config_dir: Option<&Path>,
    package_manager: &str,
    timeout: Duration,
    cooldown_seconds: u64,
    now_epoch_s: u64,
) -> Outcome {
    let Some(tool_name) = input.tool_name.as_deref() else { return Outcome::ok() };
    if !EDIT_TOOLS.contains(&tool_name) {
        return Outcome::ok();
    }
    let Some(file_path) = input.tool_input.as_ref().and_then(|v| v.get("file_path")).and_then(|v| v.as_str()) else {
        return Outcome::ok();
    };
    let file = Path::new(file_path);

    if skip_registry::matches_builtin(file) {
        return Outcome::ok();
    }

    let registry = SkipRegistry::load(config_dir);
    let dir = skip_registry::containing_dir(file);
    let skip_lint = registry.skips_lint(&dir);
    let skip_test = registry.skips_test(&dir);
    if skip_lint && skip_test {
        return Outcome::ok();
    }

    let start_dir = dir;
    let root = project_root::discover(&start_dir);

    if cooldown::acquire(tmp_dir, &root, now_epoch_s, cooldown_seconds) == Acquired::StillCooling {
        return Outcome::ok();
    }

    let discovered = commands::discover(&root, package_manager);
    let outcome = run_commands(&discovered, skip_lint, skip_test, &root, timeout).await;

    cooldown::complete(tmp_dir, &root, now_epoch_s);
    outcome
}

async fn run_commands(
    discovered: &DiscoveredCommands,
    skip_lint: bool,
    skip_test: bool,
    root: &Path,
    timeout: Duration,
) -> Outcome {
    let lint_future = async {
        match (&discovered.lint, skip_lint) {
            (Some(invocation), false) => Some(subprocess::run("lint", invocation, root, timeout).await),
            _ => None,
        }
    };
    let test_future = async {
        match (&discovered.test, skip_test) {
            (Some(invocation), false) => Some(subprocess::run("test", invocation, root, timeout).await),
            _ => None,
        }
    };

    let (lint_result, test_result) = tokio::join!(lint_future, test_future);

    let mut failures: Vec<RunOutcome> = Vec::new();
    for result in [lint_result, test_result].into_iter().flatten() {
        match result {
            Ok(outcome) if !outcome.success => failures.push(outcome),
            Ok(_) => {}
            Err(error) => return Outcome::blocked(format!("validation failed to start: {error}")),
        }
    }

    if failures.is_empty() {
        return Outcome::ok();
    }

    let summary = failures
        .iter()
        .map(|failure| {
            if failure.timed_out {
                format!("{} timed out", failure.label)
            } else {
                format!("{} failed:\n{}", failure.label, failure.output_tail)
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    Outcome::blocked(summary)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
