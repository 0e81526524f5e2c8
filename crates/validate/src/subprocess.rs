// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deadline-bounded subprocess execution with process-group cancellation
//! (spec §4.4 "Parallel execution", §5 "process-group abstraction").
//!
//! Generalizes a single-shot `tokio::time::timeout` into an explicit
//! process-group kill so the whole process tree a command spawns (not just
//! its direct child) is reclaimed when the deadline elapses.

use crate::commands::Invocation;
use nix::sys::signal::{killpg, Signal};
use nix::unistd::Pid;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

const GRACE_PERIOD: Duration = Duration::from_millis(500);
const OUTPUT_CAP_BYTES: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum SubprocessError {
    #[error("failed to spawn {program}: {source}")]
    Spawn { program: String, #[source] source: std::io::Error },
}

/// Outcome of one command's run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub label: String,
    pub success: bool,
    pub timed_out: bool,
    pub output_tail: String,
}

/// Run `invocation` rooted at `cwd`, in its own process group so the whole
/// tree can be cancelled together. Returns within `deadline` regardless of
/// the child's actual runtime.
pub async fn run(label: &str, invocation: &Invocation, cwd: &Path, deadline: Duration) -> Result<RunOutcome, SubprocessError> {
    let mut command = tokio::process::Command::new(&invocation.program);
    command
        .args(&invocation.args)
        .current_dir(cwd)
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        // New process group (pgid == pid): lets us `killpg` the whole tree
        // the command spawns on timeout, not just its direct child.
        .process_group(0);

    let mut child = command.spawn().map_err(|source| SubprocessError::Spawn { program: invocation.program.clone(), source })?;
    let pid = child.id().map(|raw| Pid::from_raw(raw as i32));

    let label = label.to_string();
    match tokio::time::timeout(deadline, child.wait_with_output()).await {
        Ok(Ok(output)) => {
            let mut combined = output.stdout;
            combined.extend_from_slice(&output.stderr);
            Ok(RunOutcome {
                label,
                success: output.status.success(),
                timed_out: false,
                output_tail: tail(&combined),
            })
        }
        Ok(Err(error)) => {
            tracing::warn!(%label, %error, "subprocess wait failed");
            Ok(RunOutcome { label, success: false, timed_out: false, output_tail: error.to_string() })
        }
        Err(_) => {
            if let Some(pid) = pid {
                terminate_group(pid).await;
            }
            Ok(RunOutcome { label, success: false, timed_out: true, output_tail: String::new() })
        }
    }
}

async fn terminate_group(pid: Pid) {
    let _ = killpg(pid, Signal::SIGTERM);
    tokio::time::sleep(GRACE_PERIOD).await;
    let _ = killpg(pid, Signal::SIGKILL);
}

fn tail(bytes: &[u8]) -> String {
    let start = bytes.len().saturating_sub(OUTPUT_CAP_BYTES);
    String::from_utf8_lossy(&bytes[start..]).into_owned()
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
