// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation-pipeline binary (spec §6.4, §4.4): reads one `PostToolUse`-style
//! event from stdin, runs the project's lint/test commands under a deadline,
//! and blocks the edit (exit 2) on failure.

use clap::Parser;
use hk_core::{Config, HookInput};
use hk_state::debug_trace::{DebugTrace, TraceEvent};
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// File-edit validation pipeline: runs lint and test in parallel and blocks
/// the edit on failure.
#[derive(Parser)]
#[command(name = "validate", version, long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_GIT_HASH"), ")"))]
struct Args {
    /// Wall-clock deadline for lint+test, in seconds. Overrides config and
    /// the `VALIDATE_TIMEOUT_SECONDS` environment variable.
    #[arg(long)]
    timeout: Option<u64>,

    /// Minimum gap between runs for the same project, in seconds. Overrides
    /// config and the `VALIDATE_COOLDOWN_SECONDS` environment variable.
    #[arg(long)]
    cooldown: Option<u64>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing();

    let input = HookInput::read_stdin();
    let cwd = Path::new(&input.cwd);
    let config = Config::load(cwd);

    let timeout = Duration::from_secs(args.timeout.unwrap_or(config.validate.timeout_seconds));
    let cooldown_seconds = args.cooldown.unwrap_or(config.validate.cooldown_seconds);
    let package_manager = config.package_manager.preferred.as_deref().unwrap_or("npm");
    let config_dir = hk_core::paths::config_dir();
    let tmp_dir = std::env::temp_dir();
    let now_epoch_s = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();

    let trace = debug_trace(&config, cwd, now_epoch_s);
    if let Some(trace) = &trace {
        trace.append(&TraceEvent { timestamp: now_epoch_s.to_string(), event: "validate_start", detail: None });
    }

    let outcome = hk_validate::run(
        &input,
        &tmp_dir,
        config_dir.as_deref(),
        package_manager,
        timeout,
        cooldown_seconds,
        now_epoch_s,
    )
    .await;

    if let Some(trace) = &trace {
        trace.append(&TraceEvent {
            timestamp: now_epoch_s.to_string(),
            event: "validate_end",
            detail: Some(&serde_json::json!({"exitCode": outcome.exit_code})),
        });
    }

    if !outcome.stderr.is_empty() {
        eprintln!("{}", outcome.stderr);
    }
    std::process::exit(outcome.exit_code);
}

/// Builds the `HK_DEBUG`/`config.debug.enabled` trace sink (spec §6.6
/// `<cache>/debug/`), mirroring the dispatcher's.
fn debug_trace(config: &Config, cwd: &Path, now_epoch_s: u64) -> Option<DebugTrace> {
    if !config.debug.enabled {
        return None;
    }
    let cache_dir = hk_core::paths::cache_dir()?;
    Some(DebugTrace::new(&cache_dir, cwd, &now_epoch_s.to_string()))
}

fn init_tracing() {
    let filter = if std::env::var("HK_DEBUG").as_deref() == Ok("1") { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .try_init();
}
