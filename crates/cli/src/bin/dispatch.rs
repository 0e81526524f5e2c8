// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event-dispatch binary (spec §6.4): reads one event from stdin, runs the
//! full handler registry, writes the merged response, and exits. Takes no
//! flags beyond `--help`/`--version`.

use clap::Parser;
use hk_adapters::{CommandAudioPlayer, DesktopNotifyAdapter, HttpPushSender};
use hk_core::{Clock, Config, EventName, HookInput, HookOutput, SystemClock};
use hk_handlers::quiet_hours::TimeOfDay;
use hk_handlers::{
    compact_suggest::CompactSuggestHandler, drift::DriftHandler, log_compaction::LogCompactionHandler,
    notify_audio::NotifyAudioHandler, notify_desktop::NotifyDesktopHandler, notify_push::NotifyPushHandler,
    observe::ObserveHandler, package_manager::PackageManagerHandler,
    precommit_reminder::PrecommitReminderHandler, session_context::SessionContextHandler,
    session_end::SessionEndHandler, stop_reminder::StopReminderHandler, superpowers::SuperpowersHandler,
    Registry,
};
use hk_state::debug_trace::{DebugTrace, TraceEvent};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Hook dispatcher: reads one event from stdin and runs the registered
/// handlers for it.
#[derive(Parser)]
#[command(name = "dispatch", version, long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_GIT_HASH"), ")"))]
struct Args;

#[tokio::main]
async fn main() {
    let _ = Args::parse();
    init_tracing();

    let input = HookInput::read_stdin();
    let config = Config::load(Path::new(&input.cwd));
    let registry = build_registry(&config);

    let trace = debug_trace(&config, &input);
    if let Some(trace) = &trace {
        trace.append(&TraceEvent { timestamp: now_iso(), event: "dispatch_start", detail: Some(&serde_json::json!({"hookEventName": input.event_name.to_string()})) });
    }

    let response = registry.dispatch(&input).await;

    if let Some(trace) = &trace {
        trace.append(&TraceEvent {
            timestamp: now_iso(),
            event: "dispatch_end",
            detail: Some(&serde_json::json!({"exitCode": response.exit_code})),
        });
    }

    if let Some(stdout) = &response.stdout {
        print_stdout(stdout);
    }
    if !response.stderr.is_empty() {
        eprint!("{}", response.stderr);
    }
    std::process::exit(response.exit_code);
}

/// Builds the `HK_DEBUG`/`config.debug.enabled` trace sink (spec §6.6
/// `<cache>/debug/`). Absent entirely when debug tracing isn't on, so a
/// normal invocation never touches the filesystem for it.
fn debug_trace(config: &Config, input: &HookInput) -> Option<DebugTrace> {
    if !config.debug.enabled {
        return None;
    }
    let cache_dir = hk_core::paths::cache_dir()?;
    let clock = SystemClock;
    Some(DebugTrace::new(&cache_dir, Path::new(&input.cwd), &clock.epoch_ms().to_string()))
}

fn now_iso() -> String {
    hk_core::timestamp::format_iso8601(SystemClock.epoch_ms())
}

fn print_stdout(output: &HookOutput) {
    match serde_json::to_string(output) {
        Ok(json) => println!("{json}"),
        Err(error) => tracing::warn!(%error, "failed to serialize hook output"),
    }
}

fn init_tracing() {
    let filter = if std::env::var("HK_DEBUG").as_deref() == Ok("1") { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_registry(config: &Config) -> Registry {
    let clock = Arc::new(SystemClock);
    let cache_dir = hk_core::paths::cache_dir().unwrap_or_else(|| PathBuf::from(".hk-cache"));
    let home_dir = hk_core::paths::home_dir().unwrap_or_else(|| PathBuf::from(".hk-home"));

    let mut registry = Registry::new();

    registry.register(EventName::SessionStart, Arc::new(SuperpowersHandler::new()));
    registry.register(
        EventName::SessionStart,
        Arc::new(PackageManagerHandler::new(config.package_manager.preferred.clone())),
    );
    registry.register(EventName::SessionStart, Arc::new(SessionContextHandler::new(home_dir.clone())));

    registry.register(
        EventName::PreToolUse,
        Arc::new(CompactSuggestHandler::new(
            cache_dir.join("compact"),
            config.compact.threshold as u64,
            config.compact.reminder_interval as u64,
        )),
    );
    registry.register(
        EventName::PreToolUse,
        Arc::new(ObserveHandler::new(
            cache_dir.join("observations"),
            "pre",
            config.observe.enabled,
            config.observe.max_file_size_mb,
            clock.clone(),
        )),
    );
    registry.register(
        EventName::PreToolUse,
        Arc::new(PrecommitReminderHandler::new(config.pre_commit.enabled, config.pre_commit.command.clone())),
    );

    registry.register(
        EventName::PostToolUse,
        Arc::new(ObserveHandler::new(
            cache_dir.join("observations"),
            "post",
            config.observe.enabled,
            config.observe.max_file_size_mb,
            clock.clone(),
        )),
    );
    registry.register(
        EventName::PostToolUseFailure,
        Arc::new(ObserveHandler::new(
            cache_dir.join("observations"),
            "failure",
            config.observe.enabled,
            config.observe.max_file_size_mb,
            clock.clone(),
        )),
    );

    registry.register(EventName::PreCompact, Arc::new(LogCompactionHandler::new(cache_dir.clone(), clock.clone())));

    let quiet_start = TimeOfDay::parse(&config.notify.quiet_hours.start);
    let quiet_end = TimeOfDay::parse(&config.notify.quiet_hours.end);
    registry.register(
        EventName::Notification,
        Arc::new(NotifyAudioHandler::new(
            Arc::new(CommandAudioPlayer::new()),
            clock.clone(),
            config.notify.audio.enabled,
            config.notify.audio.directory.clone().map(PathBuf::from),
            config.notify.quiet_hours.enabled,
            quiet_start,
            quiet_end,
        )),
    );
    registry.register(
        EventName::Notification,
        Arc::new(NotifyDesktopHandler::new(
            Arc::new(DesktopNotifyAdapter::new()),
            clock.clone(),
            config.notify.desktop.enabled,
            config.notify.quiet_hours.enabled,
            quiet_start,
            quiet_end,
        )),
    );
    registry.register(
        EventName::Notification,
        Arc::new(NotifyPushHandler::new(
            Arc::new(HttpPushSender::default()),
            clock.clone(),
            config.notifications.push_topic.clone(),
            config.notify.quiet_hours.enabled,
            quiet_start,
            quiet_end,
        )),
    );

    if config.drift.enabled {
        registry.register(
            EventName::UserPromptSubmit,
            Arc::new(DriftHandler::new(cache_dir.join("drift"), config.drift.min_edits, config.drift.threshold)),
        );
    }

    if config.stop_reminder.enabled {
        registry.register(
            EventName::Stop,
            Arc::new(StopReminderHandler::new(
                cache_dir.join("stop"),
                config.stop_reminder.interval as u64,
                config.stop_reminder.warn_at as u64,
            )),
        );
    }

    registry.register(
        EventName::SessionEnd,
        Arc::new(SessionEndHandler::new(
            home_dir,
            clock,
            Some(config.learning.min_session_length as u64),
        )),
    );

    registry
}
