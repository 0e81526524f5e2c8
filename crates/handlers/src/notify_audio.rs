// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification-audio (spec §4.3.8): plays a random clip from a configured
//! directory, unless disabled, the directory is missing, or quiet hours are
//! active.

use crate::quiet_hours::{is_quiet, time_of_day_from_epoch_ms, TimeOfDay};
use async_trait::async_trait;
use hk_adapters::{AudioPort, CommandAudioPlayer};
use hk_core::{Clock, Handler, HookInput, Response};
use std::path::PathBuf;
use std::sync::Arc;

pub struct NotifyAudioHandler<P: AudioPort, C: Clock> {
    port: Arc<P>,
    clock: Arc<C>,
    enabled: bool,
    directory: Option<PathBuf>,
    quiet_hours_enabled: bool,
    quiet_start: TimeOfDay,
    quiet_end: TimeOfDay,
}

impl<P: AudioPort, C: Clock> NotifyAudioHandler<P, C> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        port: Arc<P>,
        clock: Arc<C>,
        enabled: bool,
        directory: Option<PathBuf>,
        quiet_hours_enabled: bool,
        quiet_start: TimeOfDay,
        quiet_end: TimeOfDay,
    ) -> Self {
        Self { port, clock, enabled, directory, quiet_hours_enabled, quiet_start, quiet_end }
    }
}

#[async_trait]
impl<P: AudioPort, C: Clock + 'static> Handler for NotifyAudioHandler<P, C> {
    fn name(&self) -> &str {
        "notify-audio"
    }

    async fn handle(&self, _input: &HookInput) -> anyhow::Result<Response> {
        let Some(directory) = &self.directory else { return Ok(Response::ok()) };
        if !self.enabled || !directory.is_dir() {
            return Ok(Response::ok());
        }
        let now = time_of_day_from_epoch_ms(self.clock.epoch_ms());
        if is_quiet(self.quiet_hours_enabled, self.quiet_start, self.quiet_end, now) {
            return Ok(Response::ok());
        }
        let Some(file) = CommandAudioPlayer::choose_random(directory) else { return Ok(Response::ok()) };
        self.port.play(&file).await?;
        Ok(Response::ok())
    }
}

#[cfg(test)]
#[path = "notify_audio_tests.rs"]
mod tests;
