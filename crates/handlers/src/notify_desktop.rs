// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification-desktop (spec §4.3.9): shows a host OS banner using
//! `input.title`/`input.message`, falling back to fixed defaults.

use crate::quiet_hours::{is_quiet, time_of_day_from_epoch_ms, TimeOfDay};
use async_trait::async_trait;
use hk_adapters::DesktopPort;
use hk_core::{Clock, Handler, HookInput, Response};
use std::sync::Arc;

const DEFAULT_TITLE: &str = "Claude Code";
const DEFAULT_MESSAGE: &str = "Notification";

pub struct NotifyDesktopHandler<P: DesktopPort, C: Clock> {
    port: Arc<P>,
    clock: Arc<C>,
    enabled: bool,
    quiet_hours_enabled: bool,
    quiet_start: TimeOfDay,
    quiet_end: TimeOfDay,
}

impl<P: DesktopPort, C: Clock> NotifyDesktopHandler<P, C> {
    pub fn new(
        port: Arc<P>,
        clock: Arc<C>,
        enabled: bool,
        quiet_hours_enabled: bool,
        quiet_start: TimeOfDay,
        quiet_end: TimeOfDay,
    ) -> Self {
        Self { port, clock, enabled, quiet_hours_enabled, quiet_start, quiet_end }
    }
}

#[async_trait]
impl<P: DesktopPort, C: Clock + 'static> Handler for NotifyDesktopHandler<P, C> {
    fn name(&self) -> &str {
        "notify-desktop"
    }

    async fn handle(&self, input: &HookInput) -> anyhow::Result<Response> {
        if !self.enabled {
            return Ok(Response::ok());
        }
        let now = time_of_day_from_epoch_ms(self.clock.epoch_ms());
        if is_quiet(self.quiet_hours_enabled, self.quiet_start, self.quiet_end, now) {
            return Ok(Response::ok());
        }
        let title = input.title.as_deref().unwrap_or(DEFAULT_TITLE);
        let message = input.message.as_deref().unwrap_or(DEFAULT_MESSAGE);
        self.port.notify(title, message).await?;
        Ok(Response::ok())
    }
}

#[cfg(test)]
#[path = "notify_desktop_tests.rs"]
mod tests;
