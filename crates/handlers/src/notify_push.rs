// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification-push (spec §4.3.10): forwards a notification to a push
//! gateway topic, unless no topic is configured or quiet hours are active.

use crate::quiet_hours::{is_quiet, time_of_day_from_epoch_ms, TimeOfDay};
use async_trait::async_trait;
use hk_adapters::PushPort;
use hk_core::{Clock, Handler, HookInput, Response};
use std::sync::Arc;

const DEFAULT_TITLE: &str = "Claude Code";
const DEFAULT_MESSAGE: &str = "Notification";

pub struct NotifyPushHandler<P: PushPort, C: Clock> {
    port: Arc<P>,
    clock: Arc<C>,
    topic: Option<String>,
    quiet_hours_enabled: bool,
    quiet_start: TimeOfDay,
    quiet_end: TimeOfDay,
}

impl<P: PushPort, C: Clock> NotifyPushHandler<P, C> {
    pub fn new(
        port: Arc<P>,
        clock: Arc<C>,
        topic: Option<String>,
        quiet_hours_enabled: bool,
        quiet_start: TimeOfDay,
        quiet_end: TimeOfDay,
    ) -> Self {
        Self { port, clock, topic, quiet_hours_enabled, quiet_start, quiet_end }
    }
}

#[async_trait]
impl<P: PushPort, C: Clock + 'static> Handler for NotifyPushHandler<P, C> {
    fn name(&self) -> &str {
        "notify-push"
    }

    async fn handle(&self, input: &HookInput) -> anyhow::Result<Response> {
        let Some(topic) = &self.topic else { return Ok(Response::ok()) };
        if topic.is_empty() {
            return Ok(Response::ok());
        }
        let now = time_of_day_from_epoch_ms(self.clock.epoch_ms());
        if is_quiet(self.quiet_hours_enabled, self.quiet_start, self.quiet_end, now) {
            return Ok(Response::ok());
        }
        let title = input.title.as_deref().unwrap_or(DEFAULT_TITLE);
        let message = input.message.as_deref().unwrap_or(DEFAULT_MESSAGE);
        self.port.send(topic, title, message).await?;
        Ok(Response::ok())
    }
}

#[cfg(test)]
#[path = "notify_push_tests.rs"]
mod tests;
