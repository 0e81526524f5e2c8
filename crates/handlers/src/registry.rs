// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event→handler-chain map, dispatch, merge policy, and panic isolation
//! (spec §4.2).

use futures_util::FutureExt;
use hk_core::{EventName, Handler, HookInput, HookOutput, Response};
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// Maps each event to its ordered handler chain and runs it on dispatch.
#[derive(Default)]
pub struct Registry {
    chains: HashMap<EventName, Vec<Arc<dyn Handler>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` to run on `event`, appended after any handlers
    /// already registered for it (registration order drives merge order).
    pub fn register(&mut self, event: EventName, handler: Arc<dyn Handler>) {
        self.chains.entry(event).or_default().push(handler);
    }

    /// Run every handler registered for `input.event_name` in registration
    /// order and merge their responses (spec §4.2). Unknown events, or
    /// events with no registered handlers, yield the zero-value response.
    pub async fn dispatch(&self, input: &HookInput) -> Response {
        let Some(chain) = self.chains.get(&input.event_name) else {
            return Response::default();
        };

        let mut merged = Response::default();
        let mut stdout: Option<HookOutput> = None;
        let mut stderr = String::new();

        for handler in chain {
            let outcome =
                AssertUnwindSafe(handler.handle(input)).catch_unwind().await;
            match outcome {
                Ok(Ok(response)) => {
                    merged.exit_code = merged.exit_code.max(response.exit_code);
                    if stdout.is_none() {
                        stdout = response.stdout;
                    }
                    if !response.stderr.is_empty() {
                        stderr.push_str(&response.stderr);
                    }
                }
                Ok(Err(error)) => {
                    stderr.push_str(&format!("[{}] error: {error}\n", handler.name()));
                }
                Err(panic) => {
                    let message = panic_message(&panic);
                    stderr.push_str(&format!("[{}] error: panic: {message}\n", handler.name()));
                }
            }
        }

        merged.stdout = stdout;
        merged.stderr = stderr;
        merged
    }
}

/// Best-effort extraction of a human-readable message from a caught panic
/// payload, mirroring the formatting the standard panic hook uses.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
