// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log compaction (spec §4.3.7): appends a timestamped line to the global
//! compaction audit file whenever the host compacts the transcript.

use async_trait::async_trait;
use hk_core::{Clock, Handler, HookInput, Response};
use hk_state::compaction_log;
use std::path::PathBuf;
use std::sync::Arc;

pub struct LogCompactionHandler<C: Clock> {
    dir: PathBuf,
    clock: Arc<C>,
}

impl<C: Clock> LogCompactionHandler<C> {
    pub fn new(dir: PathBuf, clock: Arc<C>) -> Self {
        Self { dir, clock }
    }
}

#[async_trait]
impl<C: Clock + 'static> Handler for LogCompactionHandler<C> {
    fn name(&self) -> &str {
        "log-compaction"
    }

    async fn handle(&self, _input: &HookInput) -> anyhow::Result<Response> {
        compaction_log::record(&self.dir, self.clock.as_ref(), "triggered");
        Ok(Response::ok())
    }
}

#[cfg(test)]
#[path = "log_compaction_tests.rs"]
mod tests;
