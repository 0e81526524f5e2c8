// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handler contract (spec §4.3): a small, independent processor that reacts
//! to one event kind.

use crate::model::{HookInput, Response};
use async_trait::async_trait;

/// A single-method handler. Implementations are small values carrying their
/// own configuration view and adapters; tests inject fakes through
/// constructor options that default to production adapters when absent
/// (spec §9 "Handler composition").
#[async_trait]
pub trait Handler: Send + Sync {
    /// Stable, human-readable name used in error formatting (spec §4.2).
    fn name(&self) -> &str;

    /// Process one event. Errors are captured by the registry into merged
    /// stderr and never raise the merged exit code on their own — only an
    /// explicit blocking [`Response`] does that.
    async fn handle(&self, input: &HookInput) -> anyhow::Result<Response>;
}
