// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared deadline constants for handler-initiated I/O (spec §4.2 "Handler
//! deadlines"): every handler's external call is bounded so one slow
//! notification sink can't stall the dispatcher past the host's own hook
//! timeout.

use std::time::Duration;

/// Upper bound on a single notification side effect (audio playback, a
/// desktop banner, or a push gateway POST).
pub const NOTIFICATION_DEADLINE: Duration = Duration::from_secs(5);
