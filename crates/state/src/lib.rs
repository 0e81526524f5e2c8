// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hk-state: file-backed per-session and global state stores (spec §3.3).
//! Every writer in this crate applies the user-only permission mask via
//! [`perms`] and, where the identifying key is untrusted input, routes the
//! filename through `hk_core::paths::safe_join`.

pub mod compaction_log;
pub mod counter;
pub mod debug_trace;
pub mod drift;
pub mod observations;
pub mod perms;
pub mod session_record;

pub use debug_trace::DebugTrace;
pub use drift::DriftState;
pub use observations::Observation;
pub use session_record::SessionRecord;
