// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Desktop notification port backing the notification-desktop handler
//! (spec §4.3.9).

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DesktopError {
    #[error("send failed: {0}")]
    SendFailed(String),
}

/// Injected command runner for displaying a host OS notification.
#[async_trait]
pub trait DesktopPort: Send + Sync + 'static {
    async fn notify(&self, title: &str, message: &str) -> Result<(), DesktopError>;
}

/// Desktop notification adapter using notify-rust.
///
/// On macOS, `notify-rust` uses `mac-notification-sys` (Cocoa bindings) to
/// send notifications via the Notification Center. The first notification
/// triggers `ensure_application_set()` which runs an AppleScript to look up
/// a bundle identifier. In a process without Automation permissions, that
/// AppleScript blocks forever. We pre-set the bundle identifier at
/// construction time to bypass the lookup entirely.
#[derive(Clone, Copy, Debug, Default)]
pub struct DesktopNotifyAdapter;

impl DesktopNotifyAdapter {
    pub fn new() -> Self {
        #[cfg(target_os = "macos")]
        {
            let _ = mac_notification_sys::set_application("com.apple.Terminal");
        }
        Self
    }
}

#[async_trait]
impl DesktopPort for DesktopNotifyAdapter {
    async fn notify(&self, title: &str, message: &str) -> Result<(), DesktopError> {
        let title = title.to_string();
        let message = message.to_string();
        // notify_rust::Notification::show() is synchronous on macOS, so it
        // runs on tokio's bounded blocking thread pool rather than the async
        // runtime. The handle is awaited (bounded by the caller's own
        // deadline) so the process doesn't exit before the banner is shown.
        let task = tokio::task::spawn_blocking(move || {
            tracing::info!(%title, %message, "sending desktop notification");
            match notify_rust::Notification::new().summary(&title).body(&message).show() {
                Ok(_) => tracing::info!(%title, "desktop notification sent"),
                Err(error) => tracing::warn!(%title, %error, "desktop notification failed"),
            }
        });
        match tokio::time::timeout(hk_core::NOTIFICATION_DEADLINE, task).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(error)) => Err(DesktopError::SendFailed(error.to_string())),
            Err(_) => Err(DesktopError::SendFailed("desktop notification exceeded its deadline".to_string())),
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{DesktopError, DesktopPort};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Debug, Clone)]
    pub struct DesktopCall {
        pub title: String,
        pub message: String,
    }

    #[derive(Clone, Default)]
    pub struct FakeDesktopPort {
        calls: Arc<Mutex<Vec<DesktopCall>>>,
    }

    impl FakeDesktopPort {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn calls(&self) -> Vec<DesktopCall> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl DesktopPort for FakeDesktopPort {
        async fn notify(&self, title: &str, message: &str) -> Result<(), DesktopError> {
            self.calls
                .lock()
                .push(DesktopCall { title: title.to_string(), message: message.to_string() });
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{DesktopCall, FakeDesktopPort};

#[cfg(test)]
#[path = "desktop_tests.rs"]
mod tests;
