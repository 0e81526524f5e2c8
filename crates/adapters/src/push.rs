// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Push notification port backing the notification-push handler
//! (spec §4.3.10).

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PushError {
    #[error("send failed: {0}")]
    SendFailed(String),
}

/// Injected push sender.
#[async_trait]
pub trait PushPort: Send + Sync + 'static {
    async fn send(&self, topic: &str, title: &str, message: &str) -> Result<(), PushError>;
}

/// Posts a JSON payload to `https://ntfy.sh/<topic>`-style push gateways.
#[derive(Clone)]
pub struct HttpPushSender {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPushSender {
    /// `client` is built with a request timeout so a hung push gateway can't
    /// stall the dispatcher past [`hk_core::NOTIFICATION_DEADLINE`].
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(hk_core::NOTIFICATION_DEADLINE)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client, base_url: base_url.into() }
    }
}

impl Default for HttpPushSender {
    fn default() -> Self {
        Self::new("https://ntfy.sh")
    }
}

#[async_trait]
impl PushPort for HttpPushSender {
    async fn send(&self, topic: &str, title: &str, message: &str) -> Result<(), PushError> {
        let url = format!("{}/{topic}", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Title", title)
            .body(message.to_string())
            .send()
            .await
            .map_err(|error| PushError::SendFailed(error.to_string()))?;
        if !response.status().is_success() {
            return Err(PushError::SendFailed(format!("status {}", response.status())));
        }
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{PushError, PushPort};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Debug, Clone)]
    pub struct PushCall {
        pub topic: String,
        pub title: String,
        pub message: String,
    }

    #[derive(Clone, Default)]
    pub struct FakePushPort {
        calls: Arc<Mutex<Vec<PushCall>>>,
    }

    impl FakePushPort {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn calls(&self) -> Vec<PushCall> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl PushPort for FakePushPort {
        async fn send(&self, topic: &str, title: &str, message: &str) -> Result<(), PushError> {
            self.calls.lock().push(PushCall {
                topic: topic.to_string(),
                title: title.to_string(),
                message: message.to_string(),
            });
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakePushPort, PushCall};

#[cfg(test)]
#[path = "push_tests.rs"]
mod tests;
