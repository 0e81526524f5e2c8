// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Audio notification port backing the notification-audio handler
//! (spec §4.3.8). Playback is delegated to a platform command rather than an
//! in-process decoder, consistent with the desktop port's shell-out style.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio files found in directory")]
    Empty,
    #[error("playback failed: {0}")]
    PlaybackFailed(String),
    #[error("playback exceeded its deadline")]
    TimedOut,
}

/// Injected audio player.
#[async_trait]
pub trait AudioPort: Send + Sync + 'static {
    async fn play(&self, path: &Path) -> Result<(), AudioError>;
}

/// Picks a random file from a directory, then plays it via the host's
/// command-line audio player (`afplay` on macOS, `paplay` on Linux).
#[derive(Clone, Copy, Debug, Default)]
pub struct CommandAudioPlayer;

impl CommandAudioPlayer {
    pub fn new() -> Self {
        Self
    }

    /// Select a random entry from `dir`. Returns `None` when the directory
    /// is missing or has no entries.
    pub fn choose_random(dir: &Path) -> Option<PathBuf> {
        let entries: Vec<PathBuf> = std::fs::read_dir(dir)
            .ok()?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        if entries.is_empty() {
            return None;
        }
        let index = rand::random::<usize>() % entries.len();
        Some(entries[index].clone())
    }
}

#[async_trait]
impl AudioPort for CommandAudioPlayer {
    async fn play(&self, path: &Path) -> Result<(), AudioError> {
        let player = if cfg!(target_os = "macos") { "afplay" } else { "paplay" };
        let path = path.to_path_buf();
        let mut child = tokio::process::Command::new(player)
            .arg(&path)
            .spawn()
            .map_err(|error| AudioError::PlaybackFailed(error.to_string()))?;

        match tokio::time::timeout(hk_core::NOTIFICATION_DEADLINE, child.wait()).await {
            Ok(Ok(status)) => {
                if !status.success() {
                    tracing::warn!(path = %path.display(), "audio player exited with failure");
                }
                Ok(())
            }
            Ok(Err(error)) => Err(AudioError::PlaybackFailed(error.to_string())),
            Err(_) => {
                let _ = child.start_kill();
                tracing::warn!(path = %path.display(), "audio player exceeded its deadline");
                Err(AudioError::TimedOut)
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{AudioError, AudioPort};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    pub struct FakeAudioPort {
        played: Arc<Mutex<Vec<PathBuf>>>,
    }

    impl FakeAudioPort {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn played(&self) -> Vec<PathBuf> {
            self.played.lock().clone()
        }
    }

    #[async_trait]
    impl AudioPort for FakeAudioPort {
        async fn play(&self, path: &Path) -> Result<(), AudioError> {
            self.played.lock().push(path.to_path_buf());
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeAudioPort;

#[cfg(test)]
#[path = "audio_tests.rs"]
mod tests;
