// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use hk_core::EventName;
use tempfile::tempdir;

fn input_with_cwd(cwd: &Path) -> HookInput {
    HookInput { event_name: EventName::SessionStart, cwd: cwd.display().to_string(), ..HookInput::default() }
}

#[tokio::test]
async fn no_lockfile_produces_no_env_file() {
    let cwd = tempdir().unwrap();
    let handler = PackageManagerHandler::new(None);
    handler.handle(&input_with_cwd(cwd.path())).await.unwrap();
    assert!(!cwd.path().join(".claude/.env").exists());
}

#[tokio::test]
async fn detects_yarn_over_npm_when_both_present() {
    let cwd = tempdir().unwrap();
    std::fs::write(cwd.path().join("yarn.lock"), "").unwrap();
    std::fs::write(cwd.path().join("package-lock.json"), "").unwrap();

    let handler = PackageManagerHandler::new(None);
    handler.handle(&input_with_cwd(cwd.path())).await.unwrap();
    let contents = std::fs::read_to_string(cwd.path().join(".claude/.env")).unwrap();
    assert_eq!(contents, "PREFERRED_PACKAGE_MANAGER=yarn\n");
}

#[tokio::test]
async fn config_override_wins_over_detection() {
    let cwd = tempdir().unwrap();
    std::fs::write(cwd.path().join("yarn.lock"), "").unwrap();

    let handler = PackageManagerHandler::new(Some("pnpm".to_string()));
    handler.handle(&input_with_cwd(cwd.path())).await.unwrap();
    let contents = std::fs::read_to_string(cwd.path().join(".claude/.env")).unwrap();
    assert_eq!(contents, "PREFERRED_PACKAGE_MANAGER=pnpm\n");
}
