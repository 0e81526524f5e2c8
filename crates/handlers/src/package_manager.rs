// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Package manager detection (spec §4.3.2): persists the detected (or
//! configured) package manager into the host's per-project env file.

use async_trait::async_trait;
use hk_core::{Handler, HookInput, Response};
use std::path::Path;

/// Lockfile name to manager name, checked in this order when more than one
/// is present (ties break by listing `yarn`/`pnpm`/`bun`/`npm` in that
/// preference order).
const LOCKFILES: &[(&str, &str)] =
    &[("yarn.lock", "yarn"), ("pnpm-lock.yaml", "pnpm"), ("bun.lockb", "bun"), ("package-lock.json", "npm")];

pub struct PackageManagerHandler {
    preferred_override: Option<String>,
}

impl PackageManagerHandler {
    pub fn new(preferred_override: Option<String>) -> Self {
        Self { preferred_override }
    }

    fn detect(cwd: &Path) -> Option<&'static str> {
        LOCKFILES.iter().find(|(lockfile, _)| cwd.join(lockfile).exists()).map(|(_, manager)| *manager)
    }
}

#[async_trait]
impl Handler for PackageManagerHandler {
    fn name(&self) -> &str {
        "package-manager"
    }

    async fn handle(&self, input: &HookInput) -> anyhow::Result<Response> {
        let cwd = Path::new(&input.cwd);
        let manager = match &self.preferred_override {
            Some(preferred) => preferred.clone(),
            None => match Self::detect(cwd) {
                Some(manager) => manager.to_string(),
                None => return Ok(Response::ok()),
            },
        };

        let env_dir = cwd.join(".claude");
        std::fs::create_dir_all(&env_dir)?;
        let env_path = env_dir.join(".env");
        std::fs::write(env_path, format!("PREFERRED_PACKAGE_MANAGER={manager}\n"))?;
        Ok(Response::ok())
    }
}

#[cfg(test)]
#[path = "package_manager_tests.rs"]
mod tests;
