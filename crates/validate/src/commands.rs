// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command discovery (spec §4.4 "Command discovery"): picks the first
//! matching recipe provider in the project root and derives the lint/test
//! invocations.

use std::path::Path;

/// A discovered lint/test invocation: the program and its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self { program: program.into(), args: args.iter().map(|a| a.to_string()).collect() }
    }
}

/// The lint/test commands resolved for a project root. Either half may be
/// absent, meaning that check is trivially passing (spec §4.4).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveredCommands {
    pub lint: Option<Invocation>,
    pub test: Option<Invocation>,
}

fn file_contains_task(root: &Path, file: &str, needle: &str) -> bool {
    std::fs::read_to_string(root.join(file)).map(|contents| contents.contains(needle)).unwrap_or(false)
}

fn package_json_scripts(root: &Path) -> Option<serde_json::Map<String, serde_json::Value>> {
    let raw = std::fs::read_to_string(root.join("package.json")).ok()?;
    let value: serde_json::Value = serde_json::from_str(&raw).ok()?;
    value.get("scripts")?.as_object().cloned()
}

/// Discover lint/test commands for `root`, preferring `package_manager` (the
/// output of the package-manager-detection handler) as the `package.json`
/// script runner.
pub fn discover(root: &Path, package_manager: &str) -> DiscoveredCommands {
    if root.join("Taskfile.yml").is_file() {
        let has_lint = file_contains_task(root, "Taskfile.yml", "lint:");
        let has_test = file_contains_task(root, "Taskfile.yml", "test:");
        return DiscoveredCommands {
            lint: has_lint.then(|| Invocation::new("task", &["lint"])),
            test: has_test.then(|| Invocation::new("task", &["test"])),
        };
    }

    for justfile in ["justfile", "Justfile"] {
        if root.join(justfile).is_file() {
            let has_lint = file_contains_task(root, justfile, "\nlint:") || file_contains_task(root, justfile, "lint:");
            let has_test = file_contains_task(root, justfile, "\ntest:") || file_contains_task(root, justfile, "test:");
            return DiscoveredCommands {
                lint: has_lint.then(|| Invocation::new("just", &["lint"])),
                test: has_test.then(|| Invocation::new("just", &["test"])),
            };
        }
    }

    if root.join("Makefile").is_file() {
        let has_lint = file_contains_task(root, "Makefile", "\nlint:");
        let has_test = file_contains_task(root, "Makefile", "\ntest:");
        return DiscoveredCommands {
            lint: has_lint.then(|| Invocation::new("make", &["lint"])),
            test: has_test.then(|| Invocation::new("make", &["test"])),
        };
    }

    if root.join("package.json").is_file() {
        let scripts = package_json_scripts(root).unwrap_or_default();
        let runner = match package_manager {
            "yarn" => "yarn",
            "pnpm" => "pnpm",
            "bun" => "bun",
            _ => "npm",
        };
        let run_args: &[&str] = if runner == "npm" { &["run"] } else { &[] };
        let make_invocation = |script: &str| {
            let mut args: Vec<&str> = run_args.to_vec();
            args.push(script);
            Invocation::new(runner, &args)
        };
        return DiscoveredCommands {
            lint: scripts.contains_key("lint").then(|| make_invocation("lint")),
            test: scripts.contains_key("test").then(|| make_invocation("test")),
        };
    }

    if root.join("Cargo.toml").is_file() {
        return DiscoveredCommands {
            lint: Some(Invocation::new("cargo", &["clippy", "--all-targets", "--", "-D", "warnings"])),
            test: Some(Invocation::new("cargo", &["test"])),
        };
    }

    if root.join("pyproject.toml").is_file() {
        return DiscoveredCommands {
            lint: Some(Invocation::new("ruff", &["check", "."])),
            test: Some(Invocation::new("pytest", &[])),
        };
    }

    if root.join("go.mod").is_file() {
        return DiscoveredCommands {
            lint: Some(Invocation::new("go", &["vet", "./..."])),
            test: Some(Invocation::new("go", &["test", "./..."])),
        };
    }

    DiscoveredCommands::default()
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
