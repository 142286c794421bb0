//! # RuleBot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`ask.rs`, `chat.rs`, ...).
//! Every command is run inside a fresh temporary directory with
//! `RULEBOT_CONFIG` pointing at a config file in that directory, so neither the
//! developer's user config nor a stray `.rulebot.toml` can change the output.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// # Get RuleBot Command (`rulebot_cmd`)
///
/// `assert_cmd::Command` for the compiled `rulebot` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn rulebot_cmd() -> Command {
    Command::cargo_bin("rulebot").expect("Failed to find rulebot binary for testing")
}

/// An isolated working directory with its own config file.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    /// Sandbox whose config file holds `config_toml`.
    pub fn with_config(config_toml: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("config.toml"), config_toml).expect("Failed to write config");
        Self { dir }
    }

    /// Sandbox with an empty config file (all defaults).
    pub fn new() -> Self {
        Self::with_config("")
    }

    /// `rulebot` command running inside the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = rulebot_cmd();
        cmd.current_dir(self.dir.path())
            .env("RULEBOT_CONFIG", self.dir.path().join("config.toml"))
            .env_remove("RUST_LOG");
        cmd
    }
}
