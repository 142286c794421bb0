//! # RuleBot CLI Srv Integration Tests
//!
//! File: cli/tests/srv.rs
//!
//! ## Overview
//!
//! Integration tests for `rulebot srv`. Route behaviour is covered by the
//! router tests in `server_logic.rs`; here only argument handling is checked,
//! since a successfully started server blocks until it is signalled.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_srv_rejects_invalid_host() {
    Sandbox::new()
        .cmd()
        .args(["srv", "--host", "not-an-ip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_srv_help_mentions_flags() {
    rulebot_cmd()
        .args(["srv", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-cors").and(predicate::str::contains("--seed")));
}
