//! # RuleBot CLI Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//!
//! ## Overview
//!
//! Runs `rulebot ask` end to end and checks the printed reply.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_ask_arithmetic() {
    Sandbox::new()
        .cmd()
        .args(["ask", "what", "is", "5", "+", "3"])
        .assert()
        .success()
        .stdout("The answer is 8.\n");
}

#[test]
fn test_ask_single_quoted_argument() {
    Sandbox::new()
        .cmd()
        .args(["ask", "4 * 2.5"])
        .assert()
        .success()
        .stdout("The answer is 10.\n");
}

#[test]
fn test_ask_divide_by_zero() {
    Sandbox::new()
        .cmd()
        .args(["ask", "what is 5 / 0"])
        .assert()
        .success()
        .stdout("I cannot divide by zero.\n");
}

#[test]
fn test_ask_explain_names_rule() {
    Sandbox::new()
        .cmd()
        .args(["ask", "--explain", "WHO ARE YOU"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[identity]\nI am RuleBot"));
}

#[test]
fn test_ask_seed_makes_reply_repeatable() {
    let sandbox = Sandbox::new();
    let first = sandbox
        .cmd()
        .args(["ask", "--seed", "12", "tell", "me", "a", "joke"])
        .output()
        .unwrap();
    let second = sandbox
        .cmd()
        .args(["ask", "--seed", "12", "tell", "me", "a", "joke"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_ask_seed_from_config_file() {
    let seeded = Sandbox::with_config("[responder]\nseed = 12\n");
    let from_file = seeded.cmd().args(["ask", "hello"]).output().unwrap();
    let from_flag = Sandbox::new()
        .cmd()
        .args(["ask", "--seed", "12", "hello"])
        .output()
        .unwrap();
    assert_eq!(from_file.stdout, from_flag.stdout);
}

#[test]
fn test_ask_blank_input_fails() {
    Sandbox::new()
        .cmd()
        .args(["ask", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Message text cannot be empty."));
}

#[test]
fn test_ask_requires_words() {
    Sandbox::new().cmd().arg("ask").assert().failure();
}
