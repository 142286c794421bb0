//! # RuleBot CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//!
//! ## Overview
//!
//! Drives `rulebot chat` through stdin and checks the transcript on stdout.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_chat_session_transcript() {
    Sandbox::new()
        .cmd()
        .args(["chat", "--seed", "1"])
        .write_stdin("what is your name\n\nopen the pod bay doors\n/quit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Chat with RuleBot! Type /quit to leave.")
                .and(predicate::str::contains("RuleBot: You can call me RuleBot."))
                .and(predicate::str::contains(
                    "RuleBot: I'm sorry, Dave. I'm afraid I can't do that.",
                )),
        );
}

#[test]
fn test_chat_ends_on_eof() {
    Sandbox::new()
        .cmd()
        .arg("chat")
        .write_stdin("see ya")
        .assert()
        .success()
        .stdout(predicate::str::contains("RuleBot: Goodbye! Have a great day."));
}

#[test]
fn test_chat_uses_configured_labels() {
    Sandbox::with_config("[chat]\nuser_label = \"Dave\"\nbot_label = \"HAL\"\n")
        .cmd()
        .arg("chat")
        .write_stdin("are you human\n/exit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Chat with HAL!").and(predicate::str::contains(
                "Dave: HAL: No, I am a computer program designed to respond to your inputs.",
            )),
        );
}
