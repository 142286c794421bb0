//! # RuleBot Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the `rulebot` CLI. Each
//! command defines its own clap arguments struct and an async `handle_*`
//! function that `main.rs` dispatches to.
//!
//! ## Command Groups
//!
//! - `ask`: classify one utterance and print the reply
//! - `chat`: interactive read-classify-print loop
//! - `rules`: print the rule table in priority order
//! - `srv`: HTTP JSON endpoint around the responder
//!

/// One-shot classification. `rulebot ask what is 5 + 3`.
pub mod ask;
/// Interactive session on stdin/stdout.
pub mod chat;
/// Lists the rule table.
pub mod rules;
/// HTTP server exposing the responder. Includes configuration and server logic.
pub mod srv;
