//! # RuleBot
//!
//! File: cli/src/lib.rs
//!
//! Library side of the `rulebot` crate. The responder is usable on its own:
//!
//! ```rust
//! assert_eq!(rulebot::responder::classify("4 * 2.5"), "The answer is 10.");
//! ```
//!
//! The `commands` modules are the CLI hosts built on top of it; `main.rs`
//! only parses arguments, sets up logging and dispatches to them.

pub mod commands;
pub mod core;
pub mod responder;
