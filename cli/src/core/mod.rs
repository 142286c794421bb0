//! # RuleBot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use rulebot::core::config; // For loading configuration
//! use rulebot::core::error::{RulebotError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
