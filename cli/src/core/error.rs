//! # RuleBot Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used by the RuleBot hosts. The
//! responder itself has no error path (every utterance gets a reply), so the
//! variants here cover the surfaces around it: configuration, user input at
//! the host boundary, and the HTTP server.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `RulebotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! use rulebot::core::error::{Result, RulebotError};
//!
//! fn check(text: &str) -> Result<&str> {
//!     if text.trim().is_empty() {
//!         return Err(RulebotError::EmptyMessage.into());
//!     }
//!     Ok(text)
//! }
//! assert!(check("   ").is_err());
//! ```
//!
use thiserror::Error;

/// Custom error type for the RuleBot application.
#[derive(Error, Debug)]
pub enum RulebotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Message text cannot be empty.")]
    EmptyMessage,

    #[error("Server error: {0}")]
    Server(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
