//! # RuleBot Normalizer
//!
//! File: cli/src/responder/normalize.rs
//!
//! Every rule predicate sees the same folded copy of the utterance.

/// Trimmed, lower-cased copy of `raw`. The caller's string is left untouched.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
