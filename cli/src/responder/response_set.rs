//! # RuleBot Response Sets
//!
//! File: cli/src/responder/response_set.rs
//!
//! A response set is a fixed list of interchangeable replies. Picking from it
//! is uniform over its length. Sets are built in `const` context, so an empty
//! set is rejected when the crate compiles rather than when a user is chatting.
//!
use rand::Rng;

/// Non-empty, ordered list of candidate replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseSet {
    candidates: &'static [&'static str],
}

impl ResponseSet {
    /// Wraps `candidates`. Panics (at compile time for `const` items) if empty.
    pub const fn new(candidates: &'static [&'static str]) -> Self {
        assert!(
            !candidates.is_empty(),
            "a response set needs at least one candidate"
        );
        Self { candidates }
    }

    pub fn candidates(&self) -> &'static [&'static str] {
        self.candidates
    }

    pub fn contains(&self, reply: &str) -> bool {
        self.candidates.iter().any(|c| *c == reply)
    }

    /// Uniformly picks one candidate.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.candidates[rng.gen_range(0..self.candidates.len())]
    }
}
