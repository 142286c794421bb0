//! # RuleBot Responder
//!
//! File: cli/src/responder/mod.rs
//!
//! ## Overview
//!
//! The responder turns one free-text utterance into exactly one reply. It
//! normalizes the text, walks the ordered rule table and answers with the
//! first rule that matches. The final table entry always matches and picks
//! from the fallback set. There is no error path: every input, including the
//! empty string, yields a non-empty reply.
//!
//! ## Architecture
//!
//! - `normalize`: trimming and case folding
//! - `rules`: the priority-ordered table of matchers and producers
//! - `response_set`: uniform picks from fixed reply lists
//! - `arithmetic`: the `<number> <op> <number>` evaluator
//! - `clock`: injectable wall-clock sources for the time and date rules
//!
//! A [`Responder`] owns the two sources of non-determinism, a seedable
//! `StdRng` and a [`Clock`]. Calls are otherwise independent of each other.
//!
//! ## Examples
//!
//! ```rust
//! use rulebot::responder::{self, Responder};
//!
//! // Process-wide responder, entropy-seeded, local clock.
//! let reply = responder::classify("what is 5 + 3");
//! assert_eq!(reply, "The answer is 8.");
//!
//! // Reproducible picks for tests and demos.
//! let bot = Responder::seeded(42);
//! let reply = bot.explain("tell me a joke");
//! assert_eq!(reply.rule, "joke");
//! ```
//!
pub mod arithmetic;
pub mod clock;
pub mod normalize;
pub mod response_set;
pub mod rules;

use crate::core::config::ResponderConfig;
use clock::{format_long_date, format_time_of_day, Clock, SystemClock};
use normalize::normalize;
use rand::{rngs::StdRng, SeedableRng};
use response_set::ResponseSet;
use rules::{rules, Matched, Producer, FALLBACKS, FALLBACK_RULE};
use std::fmt;
use std::sync::{LazyLock, Mutex, PoisonError};
use tracing::{debug, warn};

static SHARED: LazyLock<Responder> = LazyLock::new(Responder::new);

/// Classifies `utterance` with the process-wide responder.
pub fn classify(utterance: &str) -> String {
    SHARED.classify(utterance)
}

/// A reply together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub rule: &'static str,
    pub text: String,
}

/// Rule dispatcher holding the random source and the clock.
pub struct Responder {
    rng: Mutex<StdRng>,
    clock: Box<dyn Clock>,
}

impl Responder {
    /// Entropy-seeded responder reading the local clock.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Responder whose random picks repeat for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Builds a responder from the `[responder]` config section.
    pub fn from_config(config: &ResponderConfig) -> Self {
        let responder = match config.seed {
            Some(seed) => {
                debug!("Seeding responder with {}", seed);
                Self::seeded(seed)
            }
            None => Self::new(),
        };
        responder.with_boxed_clock(config.clock.into_clock())
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the clock used by the time and date rules.
    pub fn with_clock(self, clock: impl Clock + 'static) -> Self {
        self.with_boxed_clock(Box::new(clock))
    }

    fn with_boxed_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the reply for `utterance`. Never fails, never returns "".
    pub fn classify(&self, utterance: &str) -> String {
        self.explain(utterance).text
    }

    /// Like [`classify`](Self::classify) but also names the rule that answered.
    pub fn explain(&self, utterance: &str) -> Reply {
        let text = normalize(utterance);

        rules()
            .iter()
            .find_map(|rule| {
                rule.matcher.matches(&text).map(|matched| {
                    debug!(rule = rule.name, "Rule matched");
                    Reply {
                        rule: rule.name,
                        text: self.produce(rule.producer, matched),
                    }
                })
            })
            .unwrap_or_else(|| Reply {
                rule: FALLBACK_RULE,
                text: self.pick(&FALLBACKS).to_string(),
            })
    }

    fn produce(&self, producer: Producer, matched: Matched) -> String {
        match producer {
            Producer::Static(text) => text.to_string(),
            Producer::Random(set) => self.pick(&set).to_string(),
            Producer::TimeOfDay => format!(
                "The current local time is {}.",
                format_time_of_day(&self.clock.now())
            ),
            Producer::LongDate => format!("Today is {}.", format_long_date(&self.clock.now())),
            Producer::Arithmetic => match matched {
                Matched::Expression(expr) => expr.reply(),
                Matched::Text => {
                    warn!("Arithmetic producer reached without an expression");
                    arithmetic::DIVIDE_BY_ZERO_REPLY.to_string()
                }
            },
        }
    }

    fn pick(&self, set: &ResponseSet) -> &'static str {
        // A panic while holding the lock cannot leave the RNG in a bad state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        set.pick(&mut *rng)
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Responder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Responder").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use super::clock::{ClockKind, FixedClock};
    use super::rules::{GREETINGS, IDENTITY_REPLY, JOKES, STATUS};
    use std::collections::HashSet;

    fn fixed_clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2026, 10, 18)
                .unwrap()
                .and_hms_opt(15, 4, 5)
                .unwrap(),
        )
    }

    #[test]
    fn test_time_and_date_use_injected_clock() {
        let bot = Responder::seeded(1).with_clock(fixed_clock());
        assert_eq!(
            bot.classify("what time is it?"),
            "The current local time is 3:04:05 PM."
        );
        assert_eq!(
            bot.classify("what's the date"),
            "Today is Sunday, October 18, 2026."
        );
        assert_eq!(
            bot.classify("which day is it"),
            "Today is Sunday, October 18, 2026."
        );
    }

    #[test]
    fn test_explain_names_the_rule() {
        let bot = Responder::seeded(3);
        let reply = bot.explain("Who are you?");
        assert_eq!(reply.rule, "identity");
        assert_eq!(reply.text, IDENTITY_REPLY);

        let reply = bot.explain("qwerty");
        assert_eq!(reply.rule, FALLBACK_RULE);
        assert!(FALLBACKS.contains(&reply.text));
    }

    #[test]
    fn test_seeded_responders_agree() {
        let a = Responder::seeded(2024);
        let b = Responder::seeded(2024);
        for input in ["hi", "tell me a joke", "how are you", "zzz", "hey"] {
            assert_eq!(a.classify(input), b.classify(input));
        }
    }

    #[test]
    fn test_random_rules_cover_their_sets() {
        let bot = Responder::seeded(11);
        for (input, set) in [("hello", GREETINGS), ("joke please", JOKES), ("how are you", STATUS)] {
            let seen: HashSet<String> = (0..400).map(|_| bot.classify(input)).collect();
            assert!(seen.iter().all(|s| set.contains(s)));
            assert_eq!(seen.len(), set.candidates().len(), "input '{}'", input);
        }
    }

    #[test]
    fn test_from_config_honours_seed() {
        let config = ResponderConfig {
            seed: Some(5),
            clock: ClockKind::Utc,
        };
        let a = Responder::from_config(&config);
        let b = Responder::seeded(5);
        for _ in 0..10 {
            assert_eq!(a.classify("yo"), b.classify("yo"));
        }
    }

    #[test]
    fn test_shared_classify_is_total() {
        assert!(!classify("").is_empty());
        assert_eq!(classify("what is 5 + 3"), "The answer is 8.");
    }

    #[test]
    fn test_responder_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Responder>();
    }
}
