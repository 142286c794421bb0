//! # RuleBot Clock Sources
//!
//! File: cli/src/responder/clock.rs
//!
//! ## Overview
//!
//! The time and date rules never read the system clock directly. They ask a
//! [`Clock`] for the current wall-clock value, which lets tests pin the moment
//! with [`FixedClock`] and lets the config choose between local time and UTC.
//!
//! Formatting follows the en-US layout the chat UI always showed:
//! - time of day: `3:04:05 PM`
//! - long date: `Sunday, October 18, 2026`
//!
use chrono::{Local, NaiveDateTime, Utc};
use serde::Deserialize;

/// A source of "now" as a naive wall-clock value.
///
/// Implementations must be shareable across threads because one `Responder`
/// serves every connection of the HTTP host.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host's local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Reads UTC, for hosts that run in containers without a configured zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct UtcClock;

impl Clock for UtcClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Which clock a responder should use, as written in `[responder] clock = "..."`.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClockKind {
    #[default]
    Local,
    Utc,
}

impl ClockKind {
    pub fn into_clock(self) -> Box<dyn Clock> {
        match self {
            ClockKind::Local => Box::new(SystemClock),
            ClockKind::Utc => Box::new(UtcClock),
        }
    }
}

/// Formats the time of day on a 12-hour clock, e.g. `9:05:00 AM`.
pub fn format_time_of_day(moment: &NaiveDateTime) -> String {
    moment.format("%-I:%M:%S %p").to_string()
}

/// Formats the full date, e.g. `Sunday, October 18, 2026`.
pub fn format_long_date(moment: &NaiveDateTime) -> String {
    moment.format("%A, %B %-d, %Y").to_string()
}
