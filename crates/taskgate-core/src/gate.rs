//! The decision engine.
//!
//! Given a [`RuleSet`] and a [`Moment`], produce exactly one [`Decision`].
//! Checks run in a fixed short-circuit order: the kill switch first (no
//! time computation when the task is simply off), then day, then hour —
//! day before hour because day granularity is coarser and the more common
//! manual override.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::rules::{RuleSet, WEEKDAY_TOKENS};

/// The slice of "now" the engine needs: a weekday token and an hour.
///
/// Production builds one from `chrono::Local::now()`; which time zone that
/// reflects is the host's business, not the engine's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    /// Three-letter weekday token, Mon..Sun.
    pub day: &'static str,
    /// Hour of day, 0..=23, 24-hour clock.
    pub hour: u8,
}

impl Moment {
    pub fn new(day: &'static str, hour: u8) -> Self {
        Self { day, hour }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Moment {
    fn from(now: DateTime<Tz>) -> Self {
        Self {
            day: WEEKDAY_TOKENS[now.weekday().num_days_from_monday() as usize],
            hour: now.hour() as u8,
        }
    }
}

/// The single outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// All checks passed; the task body may run.
    Run,
    /// The kill switch is off.
    DeniedDisabled,
    /// Today's token is not in the allowed set.
    DeniedDay { day: &'static str },
    /// The current hour falls outside the allowed range.
    DeniedHour { hour: u8 },
}

impl Decision {
    /// The log line this decision owes the run log.
    pub fn message(&self) -> String {
        match self {
            Decision::Run => "Running main task...".to_string(),
            Decision::DeniedDisabled => "Task disabled via config".to_string(),
            Decision::DeniedDay { day } => format!("Not an allowed day: {day}"),
            Decision::DeniedHour { hour } => format!("Outside allowed hours: {hour}"),
        }
    }

    pub fn is_run(&self) -> bool {
        matches!(self, Decision::Run)
    }
}

/// Evaluate the rules against a moment in time.
///
/// Pure and stateless: no I/O, no caching, one decision per call.
pub fn decide(rules: &RuleSet, moment: Moment) -> Decision {
    if !rules.enabled {
        return Decision::DeniedDisabled;
    }
    if !rules.allows_day(moment.day) {
        return Decision::DeniedDay { day: moment.day };
    }
    if !rules.allows_hour(moment.hour) {
        return Decision::DeniedHour { hour: moment.hour };
    }
    Decision::Run
}
