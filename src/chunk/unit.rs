use serde::{Deserialize, Serialize};

use super::step::Step;

/// The calendar/clock granularity chunks are aligned to
///
/// Variants are declared from coarsest to finest, so the derived ordering
/// follows containment: `Years < Months < ... < Seconds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalUnit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl IntervalUnit {
    /// All units, coarsest first
    pub const ALL: [IntervalUnit; 6] = [
        IntervalUnit::Years,
        IntervalUnit::Months,
        IntervalUnit::Days,
        IntervalUnit::Hours,
        IntervalUnit::Minutes,
        IntervalUnit::Seconds,
    ];

    /// Parse a unit from a string (supports singular forms and short aliases)
    /// - years: y, yr, year, years
    /// - months: mo, mon, month, months
    /// - days: d, day, days
    /// - hours: h, hr, hour, hours
    /// - minutes: m, min, minute, minutes
    /// - seconds: s, sec, second, seconds
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "y" | "yr" | "year" | "years" => Some(IntervalUnit::Years),
            "mo" | "mon" | "month" | "months" => Some(IntervalUnit::Months),
            "d" | "day" | "days" => Some(IntervalUnit::Days),
            "h" | "hr" | "hour" | "hours" => Some(IntervalUnit::Hours),
            "m" | "min" | "minute" | "minutes" => Some(IntervalUnit::Minutes),
            "s" | "sec" | "second" | "seconds" => Some(IntervalUnit::Seconds),
            _ => None,
        }
    }

    /// Get the canonical (plural) name
    pub fn as_str(&self) -> &'static str {
        match self {
            IntervalUnit::Years => "years",
            IntervalUnit::Months => "months",
            IntervalUnit::Days => "days",
            IntervalUnit::Hours => "hours",
            IntervalUnit::Minutes => "minutes",
            IntervalUnit::Seconds => "seconds",
        }
    }

    /// Number of this unit inside the next larger fixed-cardinality unit.
    ///
    /// `None` for days (a month has a variable number of days) and years
    /// (nothing above them).
    pub fn containment_factor(&self) -> Option<u32> {
        match self {
            IntervalUnit::Seconds => Some(60),
            IntervalUnit::Minutes => Some(60),
            IntervalUnit::Hours => Some(24),
            IntervalUnit::Days => None,
            IntervalUnit::Months => Some(12),
            IntervalUnit::Years => None,
        }
    }

    /// Smallest legal value of this unit's calendar field.
    ///
    /// Months and days count from 1, clock fields from 0. Years have no
    /// reset value since nothing coarser exists to align them to.
    pub fn field_minimum(&self) -> u32 {
        match self {
            IntervalUnit::Months | IntervalUnit::Days => 1,
            _ => 0,
        }
    }

    /// Units strictly finer than this one, coarsest first
    pub fn finer(self) -> impl Iterator<Item = IntervalUnit> {
        Self::ALL.into_iter().filter(move |u| *u > self)
    }

    /// True for units whose length depends on the calendar
    pub fn is_calendar(&self) -> bool {
        matches!(self, IntervalUnit::Years | IntervalUnit::Months)
    }

    /// Build the "advance by `count` of this unit" operation
    pub fn step(&self, count: u32) -> Step {
        match self {
            IntervalUnit::Years => Step::months(count.saturating_mul(12)),
            IntervalUnit::Months => Step::months(count),
            IntervalUnit::Days => Step::fixed(chrono::TimeDelta::days(i64::from(count))),
            IntervalUnit::Hours => Step::fixed(chrono::TimeDelta::hours(i64::from(count))),
            IntervalUnit::Minutes => Step::fixed(chrono::TimeDelta::minutes(i64::from(count))),
            IntervalUnit::Seconds => Step::fixed(chrono::TimeDelta::seconds(i64::from(count))),
        }
    }
}

impl std::fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
