//! "Advance by N units" arithmetic
//!
//! Clock units move by a fixed elapsed duration. Calendar units move by whole
//! months, letting chrono clamp the day-of-month (Jan 31 + 1 month = Feb 28/29).

use chrono::{Months, NaiveDateTime, TimeDelta};

/// A single period length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Fixed elapsed time (seconds, minutes, hours, days)
    Fixed(TimeDelta),
    /// Calendar shift in whole months (months, years)
    Calendar(Months),
}

impl Step {
    pub fn fixed(delta: TimeDelta) -> Self {
        Step::Fixed(delta)
    }

    pub fn months(count: u32) -> Self {
        Step::Calendar(Months::new(count))
    }

    /// Advance `from` by one step.
    ///
    /// Returns `None` when the result falls outside chrono's representable range.
    pub fn advance(&self, from: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            Step::Fixed(delta) => from.checked_add_signed(*delta),
            Step::Calendar(months) => from.checked_add_months(*months),
        }
    }
}
