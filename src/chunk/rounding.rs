//! Alignment of the leading chunk
//!
//! The first chunk may start anywhere inside a period. To find where that
//! period ends, the start is snapped down to the period boundary (every finer
//! field reset to its calendar minimum, the unit's own field reset to the
//! closest multiple of `count`) and one full step is added.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::spec::IntervalSpec;
use super::unit::IntervalUnit;

/// Per-field replacement values; `None` keeps the original field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundingTemplate {
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    pub nanosecond: Option<u32>,
}

impl RoundingTemplate {
    /// Build the template that snaps `start` down to its period boundary
    pub fn derive(spec: IntervalSpec, start: NaiveDateTime) -> Self {
        let unit = spec.unit();
        let count = spec.count();

        let mut template = Self {
            nanosecond: Some(0),
            ..Self::default()
        };
        for finer in unit.finer() {
            template.set(finer, finer.field_minimum());
        }

        if let Some(factor) = unit.containment_factor() {
            if count > 1 {
                if let Some(value) = field_value(start, unit) {
                    let boundary = closest_boundary(unit.field_minimum(), factor, count, value);
                    template.set(unit, boundary);
                }
            }
        }

        template
    }

    /// Replace the templated fields of `dt`.
    ///
    /// Returns `None` only if the replaced fields form an invalid date.
    pub fn apply(&self, dt: NaiveDateTime) -> Option<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(
            dt.year(),
            self.month.unwrap_or(dt.month()),
            self.day.unwrap_or(dt.day()),
        )?;
        let time = NaiveTime::from_hms_nano_opt(
            self.hour.unwrap_or(dt.hour()),
            self.minute.unwrap_or(dt.minute()),
            self.second.unwrap_or(dt.second()),
            self.nanosecond.unwrap_or(dt.nanosecond()),
        )?;
        Some(date.and_time(time))
    }

    fn set(&mut self, unit: IntervalUnit, value: u32) {
        match unit {
            IntervalUnit::Years => {}
            IntervalUnit::Months => self.month = Some(value),
            IntervalUnit::Days => self.day = Some(value),
            IntervalUnit::Hours => self.hour = Some(value),
            IntervalUnit::Minutes => self.minute = Some(value),
            IntervalUnit::Seconds => self.second = Some(value),
        }
    }
}

fn field_value(dt: NaiveDateTime, unit: IntervalUnit) -> Option<u32> {
    match unit {
        IntervalUnit::Years => None,
        IntervalUnit::Months => Some(dt.month()),
        IntervalUnit::Days => Some(dt.day()),
        IntervalUnit::Hours => Some(dt.hour()),
        IntervalUnit::Minutes => Some(dt.minute()),
        IntervalUnit::Seconds => Some(dt.second()),
    }
}

/// Greatest period boundary `<= value`.
///
/// Boundaries are `base, base + count, base + 2 * count, ...` for
/// `factor / count` steps; `base` is 1 for months and 0 for clock fields.
fn closest_boundary(base: u32, factor: u32, count: u32, value: u32) -> u32 {
    (0..factor / count)
        .map(|i| base + i * count)
        .take_while(|boundary| *boundary <= value)
        .last()
        .unwrap_or(base)
}
