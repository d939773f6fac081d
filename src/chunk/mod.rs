//! Calendar-aligned chunking of time ranges
//!
//! Splits `[start, end)` into contiguous sub-ranges aligned to a calendar or
//! clock unit, so work can be attributed to the hour/day/month it happened in
//! even when the range starts and ends at arbitrary instants.
//!
//! ```text
//! start=11:35  end=12:20  minutes=15
//!
//!   11:30     11:45     12:00     12:15     12:30
//!     |    [==|=========|=========|====]    |
//!          ^ leap                      ^ leap
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let spec = IntervalSpec::new(IntervalUnit::Minutes, 15)?;
//! for (chunk_start, chunk_end) in chunk(start, end, spec)? {
//!     // ...
//! }
//! ```

mod error;
mod rounding;
mod spec;
mod step;
mod unit;

pub use error::ChunkError;
pub use rounding::RoundingTemplate;
pub use spec::IntervalSpec;
pub use step::Step;
pub use unit::IntervalUnit;

use std::iter::FusedIterator;

use chrono::NaiveDateTime;
use tracing::{debug, trace};

/// A validated chunking request.
///
/// Holds everything derived from the arguments; [`ChunkGenerator::iter`]
/// hands out independent cursors, so iterating twice yields the same chunks.
#[derive(Debug, Clone)]
pub struct ChunkGenerator {
    start: NaiveDateTime,
    end: NaiveDateTime,
    spec: IntervalSpec,
    rounding: RoundingTemplate,
    step: Step,
}

impl ChunkGenerator {
    /// Validate the range and derive the alignment for the leading chunk
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        spec: IntervalSpec,
    ) -> Result<Self, ChunkError> {
        if start == end {
            return Err(ChunkError::EmptyRange(start));
        }
        if start > end {
            return Err(ChunkError::InvalidRange { start, end });
        }

        let rounding = RoundingTemplate::derive(spec, start);
        let step = spec.unit().step(spec.count());

        debug!(
            %start,
            %end,
            %spec,
            calendar = spec.unit().is_calendar(),
            ?rounding,
            "Prepared chunk generator"
        );

        Ok(Self {
            start,
            end,
            spec,
            rounding,
            step,
        })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn spec(&self) -> IntervalSpec {
        self.spec
    }

    /// Fresh cursor positioned at `start`
    pub fn iter(&self) -> Chunks {
        Chunks {
            cursor: self.start,
            end: self.end,
            leading: true,
            rounding: self.rounding,
            step: self.step,
        }
    }
}

impl IntoIterator for ChunkGenerator {
    type Item = (NaiveDateTime, NaiveDateTime);
    type IntoIter = Chunks;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &ChunkGenerator {
    type Item = (NaiveDateTime, NaiveDateTime);
    type IntoIter = Chunks;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy, single-pass sequence of `(chunk_start, chunk_end)` pairs
#[derive(Debug, Clone)]
pub struct Chunks {
    cursor: NaiveDateTime,
    end: NaiveDateTime,
    leading: bool,
    rounding: RoundingTemplate,
    step: Step,
}

impl Chunks {
    fn period_end(&self) -> Option<NaiveDateTime> {
        if self.leading {
            // Snap down to the aligned boundary, then one full period forward
            let base = self.rounding.apply(self.cursor).unwrap_or(self.cursor);
            self.step.advance(base)
        } else {
            self.step.advance(self.cursor)
        }
    }
}

impl Iterator for Chunks {
    type Item = (NaiveDateTime, NaiveDateTime);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.end {
            return None;
        }

        // Past chrono's range is past `end` too
        let chunk_end = match self.period_end() {
            Some(period_end) if period_end < self.end => period_end,
            _ => self.end,
        };
        let chunk = (self.cursor, chunk_end);

        trace!(start = %chunk.0, end = %chunk.1, leading = self.leading, "Emitting chunk");

        self.leading = false;
        self.cursor = chunk_end;
        Some(chunk)
    }
}

impl FusedIterator for Chunks {}

/// Split `[start, end)` into chunks of `spec`.
///
/// Fails before producing anything if the range is empty or inverted.
pub fn chunk(
    start: NaiveDateTime,
    end: NaiveDateTime,
    spec: IntervalSpec,
) -> Result<Chunks, ChunkError> {
    ChunkGenerator::new(start, end, spec).map(|generator| generator.iter())
}

/// Yearly chunks
pub fn chunk_years(start: NaiveDateTime, end: NaiveDateTime) -> Result<Chunks, ChunkError> {
    chunk(start, end, IntervalSpec::single(IntervalUnit::Years))
}

/// Monthly chunks
pub fn chunk_months(start: NaiveDateTime, end: NaiveDateTime) -> Result<Chunks, ChunkError> {
    chunk(start, end, IntervalSpec::single(IntervalUnit::Months))
}

/// Daily chunks
pub fn chunk_days(start: NaiveDateTime, end: NaiveDateTime) -> Result<Chunks, ChunkError> {
    chunk(start, end, IntervalSpec::single(IntervalUnit::Days))
}

/// Hourly chunks
pub fn chunk_hours(start: NaiveDateTime, end: NaiveDateTime) -> Result<Chunks, ChunkError> {
    chunk(start, end, IntervalSpec::single(IntervalUnit::Hours))
}

pub fn chunk_minutes(start: NaiveDateTime, end: NaiveDateTime) -> Result<Chunks, ChunkError> {
    chunk(start, end, IntervalSpec::single(IntervalUnit::Minutes))
}

pub fn chunk_seconds(start: NaiveDateTime, end: NaiveDateTime) -> Result<Chunks, ChunkError> {
    chunk(start, end, IntervalSpec::single(IntervalUnit::Seconds))
}
