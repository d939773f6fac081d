use chrono::NaiveDateTime;

use super::unit::IntervalUnit;

/// Rejected chunking request.
///
/// Every variant describes a caller mistake in the range or interval
/// specification. They are reported before any chunk is produced; retrying
/// the same arguments will always fail the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChunkError {
    #[error("Range is empty: start and end are both {0}")]
    EmptyRange(NaiveDateTime),

    #[error("Range is inverted: start {start} is after end {end}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Missing interval: expected one `unit=count` pair")]
    MissingIntervalSpec,

    #[error("Cannot have more than one interval unit: {}", .0.join(", "))]
    AmbiguousIntervalSpec(Vec<String>),

    #[error("Unknown interval unit: {0}")]
    UnknownUnit(String),

    #[error("Interval count must be positive, got {0}")]
    NonPositiveCount(i64),

    #[error("Interval count {0} is too large")]
    CountTooLarge(i64),

    #[error("Interval count must be a whole number, got {0}")]
    NonIntegerCount(String),

    #[error("{count} {unit} does not evenly divide {factor}")]
    IndivisibleCount {
        unit: IntervalUnit,
        count: u32,
        factor: u32,
    },
}
