//! Per-chunk durations for time-tracking reports

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// One chunk with its elapsed time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkReport {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Elapsed whole seconds
    pub seconds: i64,
    pub net_hours: f64,
}

impl ChunkReport {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        let seconds = (end - start).num_seconds();
        Self {
            start,
            end,
            seconds,
            net_hours: seconds as f64 / 3600.0,
        }
    }

    /// Elapsed time of this chunk
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Net hours rounded to `precision` decimals
    pub fn net_hours_rounded(&self, precision: usize) -> f64 {
        round_to(self.net_hours, precision)
    }
}

impl From<(NaiveDateTime, NaiveDateTime)> for ChunkReport {
    fn from((start, end): (NaiveDateTime, NaiveDateTime)) -> Self {
        Self::new(start, end)
    }
}

/// Collect a chunk sequence into reports
pub fn collect_reports<I>(chunks: I) -> Vec<ChunkReport>
where
    I: IntoIterator<Item = (NaiveDateTime, NaiveDateTime)>,
{
    chunks.into_iter().map(ChunkReport::from).collect()
}

/// Sum of net hours across all chunks
pub fn total_hours(reports: &[ChunkReport]) -> f64 {
    reports.iter().map(|r| r.net_hours).sum()
}

/// Sum of elapsed time across all chunks
pub fn total_duration(reports: &[ChunkReport]) -> TimeDelta {
    reports
        .iter()
        .fold(TimeDelta::zero(), |acc, r| acc + r.duration())
}

pub fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision.min(15) as i32);
    (value * factor).round() / factor
}
