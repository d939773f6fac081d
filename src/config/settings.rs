//! Settings configuration types

use serde::{Deserialize, Serialize};

use crate::chunk::{IntervalSpec, IntervalUnit};

/// General settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Chunk size used when `--every` is not given (e.g. "hours=1", "minutes=15")
    #[serde(default = "default_interval")]
    pub default_interval: IntervalSpec,

    /// chrono format string for printed chunk boundaries
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,

    /// Decimal places for printed hour totals
    #[serde(default = "default_hours_precision")]
    pub hours_precision: usize,
}

fn default_interval() -> IntervalSpec {
    IntervalSpec::single(IntervalUnit::Hours)
}

fn default_datetime_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_hours_precision() -> usize {
    2
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_interval: default_interval(),
            datetime_format: default_datetime_format(),
            hours_precision: default_hours_precision(),
        }
    }
}
