//! timecoach - calendar-aligned time chunking
//!
//! Splits an arbitrary `[start, end)` range into contiguous chunks aligned to
//! seconds, minutes, hours, days, months or years, so time tracking and
//! billing reports can attribute work to the period it happened in even when
//! the range starts and ends mid-period.
//!
//! ## Modules
//!
//! - [`chunk`]: interval specification, alignment and the lazy chunk iterator
//! - [`report`]: per-chunk elapsed time and totals
//! - [`config`]: `~/.timecoach/config.toml` settings for the CLI

pub mod chunk;
pub mod config;
pub mod report;

pub use chunk::{
    chunk, chunk_days, chunk_hours, chunk_minutes, chunk_months, chunk_seconds, chunk_years,
    ChunkError, ChunkGenerator, Chunks, IntervalSpec, IntervalUnit,
};
