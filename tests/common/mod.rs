//! Shared test utilities for chunking tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use timecoach::report::ChunkReport;

/// Build a date-time from its fields
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid date")
        .and_hms_opt(h, min, s)
        .expect("valid time")
}

/// Collect chunks into reports
pub fn reports<I>(chunks: I) -> Vec<ChunkReport>
where
    I: IntoIterator<Item = (NaiveDateTime, NaiveDateTime)>,
{
    timecoach::report::collect_reports(chunks)
}

/// Checks shared by every chunking result:
/// - first chunk starts at `start`, last ends at `end`
/// - chunks are contiguous and non-empty
/// - every middle chunk has the same length
pub fn assert_common(start: NaiveDateTime, end: NaiveDateTime, chunks: &[ChunkReport]) {
    assert!(!chunks.is_empty(), "no chunks produced");
    assert_eq!(chunks[0].start, start, "leading chunk must start at range start");
    assert_eq!(
        chunks[chunks.len() - 1].end,
        end,
        "trailing chunk must end at range end"
    );

    for pair in chunks.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "gap or overlap between chunks");
    }
    for chunk in chunks {
        assert!(chunk.start < chunk.end, "empty chunk {:?}", chunk);
    }

    assert_uniform_middle(chunks);
}

/// All chunks other than the first and last have the same length
pub fn assert_uniform_middle(chunks: &[ChunkReport]) {
    if chunks.len() < 3 {
        return;
    }
    let middle = &chunks[1..chunks.len() - 1];
    let expected = middle[0].seconds;
    for chunk in middle {
        assert_eq!(chunk.seconds, expected, "middle chunk {:?} differs", chunk);
    }
}

/// Contiguity and coverage only (calendar units have uneven middles)
pub fn assert_contiguous(start: NaiveDateTime, end: NaiveDateTime, chunks: &[ChunkReport]) {
    assert!(!chunks.is_empty(), "no chunks produced");
    assert_eq!(chunks[0].start, start);
    assert_eq!(chunks[chunks.len() - 1].end, end);
    for pair in chunks.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}
