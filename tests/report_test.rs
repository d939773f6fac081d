//! Hour totals over chunked ranges

mod common;

use chrono::TimeDelta;
use common::{at, reports};
use timecoach::report::{total_duration, total_hours, ChunkReport};
use timecoach::{chunk, chunk_hours, IntervalSpec, IntervalUnit};

#[test]
fn test_totals_match_range_length() {
    let start = at(1990, 1, 1, 11, 35, 0);
    let end = start + TimeDelta::hours(7) + TimeDelta::minutes(10);

    let chunks = reports(chunk_hours(start, end).unwrap());

    assert_eq!(total_duration(&chunks), end - start);
    assert!((total_hours(&chunks) - (7.0 + 10.0 / 60.0)).abs() < 1e-9);
}

#[test]
fn test_rounded_hours_per_chunk() {
    let start = at(1990, 1, 1, 11, 35, 0);
    let end = at(1990, 1, 1, 12, 20, 0);
    let spec = IntervalSpec::new(IntervalUnit::Minutes, 15).unwrap();

    let rounded: Vec<f64> = reports(chunk(start, end, spec).unwrap())
        .iter()
        .map(|c| c.net_hours_rounded(2))
        .collect();

    assert_eq!(rounded, vec![0.17, 0.25, 0.25, 0.08]);
}

#[test]
fn test_report_serializes_to_json() {
    let report = ChunkReport::new(at(1990, 1, 1, 11, 0, 0), at(1990, 1, 1, 11, 30, 0));

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["start"], "1990-01-01T11:00:00");
    assert_eq!(json["end"], "1990-01-01T11:30:00");
    assert_eq!(json["seconds"], 1800);
    assert_eq!(json["net_hours"], 0.5);
}
