//! Chunk command implementation

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};

use timecoach::config::Config;
use timecoach::report::{collect_reports, round_to, total_hours};
use timecoach::{chunk, IntervalSpec};

/// Accepted input formats, tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Split `[start, end)` and print one line per chunk plus a total
pub fn chunk_command(
    config: &Config,
    start: &str,
    end: &str,
    every: Option<&str>,
    json: bool,
) -> Result<()> {
    let start = parse_datetime(start).context("Invalid --start")?;
    let end = parse_datetime(end).context("Invalid --end")?;
    let spec = match every {
        Some(raw) => {
            IntervalSpec::parse(raw).with_context(|| format!("Invalid --every: {}", raw))?
        }
        None => config.settings.default_interval,
    };

    let reports = collect_reports(chunk(start, end, spec)?);

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let settings = &config.settings;
    let precision = settings.hours_precision;

    println!("Chunks of {} ({}):\n", spec, reports.len());

    for report in &reports {
        println!(
            "  {} -> {}  {:>width$.prec$}h",
            report.start.format(&settings.datetime_format),
            report.end.format(&settings.datetime_format),
            report.net_hours_rounded(precision),
            width = precision + 4,
            prec = precision,
        );
    }

    println!(
        "\nTotal: {:.prec$}h",
        round_to(total_hours(&reports), precision),
        prec = precision
    );

    Ok(())
}

/// Parse a date-time argument; a bare date means midnight
pub fn parse_datetime(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .with_context(|| format!("Unrecognized date-time: {}", raw))
}
