//! Interval specification: exactly one `(unit, count)` pair
//!
//! Textual forms accepted by [`IntervalSpec::parse`]:
//! ```text
//! minutes=15      unit=count pair
//! 15 minutes      count and unit
//! 15m             count with a unit alias
//! ```
//! Several comma separated pairs (`minutes=15,hours=1`) are rejected as
//! ambiguous rather than combined.

use serde::{Deserialize, Serialize};

use super::error::ChunkError;
use super::unit::IntervalUnit;

/// A validated chunk size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IntervalSpec {
    unit: IntervalUnit,
    count: u32,
}

impl IntervalSpec {
    /// Validate a `(unit, count)` pair.
    ///
    /// `count` must be at least 1, and must evenly divide the unit's
    /// containment factor when it has one (15 minutes is fine, 11 is not).
    ///
    /// Divisibility is the only alignment rule: any divisor of 24 is a valid
    /// hour count, so 3-hour chunks are accepted while 5 or 7 hours are not.
    pub fn new(unit: IntervalUnit, count: i64) -> Result<Self, ChunkError> {
        if count <= 0 {
            return Err(ChunkError::NonPositiveCount(count));
        }
        let count = u32::try_from(count).map_err(|_| ChunkError::CountTooLarge(count))?;

        if let Some(factor) = unit.containment_factor() {
            if factor % count != 0 {
                return Err(ChunkError::IndivisibleCount {
                    unit,
                    count,
                    factor,
                });
            }
        }

        Ok(Self { unit, count })
    }

    /// One of `unit`
    pub fn single(unit: IntervalUnit) -> Self {
        Self { unit, count: 1 }
    }

    pub fn unit(&self) -> IntervalUnit {
        self.unit
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Parse the textual form.
    ///
    /// More than one pair is ambiguous regardless of what the pairs contain.
    /// An empty pair or a unit without a count is missing.
    pub fn parse(input: &str) -> Result<Self, ChunkError> {
        let pairs: Vec<&str> = input.split(',').map(str::trim).collect();
        let given: Vec<&str> = pairs.iter().copied().filter(|p| !p.is_empty()).collect();

        match given.as_slice() {
            [pair] if given.len() == pairs.len() => {
                let (unit, count) = split_pair(pair)?;
                if count.is_empty() {
                    return Err(ChunkError::MissingIntervalSpec);
                }
                Self::new(unit, parse_count(count)?)
            }
            [] | [_] => Err(ChunkError::MissingIntervalSpec),
            many => Err(ChunkError::AmbiguousIntervalSpec(
                many.iter().map(|p| unit_name(p).to_string()).collect(),
            )),
        }
    }
}

impl std::str::FromStr for IntervalSpec {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for IntervalSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.unit, self.count)
    }
}

impl TryFrom<String> for IntervalSpec {
    type Error = ChunkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IntervalSpec> for String {
    fn from(spec: IntervalSpec) -> Self {
        spec.to_string()
    }
}

/// Separate a pair into its raw unit name and raw count
fn split_raw(pair: &str) -> (&str, &str) {
    if let Some((unit, count)) = pair.split_once('=') {
        (unit.trim(), count.trim())
    } else if let Some((count, unit)) = pair.split_once(char::is_whitespace) {
        (unit.trim(), count.trim())
    } else {
        // "15m": leading number, trailing alias
        let idx = pair
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(pair.len());
        let (count, unit) = pair.split_at(idx);
        (unit, count)
    }
}

fn unit_name(pair: &str) -> &str {
    split_raw(pair).0
}

/// Split one pair into its unit and (unparsed) count
fn split_pair(pair: &str) -> Result<(IntervalUnit, &str), ChunkError> {
    let (unit, count) = split_raw(pair);
    let unit =
        IntervalUnit::from_str(unit).ok_or_else(|| ChunkError::UnknownUnit(unit.to_string()))?;
    Ok((unit, count))
}

fn parse_count(raw: &str) -> Result<i64, ChunkError> {
    if let Ok(count) = raw.parse::<i64>() {
        return Ok(count);
    }
    match raw.parse::<f64>() {
        // "2.0" is still a whole number
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Ok(value as i64),
        _ => Err(ChunkError::NonIntegerCount(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_divisors() {
        for (unit, count) in [
            (IntervalUnit::Minutes, 15),
            (IntervalUnit::Seconds, 30),
            (IntervalUnit::Hours, 6),
            (IntervalUnit::Months, 3),
            (IntervalUnit::Days, 7),
            (IntervalUnit::Years, 5),
        ] {
            let spec = IntervalSpec::new(unit, count).unwrap();
            assert_eq!(spec.unit(), unit);
            assert_eq!(spec.count() as i64, count);
        }
    }

    #[test]
    fn test_new_rejects_non_positive() {
        for (unit, count) in [
            (IntervalUnit::Seconds, -10),
            (IntervalUnit::Minutes, 0),
            (IntervalUnit::Hours, -999),
        ] {
            assert_eq!(
                IntervalSpec::new(unit, count),
                Err(ChunkError::NonPositiveCount(count))
            );
        }
    }

    #[test]
    fn test_new_rejects_indivisible() {
        for (unit, count) in [
            (IntervalUnit::Seconds, 51),
            (IntervalUnit::Minutes, 11),
            (IntervalUnit::Hours, 5),
            (IntervalUnit::Months, 5),
        ] {
            assert!(matches!(
                IntervalSpec::new(unit, count),
                Err(ChunkError::IndivisibleCount { .. })
            ));
        }
    }

    #[test]
    fn test_days_and_years_accept_any_count() {
        assert!(IntervalSpec::new(IntervalUnit::Days, 11).is_ok());
        assert!(IntervalSpec::new(IntervalUnit::Years, 13).is_ok());
        let huge = i64::from(u32::MAX) + 1;
        assert_eq!(
            IntervalSpec::new(IntervalUnit::Days, huge),
            Err(ChunkError::CountTooLarge(huge))
        );
    }

    #[test]
    fn test_parse_forms() {
        let expected = IntervalSpec::new(IntervalUnit::Minutes, 15).unwrap();
        assert_eq!(IntervalSpec::parse("minutes=15").unwrap(), expected);
        assert_eq!(IntervalSpec::parse(" minute = 15 ").unwrap(), expected);
        assert_eq!(IntervalSpec::parse("15 minutes").unwrap(), expected);
        assert_eq!(IntervalSpec::parse("15m").unwrap(), expected);
        assert_eq!(IntervalSpec::parse("15min").unwrap(), expected);
        assert_eq!("hours=2.0".parse::<IntervalSpec>().unwrap().count(), 2);
    }

    #[test]
    fn test_parse_missing() {
        assert_eq!(IntervalSpec::parse(""), Err(ChunkError::MissingIntervalSpec));
        assert_eq!(IntervalSpec::parse(" , "), Err(ChunkError::MissingIntervalSpec));
    }

    #[test]
    fn test_parse_ambiguous() {
        assert_eq!(
            IntervalSpec::parse("minutes=11,hours=2"),
            Err(ChunkError::AmbiguousIntervalSpec(vec![
                "minutes".to_string(),
                "hours".to_string()
            ]))
        );
    }

    #[test]
    fn test_parse_ambiguous_with_unknown_unit() {
        assert_eq!(
            IntervalSpec::parse("minutes=15,weeks=1"),
            Err(ChunkError::AmbiguousIntervalSpec(vec![
                "minutes".to_string(),
                "weeks".to_string()
            ]))
        );
    }

    #[test]
    fn test_parse_empty_count_or_pair_is_missing() {
        for raw in ["minutes=", "minutes =  ", "minutes=15,,", "minutes=15,", ",hours=1"] {
            assert_eq!(
                IntervalSpec::parse(raw),
                Err(ChunkError::MissingIntervalSpec),
                "{raw} should be missing"
            );
        }
    }

    #[test]
    fn test_hours_accept_every_divisor_of_a_day() {
        for count in [1, 2, 3, 4, 6, 8, 12, 24] {
            assert!(IntervalSpec::new(IntervalUnit::Hours, count).is_ok(), "{count} hours");
        }
        for count in [5, 7, 9, 10] {
            assert!(IntervalSpec::new(IntervalUnit::Hours, count).is_err(), "{count} hours");
        }
    }

    #[test]
    fn test_parse_non_integer() {
        for raw in ["seconds=.5", "minutes=3.14", "hours=.9999", "hours=abc"] {
            assert!(
                matches!(IntervalSpec::parse(raw), Err(ChunkError::NonIntegerCount(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_unknown_unit() {
        assert_eq!(
            IntervalSpec::parse("weeks=1"),
            Err(ChunkError::UnknownUnit("weeks".to_string()))
        );
    }

    #[test]
    fn test_display_roundtrip() {
        let spec = IntervalSpec::new(IntervalUnit::Hours, 6).unwrap();
        assert_eq!(spec.to_string(), "hours=6");
        assert_eq!(IntervalSpec::parse(&spec.to_string()).unwrap(), spec);
    }
}
