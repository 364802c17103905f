//! Parsers for comma-delimited activity records.
//!
//! Two record layouts are supported:
//! - day records `"<steps>,<duration>"`, walking by construction
//! - training records `"<steps>,<activity>,<duration>"`
//!
//! Durations are written as a sequence of `<digits><unit>` tokens with units
//! `h`, `m` and `s`, e.g. `"1h30m"` or `"45s"`.

use time::Duration;

use crate::{
    errors::{RecordField, Result, TrackerError},
    models::ActivityRecord,
};

const DAY_RECORD_FIELDS: usize = 2;
const TRAINING_RECORD_FIELDS: usize = 3;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;
/// Longest accepted duration: `i64::MAX` nanoseconds, about 2562047 hours.
const MAX_DURATION_SECONDS: i64 = i64::MAX / 1_000_000_000;

/// Parse a day record: `"<steps>,<duration>"`.
pub fn parse_day_record(data: &str) -> Result<ActivityRecord> {
    let fields = split_fields(data, DAY_RECORD_FIELDS)?;
    let steps = parse_steps(fields[0])?;
    let duration = parse_positive_duration(fields[1])?;

    Ok(ActivityRecord {
        steps,
        activity: None,
        duration,
    })
}

/// Parse a training record: `"<steps>,<activity>,<duration>"`.
///
/// The activity label is carried through as-is; whether it names a known
/// activity is decided by the calculator.
pub fn parse_training_record(data: &str) -> Result<ActivityRecord> {
    let fields = split_fields(data, TRAINING_RECORD_FIELDS)?;
    let steps = parse_steps(fields[0])?;
    let duration = parse_positive_duration(fields[2])?;

    Ok(ActivityRecord {
        steps,
        activity: Some(fields[1].to_string()),
        duration,
    })
}

fn split_fields(data: &str, expected: usize) -> Result<Vec<&str>> {
    let fields: Vec<&str> = data.split(',').collect();
    if fields.len() != expected {
        return Err(TrackerError::Format {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_steps(field: &str) -> Result<i64> {
    let steps: i64 = field
        .parse()
        .map_err(|e| TrackerError::parse(RecordField::Steps, e))?;
    if steps <= 0 {
        return Err(TrackerError::Range {
            field: RecordField::Steps,
        });
    }
    Ok(steps)
}

fn parse_positive_duration(field: &str) -> Result<Duration> {
    let duration = parse_duration(field)?;
    if duration <= Duration::ZERO {
        return Err(TrackerError::Range {
            field: RecordField::Duration,
        });
    }
    Ok(duration)
}

/// Parse a duration such as `"1h30m"`, `"40m"` or `"90s"`.
///
/// Tokens are summed left to right and may repeat units (`"1h1h"` is two
/// hours). An optional leading sign applies to the whole value, and the bare
/// literal `"0"` is zero. The sign of the result is not checked here.
pub fn parse_duration(s: &str) -> Result<Duration> {
    let invalid =
        |reason: &str| TrackerError::parse(RecordField::Duration, format!("{reason} in {s:?}"));

    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid("empty duration"));
    }

    let mut total: i64 = 0;
    let mut chars = rest.chars().peekable();
    while chars.peek().is_some() {
        let mut value: i64 = 0;
        let mut digits = 0;
        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(digit)))
                .ok_or_else(|| invalid("duration out of range"))?;
            digits += 1;
            chars.next();
        }
        if digits == 0 {
            return Err(invalid("expected a number"));
        }

        let unit = match chars.next() {
            Some('h') => SECONDS_PER_HOUR,
            Some('m') => SECONDS_PER_MINUTE,
            Some('s') => 1,
            Some(other) => return Err(invalid(&format!("unknown unit {other:?}"))),
            None => return Err(invalid("missing unit")),
        };

        total = value
            .checked_mul(unit)
            .and_then(|seconds| total.checked_add(seconds))
            .filter(|&seconds| seconds <= MAX_DURATION_SECONDS)
            .ok_or_else(|| invalid("duration out of range"))?;
    }

    if negative {
        total = -total;
    }
    Ok(Duration::seconds(total))
}
