//! Duration expressions
//!
//! Parses signed duration strings such as "30m0s", "1h30m", "1.5h" or "-90s"
//! into a [`TimeDelta`]. A duration is a sequence of decimal numbers, each with
//! an optional fraction and a unit suffix. Valid units are "ns", "us" (or "µs"),
//! "ms", "s", "m" and "h".

use chrono::TimeDelta;
use thiserror::Error;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// Magnitude of `i64::MIN`; the largest accepted unsigned total
const MAX_MAGNITUDE: u64 = 1 << 63;

/// Why a duration expression was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("invalid duration")]
    Invalid,

    #[error("missing unit in duration")]
    MissingUnit,

    #[error("unknown unit {0:?} in duration")]
    UnknownUnit(String),

    #[error("duration out of range")]
    OutOfRange,
}

/// Nanoseconds per unit suffix
fn nanos_per_unit(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

fn is_number_byte(b: u8) -> bool {
    b == b'.' || b.is_ascii_digit()
}

/// Consume leading digits as an integer
fn leading_int(s: &str) -> Result<(u64, &str), DurationError> {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: u64 = 0;
    for b in s[..end].bytes() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
            .filter(|v| *v <= MAX_MAGNITUDE)
            .ok_or(DurationError::OutOfRange)?;
    }
    Ok((value, &s[end..]))
}

/// Consume leading fraction digits, returning (digits, scale, rest)
///
/// Digits past the point where they would overflow are dropped.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: u64 = 0;
    let mut scale = 1.0;
    let mut overflow = false;
    for b in s[..end].bytes() {
        if overflow {
            continue;
        }
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
        {
            Some(v) => {
                value = v;
                scale *= 10.0;
            }
            None => overflow = true,
        }
    }
    (value, scale, &s[end..])
}

/// Parse a duration expression
///
/// Examples:
/// - "30m0s" -> 30 minutes
/// - "1.5h" -> 90 minutes
/// - "-1h" -> minus one hour (sign is kept, positivity is checked by callers)
/// - "0" -> zero
pub fn parse_duration(input: &str) -> Result<TimeDelta, DurationError> {
    let mut s = input;
    let mut negative = false;

    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    // Special case: a bare zero needs no unit
    if s == "0" {
        return Ok(TimeDelta::zero());
    }
    if s.is_empty() {
        return Err(DurationError::Invalid);
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        if !is_number_byte(s.as_bytes()[0]) {
            return Err(DurationError::Invalid);
        }

        let before = s.len();
        let (whole, rest) = leading_int(s)?;
        let has_whole = rest.len() != before;
        s = rest;

        let mut fraction = 0;
        let mut scale = 1.0;
        let mut has_fraction = false;
        if let Some(rest) = s.strip_prefix('.') {
            let before = rest.len();
            let (f, sc, rest) = leading_fraction(rest);
            fraction = f;
            scale = sc;
            has_fraction = rest.len() != before;
            s = rest;
        }
        if !has_whole && !has_fraction {
            // "." or ".s"
            return Err(DurationError::Invalid);
        }

        let unit_end = s.bytes().position(is_number_byte).unwrap_or(s.len());
        if unit_end == 0 {
            return Err(DurationError::MissingUnit);
        }
        let unit = &s[..unit_end];
        s = &s[unit_end..];
        let per_unit =
            nanos_per_unit(unit).ok_or_else(|| DurationError::UnknownUnit(unit.to_string()))?;

        let mut value = whole
            .checked_mul(per_unit)
            .filter(|v| *v <= MAX_MAGNITUDE)
            .ok_or(DurationError::OutOfRange)?;
        if fraction > 0 {
            let extra = (fraction as f64 * (per_unit as f64 / scale)) as u64;
            value = value
                .checked_add(extra)
                .filter(|v| *v <= MAX_MAGNITUDE)
                .ok_or(DurationError::OutOfRange)?;
        }
        total = total
            .checked_add(value)
            .filter(|v| *v <= MAX_MAGNITUDE)
            .ok_or(DurationError::OutOfRange)?;
    }

    let nanos = if negative {
        // MAX_MAGNITUDE itself maps to i64::MIN
        0i64.checked_sub_unsigned(total).ok_or(DurationError::OutOfRange)?
    } else {
        i64::try_from(total).map_err(|_| DurationError::OutOfRange)?
    };
    Ok(TimeDelta::nanoseconds(nanos))
}

/// Total length of a span in (fractional) seconds
pub fn as_seconds_f64(d: TimeDelta) -> f64 {
    d.num_seconds() as f64 + f64::from(d.subsec_nanos()) / NANOS_PER_SECOND as f64
}

/// Total length of a span in (fractional) minutes
pub fn as_minutes_f64(d: TimeDelta) -> f64 {
    as_seconds_f64(d) / 60.0
}

/// Total length of a span in (fractional) hours
pub fn as_hours_f64(d: TimeDelta) -> f64 {
    as_seconds_f64(d) / 3600.0
}
