//! Parser for Go-style duration strings such as `300ms`, `-1.5h` or `2h45m`.
//!
//! Grammar: `[-+]?([0-9]*(\.[0-9]*)?[a-zµμ]+)+`, or a lone (optionally signed)
//! `0`. Valid units are `ns`, `us` (or `µs`/`μs`), `ms`, `s`, `m` and `h`.

use thiserror::Error;

use super::quote::quote;
use crate::core::TimeDuration;

/// One past the largest magnitude a negative duration may have.
const MAGNITUDE_LIMIT: u64 = 1 << 63;

const UNITS: &[(&str, u64)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("\u{00b5}s", 1_000), // U+00B5 micro sign
    ("\u{03bc}s", 1_000), // U+03BC Greek small letter mu
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60 * 1_000_000_000),
    ("h", 60 * 60 * 1_000_000_000),
];

/// Error produced when a string does not follow the duration grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("time: invalid duration {}", quote(.0))]
    Invalid(String),

    #[error("time: missing unit in duration {}", quote(.0))]
    MissingUnit(String),

    #[error("time: unknown unit {} in duration {}", quote(.unit), quote(.input))]
    UnknownUnit { unit: String, input: String },
}

/// Parses a duration string into signed nanoseconds.
///
/// ## Errors
/// Returns an error if the string does not match the grammar, names an
/// unknown unit, or overflows a signed 64-bit nanosecond count.
pub fn parse_duration(input: &str) -> Result<TimeDuration, DurationParseError> {
    let invalid = || DurationParseError::Invalid(input.to_string());

    let mut s = input;
    let mut negative = false;
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    } else {
        // Unsigned
    }

    if s == "0" {
        return Ok(TimeDuration::ZERO);
    }
    if s.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        // The next character must be [0-9.]
        if !s.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(invalid());
        }

        let before = s.len();
        let (whole, rest) = leading_int(s).ok_or_else(invalid)?;
        s = rest;
        let has_whole = before != s.len();

        let mut fraction = 0;
        let mut scale = 1.0;
        let mut has_fraction = false;
        if let Some(rest) = s.strip_prefix('.') {
            let before = rest.len();
            (fraction, scale, s) = leading_fraction(rest);
            has_fraction = before != s.len();
        }
        if !has_whole && !has_fraction {
            // No digits, e.g. ".s" or "-.s"
            return Err(invalid());
        }

        let unit_len = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_len == 0 {
            return Err(DurationParseError::MissingUnit(input.to_string()));
        }
        let (unit_name, rest) = s.split_at(unit_len);
        s = rest;

        let unit = UNITS
            .iter()
            .find_map(|&(name, nanos)| (name == unit_name).then_some(nanos))
            .ok_or_else(|| DurationParseError::UnknownUnit {
                unit: unit_name.to_string(),
                input: input.to_string(),
            })?;

        if whole > MAGNITUDE_LIMIT / unit {
            return Err(invalid());
        }
        let mut nanos = whole * unit;
        if fraction > 0 {
            nanos += fraction_nanos(fraction, unit, scale);
            if nanos > MAGNITUDE_LIMIT {
                return Err(invalid());
            }
        }

        total = total
            .checked_add(nanos)
            .filter(|&t| t <= MAGNITUDE_LIMIT)
            .ok_or_else(invalid)?;
    }

    if negative {
        return Ok(TimeDuration::from_nanos(0_i64.wrapping_sub_unsigned(total)));
    }
    i64::try_from(total)
        .map(TimeDuration::from_nanos)
        .map_err(|_overflow| invalid())
}

/// Consumes leading ASCII digits. `None` on overflow past 2^63.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let mut value: u64 = 0;
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    for byte in s.bytes().take(digits) {
        if value > MAGNITUDE_LIMIT / 10 {
            return None;
        }
        value = value * 10 + u64::from(byte - b'0');
        if value > MAGNITUDE_LIMIT {
            return None;
        }
    }
    Some((value, &s[digits..]))
}

/// Consumes leading ASCII digits after a decimal point.
///
/// Returns the digits as an integer and the power of ten they are scaled by.
/// Digits beyond what fits are consumed but ignored.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let mut value: u64 = 0;
    let mut scale = 1.0;
    let mut overflow = false;
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    for byte in s.bytes().take(digits) {
        if overflow {
            continue;
        }
        if value > (MAGNITUDE_LIMIT - 1) / 10 {
            overflow = true;
            continue;
        }
        let next = value * 10 + u64::from(byte - b'0');
        if next > MAGNITUDE_LIMIT {
            overflow = true;
            continue;
        }
        value = next;
        scale *= 10.0;
    }
    (value, scale, &s[digits..])
}

/// Float math keeps fractions of an hour accurate to the nanosecond.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "fraction * unit / scale is non-negative and at most one hour in nanoseconds"
)]
fn fraction_nanos(fraction: u64, unit: u64, scale: f64) -> u64 {
    (fraction as f64 * (unit as f64 / scale)) as u64
}
