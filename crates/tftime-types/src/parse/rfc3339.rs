//! Parser for RFC 3339 timestamps (`2006-01-02T15:04:05Z07:00`).
//!
//! The input is matched element by element against the reference layout so a
//! failure can name both the unparsed remainder and the layout element it was
//! expected to match, e.g. `cannot parse "" as "15"`.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate};

use super::quote::quote;

/// Reference layout accepted by [`parse_rfc3339`].
pub const RFC3339_LAYOUT: &str = "2006-01-02T15:04:05Z07:00";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element {
    Literal(&'static str),
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Zone,
}

impl Element {
    const fn layout(self) -> &'static str {
        match self {
            Self::Literal(text) => text,
            Self::Year => "2006",
            Self::Month => "01",
            Self::Day => "02",
            Self::Hour => "15",
            Self::Minute => "04",
            Self::Second => "05",
            Self::Zone => "Z07:00",
        }
    }
}

const LAYOUT: &[Element] = &[
    Element::Year,
    Element::Literal("-"),
    Element::Month,
    Element::Literal("-"),
    Element::Day,
    Element::Literal("T"),
    Element::Hour,
    Element::Literal(":"),
    Element::Minute,
    Element::Literal(":"),
    Element::Second,
    Element::Zone,
];

/// ## Summary
/// Error produced when a string is not an RFC 3339 timestamp.
///
/// Either names the element that failed to match, or carries a message for
/// range and trailing-text failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeParseError {
    value: String,
    value_elem: String,
    layout_elem: &'static str,
    message: String,
}

impl TimeParseError {
    fn cannot_parse(value: &str, value_elem: &str, layout_elem: &'static str) -> Self {
        Self {
            value: value.to_string(),
            value_elem: value_elem.to_string(),
            layout_elem,
            message: String::new(),
        }
    }

    fn with_message(value: &str, message: String) -> Self {
        Self {
            value: value.to_string(),
            value_elem: String::new(),
            layout_elem: "",
            message,
        }
    }

    fn out_of_range(value: &str, what: &str) -> Self {
        Self::with_message(value, format!(": {what} out of range"))
    }

    /// The full input that failed to parse.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(
                f,
                "parsing time {} as {}: cannot parse {} as {}",
                quote(&self.value),
                quote(RFC3339_LAYOUT),
                quote(&self.value_elem),
                quote(self.layout_elem)
            )
        } else {
            write!(f, "parsing time {}{}", quote(&self.value), self.message)
        }
    }
}

impl std::error::Error for TimeParseError {}

/// Why a single layout element failed.
enum ElementError {
    Bad,
    Range(&'static str),
}

#[derive(Debug, Default)]
struct Fields {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
    offset_seconds: i32,
}

/// Parses an RFC 3339 timestamp, keeping its UTC offset.
///
/// A fractional second (`.` or `,` followed by digits) after the seconds is
/// accepted; digits past nanosecond precision are ignored.
///
/// ## Errors
/// Returns an error if the string does not match the layout or a field is
/// out of range.
pub fn parse_rfc3339(value: &str) -> Result<DateTime<FixedOffset>, TimeParseError> {
    let mut fields = Fields::default();
    let mut rest = value;

    for &element in LAYOUT {
        if let Element::Literal(text) = element {
            rest = rest
                .strip_prefix(text)
                .ok_or_else(|| TimeParseError::cannot_parse(value, rest, text))?;
            continue;
        }

        let hold = rest;
        rest = match parse_element(element, rest, &mut fields) {
            Ok(after) => after,
            Err(ElementError::Range(what)) => {
                return Err(TimeParseError::out_of_range(value, what));
            }
            Err(ElementError::Bad) => {
                return Err(TimeParseError::cannot_parse(
                    value,
                    hold,
                    element.layout(),
                ));
            }
        };
    }

    if !rest.is_empty() {
        return Err(TimeParseError::with_message(
            value,
            format!(": extra text: {}", quote(rest)),
        ));
    }

    let date = NaiveDate::from_ymd_opt(fields.year, fields.month, fields.day)
        .ok_or_else(|| TimeParseError::out_of_range(value, "day"))?;
    let naive = date
        .and_hms_nano_opt(
            fields.hour,
            fields.minute,
            fields.second,
            fields.nanosecond,
        )
        .ok_or_else(|| TimeParseError::out_of_range(value, "time"))?;
    let offset = FixedOffset::east_opt(fields.offset_seconds)
        .ok_or_else(|| TimeParseError::out_of_range(value, "time zone offset"))?;

    naive
        .and_local_timezone(offset)
        .single()
        .ok_or_else(|| TimeParseError::out_of_range(value, "time"))
}

fn parse_element<'a>(
    element: Element,
    value: &'a str,
    fields: &mut Fields,
) -> Result<&'a str, ElementError> {
    match element {
        Element::Year => {
            let bytes = value.as_bytes();
            if bytes.len() < 4 || !bytes[..4].iter().all(u8::is_ascii_digit) {
                return Err(ElementError::Bad);
            }
            fields.year = bytes[..4]
                .iter()
                .fold(0, |acc, b| acc * 10 + i32::from(b - b'0'));
            Ok(&value[4..])
        }
        Element::Month => {
            let (month, rest) = getnum(value, true).ok_or(ElementError::Bad)?;
            if !(1..=12).contains(&month) {
                return Err(ElementError::Range("month"));
            }
            fields.month = month;
            Ok(rest)
        }
        Element::Day => {
            // Checked against the month once the whole date is known.
            let (day, rest) = getnum(value, true).ok_or(ElementError::Bad)?;
            fields.day = day;
            Ok(rest)
        }
        Element::Hour => {
            let (hour, rest) = getnum(value, false).ok_or(ElementError::Bad)?;
            if hour >= 24 {
                return Err(ElementError::Range("hour"));
            }
            fields.hour = hour;
            Ok(rest)
        }
        Element::Minute => {
            let (minute, rest) = getnum(value, true).ok_or(ElementError::Bad)?;
            if minute >= 60 {
                return Err(ElementError::Range("minute"));
            }
            fields.minute = minute;
            Ok(rest)
        }
        Element::Second => {
            let (second, rest) = getnum(value, true).ok_or(ElementError::Bad)?;
            if second >= 60 {
                return Err(ElementError::Range("second"));
            }
            fields.second = second;
            parse_fraction(rest, fields)
        }
        Element::Zone => parse_zone(value, fields),
        Element::Literal(_) => Ok(value),
    }
}

/// Consumes an optional `.ddd` / `,ddd` fractional second.
fn parse_fraction<'a>(value: &'a str, fields: &mut Fields) -> Result<&'a str, ElementError> {
    let bytes = value.as_bytes();
    if bytes.len() < 2 || !matches!(bytes[0], b'.' | b',') || !bytes[1].is_ascii_digit() {
        return Ok(value);
    }

    let digits = bytes[1..].iter().take_while(|b| b.is_ascii_digit()).count();
    let mut nanos: u32 = 0;
    for (i, b) in bytes[1..=digits].iter().enumerate() {
        if i < 9 {
            nanos = nanos * 10 + u32::from(b - b'0');
        }
    }
    for _ in digits..9 {
        nanos *= 10;
    }
    fields.nanosecond = nanos;
    Ok(&value[1 + digits..])
}

fn parse_zone<'a>(value: &'a str, fields: &mut Fields) -> Result<&'a str, ElementError> {
    if let Some(rest) = value.strip_prefix('Z') {
        fields.offset_seconds = 0;
        return Ok(rest);
    }

    let bytes = value.as_bytes();
    if bytes.len() < 6 || bytes[3] != b':' {
        return Err(ElementError::Bad);
    }
    let hours = digit_pair(bytes[1], bytes[2]).ok_or(ElementError::Bad)?;
    let minutes = digit_pair(bytes[4], bytes[5]).ok_or(ElementError::Bad)?;

    // Offsets of exactly 24 hours or 60 minutes are tolerated here.
    let mut range_error = None;
    if hours > 24 {
        range_error = Some("time zone offset hour");
    }
    if minutes > 60 {
        range_error = Some("time zone offset minute");
    }
    if let Some(what) = range_error {
        return Err(ElementError::Range(what));
    }

    let magnitude =
        i32::try_from((hours * 60 + minutes) * 60).map_err(|_overflow| ElementError::Bad)?;
    fields.offset_seconds = match bytes[0] {
        b'+' => magnitude,
        b'-' => -magnitude,
        _ => return Err(ElementError::Bad),
    };
    Ok(&value[6..])
}

fn digit_pair(high: u8, low: u8) -> Option<u32> {
    (high.is_ascii_digit() && low.is_ascii_digit())
        .then(|| u32::from(high - b'0') * 10 + u32::from(low - b'0'))
}

/// Reads one or two leading digits; `fixed` requires exactly two.
fn getnum(value: &str, fixed: bool) -> Option<(u32, &str)> {
    let bytes = value.as_bytes();
    let first = *bytes.first().filter(|b| b.is_ascii_digit())?;
    let first = u32::from(first - b'0');
    match bytes.get(1) {
        Some(second) if second.is_ascii_digit() => {
            Some((first * 10 + u32::from(second - b'0'), &value[2..]))
        }
        _ if fixed => None,
        _ => Some((first, &value[1..])),
    }
}
