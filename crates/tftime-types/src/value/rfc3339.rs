//! RFC 3339 timestamp strings.

use std::any::Any;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone};
use const_str::concat;
use tftime_core::{AttributePath, Diagnostic, Diagnostics, FuncError, StringValuable, StringValue};

use super::{invalid_string_detail, semantic_equality_mismatch};
use crate::parse::rfc3339::{TimeParseError, parse_rfc3339};

const TYPE_NAME: &str = "Rfc3339Value";
const INVALID_SUMMARY: &str = "Invalid RFC3339 String Value";
const INVALID_DETAIL_LEAD: &str =
    "A string value was provided that is not valid RFC3339 string format.";
const PARAMETER_PREFIX: &str = concat!(INVALID_SUMMARY, ": ");
const VALUE_ERROR_SUMMARY: &str = "RFC3339 ValueRFC3339Time Error";

/// ## Summary
/// An RFC 3339 timestamp string such as `2023-07-25T20:43:16-05:00`.
///
/// `==` compares the raw strings. Use [`Rfc3339Value::string_semantic_equals`]
/// to compare the calendar times they denote, where `Z` and `+00:00` are the
/// same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rfc3339Value {
    value: StringValue,
}

impl Rfc3339Value {
    #[must_use]
    pub const fn null() -> Self {
        Self {
            value: StringValue::Null,
        }
    }

    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            value: StringValue::Unknown,
        }
    }

    /// Wraps a raw string without validating it.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            value: StringValue::Known(raw.into()),
        }
    }

    /// Creates a known value from a timestamp in any time zone.
    ///
    /// Sub-second precision is dropped and a UTC offset renders as `Z`.
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self::new(datetime.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    #[must_use]
    pub fn from_option_datetime<Tz: TimeZone>(datetime: Option<&DateTime<Tz>>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        datetime.map_or_else(Self::null, Self::from_datetime)
    }

    /// ## Summary
    /// Creates a known value from a string, validating the grammar first.
    ///
    /// ## Errors
    /// Returns a single diagnostic if `raw` is not an RFC 3339 timestamp.
    pub fn from_string(raw: &str) -> Result<Self, Diagnostics> {
        match parse_rfc3339(raw) {
            Ok(_) => Ok(Self::new(raw)),
            Err(err) => Err(Diagnostics::from(invalid_string_diagnostic(raw, &err))),
        }
    }

    /// ## Summary
    /// Creates a known value from a trusted string.
    ///
    /// ## Panics
    /// Panics if `raw` is not an RFC 3339 timestamp.
    #[must_use]
    pub fn from_string_must(raw: &str) -> Self {
        if let Err(err) = parse_rfc3339(raw) {
            panic!("Invalid RFC3339 String Value ({raw}): {err}");
        }
        Self::new(raw)
    }

    /// ## Errors
    /// Returns a single diagnostic if `raw` is present and invalid.
    pub fn from_option_string(raw: Option<&str>) -> Result<Self, Diagnostics> {
        raw.map_or_else(|| Ok(Self::null()), Self::from_string)
    }

    /// ## Panics
    /// Panics if `raw` is present and not an RFC 3339 timestamp.
    #[must_use]
    pub fn from_option_string_must(raw: Option<&str>) -> Self {
        raw.map_or_else(Self::null, Self::from_string_must)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.value.is_null()
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.value.is_unknown()
    }

    #[must_use]
    pub fn value_str(&self) -> &str {
        self.value.value_str()
    }

    #[must_use]
    pub const fn string_value(&self) -> &StringValue {
        &self.value
    }

    /// ## Summary
    /// Converts the value to a timestamp, keeping its original offset.
    ///
    /// ## Errors
    /// Returns a diagnostic if the value is null, unknown, or not an RFC 3339
    /// timestamp.
    pub fn value_rfc3339_time(&self) -> Result<DateTime<FixedOffset>, Diagnostics> {
        let raw = match &self.value {
            StringValue::Null => {
                return Err(Diagnostics::from(Diagnostic::error(
                    VALUE_ERROR_SUMMARY,
                    "RFC3339 string value is null",
                )));
            }
            StringValue::Unknown => {
                return Err(Diagnostics::from(Diagnostic::error(
                    VALUE_ERROR_SUMMARY,
                    "RFC3339 string value is unknown",
                )));
            }
            StringValue::Known(raw) => raw,
        };

        parse_rfc3339(raw).map_err(|err| {
            Diagnostics::from(Diagnostic::error(VALUE_ERROR_SUMMARY, err.to_string()))
        })
    }

    /// Validates the raw string for an attribute at `path`. Null and unknown
    /// values are skipped.
    #[must_use]
    pub fn validate_attribute(&self, path: &AttributePath) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        if let Some(raw) = self.value.as_known()
            && let Err(err) = parse_rfc3339(raw)
        {
            tracing::debug!(path = %path, value = raw, error = %err, "Invalid RFC3339 attribute value");
            diagnostics.append(invalid_string_diagnostic(raw, &err).with_path(path.clone()));
        }
        diagnostics
    }

    /// Validates the raw string as the function argument at `position`.
    #[must_use]
    pub fn validate_parameter(&self, position: i64) -> Option<FuncError> {
        let raw = self.value.as_known()?;
        let err = parse_rfc3339(raw).err()?;

        tracing::debug!(position, value = raw, error = %err, "Invalid RFC3339 function argument");
        Some(FuncError::argument(
            position,
            format!(
                "{PARAMETER_PREFIX}{}",
                invalid_string_detail(INVALID_DETAIL_LEAD, raw, &err)
            ),
        ))
    }

    /// ## Summary
    /// Reports whether both values denote the same calendar time.
    ///
    /// Values are compared in their canonical rendering: whole seconds, the
    /// offset kept, and a zero offset written as `Z`. So
    /// `2023-07-25T23:43:16Z` equals `2023-07-25T23:43:16-00:00`, but not the
    /// same instant written as `2023-07-25T20:43:16-03:00`. If either side does
    /// not parse, the raw strings are compared instead.
    ///
    /// ## Errors
    /// Returns a diagnostic if `other` is not an [`Rfc3339Value`].
    pub fn string_semantic_equals(&self, other: &dyn StringValuable) -> Result<bool, Diagnostics> {
        let Some(other) = other.as_any().downcast_ref::<Self>() else {
            return Err(Diagnostics::from(semantic_equality_mismatch(
                TYPE_NAME,
                other.value_type_name(),
            )));
        };

        let equal = match (self.parsed(), other.parsed()) {
            (Some(this), Some(that)) => canonical(&this) == canonical(&that),
            _ => self.value == other.value,
        };
        tracing::trace!(this = %self.value, other = %other.value, equal, "RFC3339 semantic equality");
        Ok(equal)
    }

    fn parsed(&self) -> Option<DateTime<FixedOffset>> {
        self.value.as_known().and_then(|raw| parse_rfc3339(raw).ok())
    }
}

fn canonical(datetime: &DateTime<FixedOffset>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn invalid_string_diagnostic(raw: &str, err: &TimeParseError) -> Diagnostic {
    Diagnostic::error(
        INVALID_SUMMARY,
        invalid_string_detail(INVALID_DETAIL_LEAD, raw, err),
    )
}

impl fmt::Display for Rfc3339Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl FromStr for Rfc3339Value {
    type Err = Diagnostics;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Rfc3339Value
where
    Tz::Offset: fmt::Display,
{
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::from_datetime(&datetime)
    }
}

impl StringValuable for Rfc3339Value {
    fn value_type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn string_value(&self) -> &StringValue {
        &self.value
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
