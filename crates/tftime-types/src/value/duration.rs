//! Duration strings such as `1h2m3s`, compared by the duration they denote.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use tftime_core::{AttributePath, Diagnostic, Diagnostics, FuncError, StringValuable, StringValue};

use super::flavor::{DurationFlavor, GoDurationFlavor, TimeDurationFlavor};
use super::invalid_string_detail;
use crate::core::TimeDuration;
use crate::parse::duration::{DurationParseError, parse_duration};

/// A general-purpose time duration string.
pub type DurationValue = DurationString<TimeDurationFlavor>;

/// A Go time duration string; diagnostics spell out the accepted grammar.
pub type GoDurationValue = DurationString<GoDurationFlavor>;

/// ## Summary
/// A duration string value, parameterised by the wording of its diagnostics.
///
/// Equality is numeric: `"3h25m63s"` equals `"12363s"` because both denote
/// the same number of nanoseconds. When either side does not parse, the raw
/// strings are compared instead.
#[derive(Debug, Clone)]
pub struct DurationString<F: DurationFlavor> {
    value: StringValue,
    flavor: PhantomData<F>,
}

impl<F: DurationFlavor> DurationString<F> {
    const fn wrap(value: StringValue) -> Self {
        Self {
            value,
            flavor: PhantomData,
        }
    }

    #[must_use]
    pub const fn null() -> Self {
        Self::wrap(StringValue::Null)
    }

    #[must_use]
    pub const fn unknown() -> Self {
        Self::wrap(StringValue::Unknown)
    }

    /// Wraps a raw string without validating it.
    ///
    /// Use this where the host framework hands over configuration as-is;
    /// validation happens later through [`Self::validate_attribute`].
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self::wrap(StringValue::Known(raw.into()))
    }

    /// Creates a known value holding the canonical rendering of `duration`.
    #[must_use]
    pub fn from_duration(duration: TimeDuration) -> Self {
        Self::new(duration.to_string())
    }

    /// Like [`Self::from_duration`], with `None` producing a null value.
    #[must_use]
    pub fn from_option_duration(duration: Option<TimeDuration>) -> Self {
        duration.map_or_else(Self::null, Self::from_duration)
    }

    /// ## Summary
    /// Creates a known value from a string, validating the grammar first.
    ///
    /// ## Errors
    /// Returns a single diagnostic if `raw` is not a valid duration string.
    pub fn from_string(raw: &str) -> Result<Self, Diagnostics> {
        match parse_duration(raw) {
            Ok(_) => Ok(Self::new(raw)),
            Err(err) => Err(Diagnostics::from(Self::invalid_string_diagnostic(raw, &err))),
        }
    }

    /// ## Summary
    /// Creates a known value from a trusted string.
    ///
    /// Only for values that cannot affect practitioners, such as test
    /// fixtures or exhaustively tested defaults.
    ///
    /// ## Panics
    /// Panics if `raw` is not a valid duration string.
    #[must_use]
    pub fn from_string_must(raw: &str) -> Self {
        if let Err(err) = parse_duration(raw) {
            panic!("Invalid {} String Value ({raw}): {err}", F::MUST_LABEL);
        }
        Self::new(raw)
    }

    /// ## Summary
    /// Like [`Self::from_string`], with `None` producing a null value.
    ///
    /// ## Errors
    /// Returns a single diagnostic if `raw` is present and invalid.
    pub fn from_option_string(raw: Option<&str>) -> Result<Self, Diagnostics> {
        raw.map_or_else(|| Ok(Self::null()), Self::from_string)
    }

    /// ## Summary
    /// Like [`Self::from_string_must`], with `None` producing a null value.
    ///
    /// ## Panics
    /// Panics if `raw` is present and not a valid duration string.
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

    /// The raw string, or empty for null and unknown values.
    #[must_use]
    pub fn value_str(&self) -> &str {
        self.value.value_str()
    }

    #[must_use]
    pub const fn string_value(&self) -> &StringValue {
        &self.value
    }

    /// ## Summary
    /// Converts the value to its nanosecond duration.
    ///
    /// ## Errors
    /// Returns a diagnostic if the value is null, unknown, or not a valid
    /// duration string.
    pub fn value_duration(&self) -> Result<TimeDuration, Diagnostics> {
        let raw = match &self.value {
            StringValue::Null => {
                return Err(Diagnostics::from(Diagnostic::error(
                    F::VALUE_ERROR_SUMMARY,
                    F::NULL_DETAIL,
                )));
            }
            StringValue::Unknown => {
                return Err(Diagnostics::from(Diagnostic::error(
                    F::VALUE_ERROR_SUMMARY,
                    F::UNKNOWN_DETAIL,
                )));
            }
            StringValue::Known(raw) => raw,
        };

        parse_duration(raw).map_err(|err| {
            Diagnostics::from(Diagnostic::error(F::VALUE_ERROR_SUMMARY, err.to_string()))
        })
    }

    /// ## Summary
    /// Validates the raw string for an attribute at `path`.
    ///
    /// Null and unknown values are skipped. An invalid string produces exactly
    /// one diagnostic embedding the string and the parser error.
    #[must_use]
    pub fn validate_attribute(&self, path: &AttributePath) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        let Some(raw) = self.value.as_known() else {
            return diagnostics;
        };

        if let Err(err) = parse_duration(raw) {
            tracing::debug!(path = %path, value = raw, error = %err, "Invalid duration attribute value");
            diagnostics.append(Self::invalid_string_diagnostic(raw, &err).with_path(path.clone()));
        }
        diagnostics
    }

    /// ## Summary
    /// Validates the raw string as the function argument at `position`.
    ///
    /// Null and unknown values are skipped.
    #[must_use]
    pub fn validate_parameter(&self, position: i64) -> Option<FuncError> {
        let raw = self.value.as_known()?;
        let err = parse_duration(raw).err()?;

        tracing::debug!(position, value = raw, error = %err, "Invalid duration function argument");
        Some(FuncError::argument(
            position,
            format!(
                "{}{}",
                F::PARAMETER_PREFIX,
                invalid_string_detail(F::INVALID_DETAIL_LEAD, raw, &err)
            ),
        ))
    }

    /// ## Summary
    /// Compares against any string value the framework hands over.
    ///
    /// Values of a different type are never equal.
    #[must_use]
    pub fn equal(&self, other: &dyn StringValuable) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    fn invalid_string_diagnostic(raw: &str, err: &DurationParseError) -> Diagnostic {
        Diagnostic::error(
            F::INVALID_SUMMARY,
            invalid_string_detail(F::INVALID_DETAIL_LEAD, raw, err),
        )
    }

    fn parsed(&self) -> Option<TimeDuration> {
        self.value.as_known().and_then(|raw| parse_duration(raw).ok())
    }
}

impl<F: DurationFlavor> Default for DurationString<F> {
    fn default() -> Self {
        Self::null()
    }
}

impl<F: DurationFlavor> PartialEq for DurationString<F> {
    fn eq(&self, other: &Self) -> bool {
        match (self.parsed(), other.parsed()) {
            (Some(this), Some(that)) => this == that,
            _ => self.value == other.value,
        }
    }
}

impl<F: DurationFlavor> Eq for DurationString<F> {}

impl<F: DurationFlavor> fmt::Display for DurationString<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<F: DurationFlavor> From<TimeDuration> for DurationString<F> {
    fn from(duration: TimeDuration) -> Self {
        Self::from_duration(duration)
    }
}

impl<F: DurationFlavor> FromStr for DurationString<F> {
    type Err = Diagnostics;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl<F: DurationFlavor> StringValuable for DurationString<F> {
    fn value_type_name(&self) -> &'static str {
        F::TYPE_NAME
    }

    fn string_value(&self) -> &StringValue {
        &self.value
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
