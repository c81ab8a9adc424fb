//! Tri-state string values as seen by the host framework.

use std::any::Any;
use std::fmt;

/// A string attribute value.
///
/// `Unknown` is the planning-phase placeholder for a value that will only be
/// computed during apply; `Null` is an explicit absence. The default is
/// `Null`, matching a zero-valued attribute in the host framework.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum StringValue {
    #[default]
    Null,
    Unknown,
    Known(String),
}

impl StringValue {
    #[must_use]
    pub const fn null() -> Self {
        Self::Null
    }

    #[must_use]
    pub const fn unknown() -> Self {
        Self::Unknown
    }

    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self::Known(value.into())
    }

    /// Builds a known value, or `Null` when `value` is `None`.
    #[must_use]
    pub fn from_option<S: Into<String>>(value: Option<S>) -> Self {
        value.map_or(Self::Null, |v| Self::Known(v.into()))
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Returns the raw string of a known value.
    #[must_use]
    pub fn as_known(&self) -> Option<&str> {
        match self {
            Self::Known(value) => Some(value.as_str()),
            Self::Null | Self::Unknown => None,
        }
    }

    /// Returns the raw string, or an empty string for null and unknown values.
    #[must_use]
    pub fn value_str(&self) -> &str {
        self.as_known().unwrap_or_default()
    }
}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("<null>"),
            Self::Unknown => f.write_str("<unknown>"),
            Self::Known(value) => write!(f, "{value:?}"),
        }
    }
}

impl From<&str> for StringValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StringValue {
    fn from(value: String) -> Self {
        Self::Known(value)
    }
}

/// ## Summary
/// Anything the host framework can treat as a string attribute value.
///
/// Custom value types implement this so semantic equality checks can receive
/// an arbitrary value and detect when it is not of the expected type.
pub trait StringValuable: fmt::Debug + Send + Sync {
    /// Name reported in type-mismatch diagnostics.
    fn value_type_name(&self) -> &'static str;

    /// The underlying tri-state string.
    fn string_value(&self) -> &StringValue;

    fn as_any(&self) -> &dyn Any;

    fn is_null(&self) -> bool {
        self.string_value().is_null()
    }

    fn is_unknown(&self) -> bool {
        self.string_value().is_unknown()
    }
}

impl StringValuable for StringValue {
    fn value_type_name(&self) -> &'static str {
        "StringValue"
    }

    fn string_value(&self) -> &StringValue {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_null() {
        assert!(StringValue::default().is_null());
    }

    #[test]
    fn value_str_of_non_known_is_empty() {
        assert_eq!(StringValue::null().value_str(), "");
        assert_eq!(StringValue::unknown().value_str(), "");
        assert_eq!(StringValue::new("1s").value_str(), "1s");
    }

    #[test]
    fn from_option_maps_none_to_null() {
        assert_eq!(StringValue::from_option(None::<&str>), StringValue::Null);
        assert_eq!(
            StringValue::from_option(Some("x")),
            StringValue::Known("x".to_string())
        );
    }

    #[test]
    fn display_marks_states() {
        assert_eq!(StringValue::null().to_string(), "<null>");
        assert_eq!(StringValue::unknown().to_string(), "<unknown>");
        assert_eq!(StringValue::new("a\"b").to_string(), "\"a\\\"b\"");
    }

    #[test]
    fn string_value_reports_its_type_name() {
        let value = StringValue::new("abc");
        let valuable: &dyn StringValuable = &value;
        assert_eq!(valuable.value_type_name(), "StringValue");
        assert!(valuable.as_any().downcast_ref::<StringValue>().is_some());
    }
}
