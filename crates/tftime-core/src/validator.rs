//! The seam through which schema-level validators inspect string attributes.

use crate::diag::{AttributePath, Diagnostic, Diagnostics};
use crate::value::StringValue;

/// Summary used by every out-of-range attribute diagnostic.
pub const INVALID_ATTRIBUTE_VALUE_SUMMARY: &str = "Invalid Attribute Value";

/// Input to a [`StringValidator`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringRequest {
    pub path: AttributePath,
    pub config_value: StringValue,
}

impl StringRequest {
    #[must_use]
    pub fn new(path: AttributePath, config_value: impl Into<StringValue>) -> Self {
        Self {
            path,
            config_value: config_value.into(),
        }
    }
}

/// Output of a [`StringValidator`]; validators only ever append.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringResponse {
    pub diagnostics: Diagnostics,
}

/// ## Summary
/// A reusable check attached to a string attribute in a schema.
pub trait StringValidator: Send + Sync {
    /// Plain-text description of what the validator enforces.
    fn description(&self) -> String;

    /// Markdown description; plain text unless a validator needs formatting.
    fn markdown_description(&self) -> String {
        self.description()
    }

    fn validate_string(&self, request: &StringRequest, response: &mut StringResponse);
}

/// ## Summary
/// Builds the diagnostic reported when an attribute value is outside what a
/// validator allows.
#[must_use]
pub fn invalid_attribute_value_diagnostic(
    path: &AttributePath,
    description: &str,
    value: &str,
) -> Diagnostic {
    Diagnostic::attribute_error(
        path.clone(),
        INVALID_ATTRIBUTE_VALUE_SUMMARY,
        format!("Attribute {path} {description}, got: {value}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_detail_names_path_and_value() {
        let diag = invalid_attribute_value_diagnostic(
            &AttributePath::root("test"),
            "value must be at least 1s",
            "0s",
        );

        assert_eq!(diag.summary(), "Invalid Attribute Value");
        assert_eq!(
            diag.detail(),
            "Attribute test value must be at least 1s, got: 0s"
        );
        assert_eq!(diag.path(), Some(&AttributePath::root("test")));
    }
}
