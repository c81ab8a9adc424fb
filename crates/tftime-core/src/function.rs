//! Errors reported while validating provider-defined function parameters.

use serde::Serialize;
use thiserror::Error;

/// ## Summary
/// An error returned from function parameter validation.
///
/// Unlike attribute diagnostics, a function call reports at most one error,
/// optionally tied to the zero-based position of the offending argument.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{text}")]
pub struct FuncError {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_argument: Option<i64>,
}

impl FuncError {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            function_argument: None,
        }
    }

    /// Creates an error attributed to the argument at `position`.
    #[must_use]
    pub fn argument(position: i64, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            function_argument: Some(position),
        }
    }
}
