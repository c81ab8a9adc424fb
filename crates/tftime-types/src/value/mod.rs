//! String-backed value types with lazy grammar validation.
//!
//! Each type keeps the raw string it was given, valid or not. Validation
//! happens when the host framework asks for it (`validate_attribute`,
//! `validate_parameter`) or when the value is converted to its native form.

pub mod duration;
pub mod flavor;
pub mod rfc3339;

use std::fmt::Display;

use tftime_core::Diagnostic;

pub use duration::{DurationString, DurationValue, GoDurationValue};
pub use flavor::{DurationFlavor, GoDurationFlavor, TimeDurationFlavor};
pub use rfc3339::Rfc3339Value;

/// Detail body shared by every invalid-string report.
fn invalid_string_detail(lead: &str, value: &str, err: &dyn Display) -> String {
    format!("{lead}\n\nGiven Value: {value}\nError: {err}")
}

/// Diagnostic for a semantic equality check handed a value of the wrong type.
fn semantic_equality_mismatch(expected: &str, got: &str) -> Diagnostic {
    Diagnostic::error(
        "Semantic Equality Check Error",
        format!(
            "An unexpected value type was received while performing semantic equality checks. \
             Please report this to the provider developers.\n\n\
             Expected Value Type: {expected}\n\
             Got Value Type: {got}"
        ),
    )
}
