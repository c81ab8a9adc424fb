//! Message text that distinguishes the two duration value types.
//!
//! Both accept the same grammar and behave identically; only the wording
//! providers show to practitioners differs.

use std::fmt;

use const_str::concat;

const DURATION_GRAMMAR_HELP: &str = concat!(
    "A duration string is a sequence of numbers, each with optional fraction and a unit suffix, ",
    "such as \"300ms\", \"-1.5h\" or \"2h45m\". ",
    "Valid time units are \"ns\", \"us\" (or \"µs\"), \"ms\", \"s\", \"m\", \"h\"."
);

const TIME_DURATION_INVALID_SUMMARY: &str = "Invalid time duration String Value";
const GO_DURATION_INVALID_SUMMARY: &str = "Invalid Time Duration String Value";
const GO_DURATION_PARAMETER_SUMMARY: &str = "Invalid Go Time Duration String Value";

/// ## Summary
/// Strategy supplying the display strings of a duration value type.
pub trait DurationFlavor: fmt::Debug + Clone + Copy + Send + Sync + 'static {
    /// Name reported in type-mismatch diagnostics.
    const TYPE_NAME: &'static str;
    /// Summary of the attribute diagnostic for an invalid string.
    const INVALID_SUMMARY: &'static str;
    /// First paragraph of the invalid-string detail.
    const INVALID_DETAIL_LEAD: &'static str;
    /// Prefix of the function parameter error text.
    const PARAMETER_PREFIX: &'static str;
    /// Summary of the diagnostic returned when conversion to a duration fails.
    const VALUE_ERROR_SUMMARY: &'static str;
    const NULL_DETAIL: &'static str;
    const UNKNOWN_DETAIL: &'static str;
    /// Type label used in the panic message of the `*_must` constructors.
    const MUST_LABEL: &'static str;
}

/// Wording of the general-purpose time duration value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TimeDurationFlavor;

impl DurationFlavor for TimeDurationFlavor {
    const TYPE_NAME: &'static str = "DurationValue";
    const INVALID_SUMMARY: &'static str = TIME_DURATION_INVALID_SUMMARY;
    const INVALID_DETAIL_LEAD: &'static str =
        "A string value was provided that is not valid time duration string format.";
    const PARAMETER_PREFIX: &'static str = concat!(TIME_DURATION_INVALID_SUMMARY, ": ");
    const VALUE_ERROR_SUMMARY: &'static str = "Duration ValueDuration Error";
    const NULL_DETAIL: &'static str = "Duration string value is null";
    const UNKNOWN_DETAIL: &'static str = "Duration string value is unknown";
    const MUST_LABEL: &'static str = "Duration";
}

/// Wording of the Go duration value, which spells out the grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GoDurationFlavor;

impl DurationFlavor for GoDurationFlavor {
    const TYPE_NAME: &'static str = "GoDurationValue";
    const INVALID_SUMMARY: &'static str = GO_DURATION_INVALID_SUMMARY;
    const INVALID_DETAIL_LEAD: &'static str = concat!(
        "A string value was provided that is not a valid Go Time Duration string format. ",
        DURATION_GRAMMAR_HELP
    );
    const PARAMETER_PREFIX: &'static str = concat!(GO_DURATION_PARAMETER_SUMMARY, ": ");
    const VALUE_ERROR_SUMMARY: &'static str = "Go Duration ValueDuration Error";
    const NULL_DETAIL: &'static str = "Duration string value is null";
    const UNKNOWN_DETAIL: &'static str = "Duration string value is unknown";
    const MUST_LABEL: &'static str = "GoDuration";
}
