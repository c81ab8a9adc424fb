//! Grammar parsers for the string value types.

pub mod duration;
pub mod quote;
pub mod rfc3339;

pub use duration::{DurationParseError, parse_duration};
pub use rfc3339::{RFC3339_LAYOUT, TimeParseError, parse_rfc3339};
