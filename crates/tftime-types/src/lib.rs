//! String-backed timestamp and duration types for provider schemas.
//!
//! [`Rfc3339Value`] holds an RFC 3339 timestamp, compared semantically by the
//! instant it denotes. [`DurationValue`] and [`GoDurationValue`] hold duration
//! strings such as `1h30m`, compared by their nanosecond count. The
//! [`godurationvalidator`] module bounds the duration an attribute may take.

pub mod core;
pub mod error;
pub mod godurationvalidator;
pub mod parse;
pub mod value;

pub use crate::core::TimeDuration;
pub use error::{TypesError, TypesResult};
pub use value::{DurationString, DurationValue, GoDurationValue, Rfc3339Value};
