//! Diagnostics accumulated while validating attribute values.

pub mod diagnostic;
pub mod path;

pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use path::{AttributePath, PathStep};
