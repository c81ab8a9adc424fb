//! Framework-facing vocabulary shared by the tftime value types.
//!
//! Provider plugins describe attribute values as null, unknown, or a known
//! string, and report problems as accumulated diagnostics rather than errors.
//! This crate holds those building blocks so the value types in
//! `tftime-types` can stay focused on their grammars.

pub mod config;
pub mod diag;
pub mod error;
pub mod function;
pub mod logging;
pub mod validator;
pub mod value;

pub use diag::{AttributePath, Diagnostic, Diagnostics, PathStep, Severity};
pub use function::FuncError;
pub use value::{StringValuable, StringValue};
