//! Schema validators bounding the duration a string attribute denotes.
//!
//! These only check range. A value that does not parse is skipped; reporting
//! the format problem is the job of the value type's own validation.

pub mod at_least;
pub mod at_most;
pub mod between;

use tftime_core::validator::{StringRequest, StringResponse, invalid_attribute_value_diagnostic};

pub use at_least::{AtLeast, at_least};
pub use at_most::{AtMost, at_most};
pub use between::{Between, between_with_policy};

use crate::core::TimeDuration;
use crate::parse::parse_duration;

/// Appends a diagnostic when the configured duration is `out_of_range`.
///
/// Null, unknown and unparseable values are left alone.
fn check_range(
    request: &StringRequest,
    response: &mut StringResponse,
    description: &str,
    out_of_range: impl FnOnce(TimeDuration) -> bool,
) {
    let Some(raw) = request.config_value.as_known() else {
        return;
    };
    let Ok(duration) = parse_duration(raw) else {
        tracing::trace!(path = %request.path, value = raw, "Skipping range check of unparseable duration");
        return;
    };

    if out_of_range(duration) {
        tracing::debug!(path = %request.path, value = raw, description, "Duration out of range");
        response.diagnostics.append(invalid_attribute_value_diagnostic(
            &request.path,
            description,
            &duration.to_string(),
        ));
    }
}

#[cfg(test)]
mod tests;
