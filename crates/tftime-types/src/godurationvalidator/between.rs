use tftime_core::config::InvertedBoundsPolicy;
use tftime_core::error::CoreError;
use tftime_core::validator::{StringRequest, StringResponse, StringValidator};

use super::check_range;
use crate::core::TimeDuration;
use crate::error::TypesResult;

/// ## Summary
/// Requires the configured duration to lie in a closed interval.
///
/// Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Between {
    minimum: TimeDuration,
    maximum: TimeDuration,
}

impl Between {
    /// ## Errors
    /// Returns [`CoreError::InvalidConfiguration`] if `minimum > maximum`.
    pub fn new(minimum: TimeDuration, maximum: TimeDuration) -> TypesResult<Self> {
        if minimum > maximum {
            return Err(CoreError::InvalidConfiguration(format!(
                "duration range minimum {minimum} is greater than maximum {maximum}"
            ))
            .into());
        }
        Ok(Self { minimum, maximum })
    }

    #[must_use]
    pub const fn minimum(&self) -> TimeDuration {
        self.minimum
    }

    #[must_use]
    pub const fn maximum(&self) -> TimeDuration {
        self.maximum
    }
}

impl StringValidator for Between {
    fn description(&self) -> String {
        format!(
            "value must be between {} and {}",
            self.minimum, self.maximum
        )
    }

    fn validate_string(&self, request: &StringRequest, response: &mut StringResponse) {
        check_range(request, response, &self.description(), |d| {
            d < self.minimum || d > self.maximum
        });
    }
}

/// ## Summary
/// Builds a [`Between`] validator, resolving inverted bounds by `policy`.
///
/// With [`InvertedBoundsPolicy::Disable`], inverted bounds yield `Ok(None)`
/// and the attribute goes unchecked.
///
/// ## Errors
/// Returns [`CoreError::InvalidConfiguration`] for inverted bounds under
/// [`InvertedBoundsPolicy::Reject`].
pub fn between_with_policy(
    minimum: TimeDuration,
    maximum: TimeDuration,
    policy: InvertedBoundsPolicy,
) -> TypesResult<Option<Between>> {
    match (Between::new(minimum, maximum), policy) {
        (Ok(between), _) => Ok(Some(between)),
        (Err(_), InvertedBoundsPolicy::Disable) => {
            tracing::warn!(%minimum, %maximum, "Inverted duration bounds, range validation disabled");
            Ok(None)
        }
        (Err(err), InvertedBoundsPolicy::Reject) => Err(err),
    }
}
