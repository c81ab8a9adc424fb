use tftime_core::validator::{StringRequest, StringResponse, StringValidator};

use super::check_range;
use crate::core::TimeDuration;

/// Requires the configured duration to be greater than or equal to a minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtLeast {
    minimum: TimeDuration,
}

impl AtLeast {
    #[must_use]
    pub const fn new(minimum: TimeDuration) -> Self {
        Self { minimum }
    }

    #[must_use]
    pub const fn minimum(self) -> TimeDuration {
        self.minimum
    }
}

impl StringValidator for AtLeast {
    fn description(&self) -> String {
        format!("value must be at least {}", self.minimum)
    }

    fn validate_string(&self, request: &StringRequest, response: &mut StringResponse) {
        check_range(request, response, &self.description(), |d| {
            d < self.minimum
        });
    }
}

/// Shorthand for [`AtLeast::new`].
#[must_use]
pub const fn at_least(minimum: TimeDuration) -> AtLeast {
    AtLeast::new(minimum)
}
