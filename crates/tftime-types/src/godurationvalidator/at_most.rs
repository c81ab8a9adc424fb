use tftime_core::validator::{StringRequest, StringResponse, StringValidator};

use super::check_range;
use crate::core::TimeDuration;

/// Requires the configured duration to be less than or equal to a maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtMost {
    maximum: TimeDuration,
}

impl AtMost {
    #[must_use]
    pub const fn new(maximum: TimeDuration) -> Self {
        Self { maximum }
    }

    #[must_use]
    pub const fn maximum(self) -> TimeDuration {
        self.maximum
    }
}

impl StringValidator for AtMost {
    fn description(&self) -> String {
        format!("value must be at most {}", self.maximum)
    }

    fn validate_string(&self, request: &StringRequest, response: &mut StringResponse) {
        check_range(request, response, &self.description(), |d| {
            d > self.maximum
        });
    }
}

/// Shorthand for [`AtMost::new`].
#[must_use]
pub const fn at_most(maximum: TimeDuration) -> AtMost {
    AtMost::new(maximum)
}
