use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_configuration_display() {
        let err = CoreError::InvalidConfiguration("minimum is greater than maximum".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: minimum is greater than maximum"
        );
    }
}
