use thiserror::Error;

/// Errors raised outside the diagnostic flow: native conversions and
/// validator configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("Duration out of range: {0}")]
    DurationOutOfRange(String),

    #[error(transparent)]
    CoreError(#[from] tftime_core::error::CoreError),
}

pub type TypesResult<T> = std::result::Result<T, TypesError>;
