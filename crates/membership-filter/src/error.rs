//! Error types for the membership filter

use thiserror::Error;

/// Errors that can occur when building or querying a membership filter
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl FilterError {
    /// Shorthand for an [`FilterError::InvalidConfiguration`] error
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}

impl From<std::str::Utf8Error> for FilterError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::InvalidInput(format!("item is not valid UTF-8: {}", err))
    }
}
