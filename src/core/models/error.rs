//! Matcher errors

use thiserror::Error;

/// Errors raised by the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A required input was absent
    #[error("invalid argument: {argument} must not be null")]
    InvalidArgument {
        /// Name of the missing argument
        argument: &'static str,
    },
}

impl MatchError {
    /// Create an invalid argument error
    #[must_use]
    pub const fn invalid_argument(argument: &'static str) -> Self {
        Self::InvalidArgument { argument }
    }
}
