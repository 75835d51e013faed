use crate::contains::Failure;
use crate::message::render_default;
use crate::validation::ValidationError;
use std::fmt;

/// Error raised by a fluent assertion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionError {
    /// The assertion was called with arguments it does not accept.
    InvalidArgument(ValidationError),
    /// The subject did not satisfy the assertion.
    Failed(Failure),
}

impl AssertionError {
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Failed(failure) => Some(failure),
            Self::InvalidArgument(_) => None,
        }
    }
}

impl fmt::Display for AssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(f, "invalid argument: {error}"),
            Self::Failed(failure) => f.write_str(&render_default(failure)),
        }
    }
}

impl std::error::Error for AssertionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
            Self::Failed(_) => None,
        }
    }
}

impl From<ValidationError> for AssertionError {
    fn from(error: ValidationError) -> Self {
        Self::InvalidArgument(error)
    }
}
