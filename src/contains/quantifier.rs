use crate::validation::ValidationError;
use serde::Serialize;
use std::fmt;

/// The relation an occurrence count is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantifier {
    AtLeast(usize),
    AtMost(usize),
    Exactly(usize),
    /// Zero occurrences.
    Not,
}

impl Quantifier {
    /// Build a validated `AtLeast` quantifier.
    pub fn at_least(times: i64) -> Result<Self, ValidationError> {
        Self::AtLeast(non_negative(times)?).validate()
    }

    /// Build a validated `AtMost` quantifier.
    pub fn at_most(times: i64) -> Result<Self, ValidationError> {
        Self::AtMost(non_negative(times)?).validate()
    }

    /// Build a validated `Exactly` quantifier.
    pub fn exactly(times: i64) -> Result<Self, ValidationError> {
        Self::Exactly(non_negative(times)?).validate()
    }

    /// Reject bounds that have a more precise dedicated assertion.
    ///
    /// Zero occurrences belong to `contains_not` whichever counting form asked
    /// for them, and "at most once" is spelled `contains_exactly(1)`.
    pub fn validate(self) -> Result<Self, ValidationError> {
        match self {
            Self::AtLeast(0) | Self::AtMost(0) | Self::Exactly(0) => {
                Err(ValidationError::UseContainsNot)
            }
            Self::AtMost(1) => Err(ValidationError::UseExactly { times: 1 }),
            _ => Ok(self),
        }
    }

    pub fn is_satisfied_by(self, count: usize) -> bool {
        match self {
            Self::AtLeast(times) => count >= times,
            Self::AtMost(times) => count <= times,
            Self::Exactly(times) => count == times,
            Self::Not => count == 0,
        }
    }

    /// The numeric bound, `None` for [`Quantifier::Not`].
    pub fn bound(self) -> Option<usize> {
        match self {
            Self::AtLeast(times) | Self::AtMost(times) | Self::Exactly(times) => Some(times),
            Self::Not => None,
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtLeast(times) => write!(f, "contains_at_least({times})"),
            Self::AtMost(times) => write!(f, "contains_at_most({times})"),
            Self::Exactly(times) => write!(f, "contains_exactly({times})"),
            Self::Not => f.write_str("contains_not"),
        }
    }
}

fn non_negative(times: i64) -> Result<usize, ValidationError> {
    usize::try_from(times).map_err(|_| ValidationError::NonPositive { given: times })
}
