use std::fmt;

/// Misuse of the assertion API, detected before any counting takes place.
///
/// These are not assertion failures: they mean the calling test is written
/// wrong and has to be changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A bound below zero was requested.
    NonPositive { given: i64 },
    /// Zero occurrences were requested through a counting assertion.
    UseContainsNot,
    /// `contains_at_most(1)` was requested.
    UseExactly { times: usize },
    /// A search term is empty; `position` is its index in the term list when known.
    EmptyTerm { position: Option<usize> },
    /// No search term was given at all.
    NoTerms,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { given } => {
                write!(f, "only positive numbers allowed, given: {given}")
            }
            Self::UseContainsNot => f.write_str(
                "use contains_not instead of expecting 0 occurrences; \
                 counting assertions require at least one occurrence",
            ),
            Self::UseExactly { times } => write!(
                f,
                "use contains_exactly({times}) instead of contains_at_most({times})"
            ),
            Self::EmptyTerm {
                position: Some(position),
            } => write!(f, "search term #{position} is empty"),
            Self::EmptyTerm { position: None } => f.write_str("search term is empty"),
            Self::NoTerms => f.write_str("at least one search term is required"),
        }
    }
}

impl std::error::Error for ValidationError {}
