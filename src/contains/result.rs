use crate::contains::{Quantifier, SearchTerm};
use crate::count::ComparisonMode;
use serde::Serialize;

/// Outcome of one quantified containment evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AssertionResult {
    Success,
    Failure(Failure),
}

impl AssertionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Success => None,
            Self::Failure(failure) => Some(failure),
        }
    }
}

/// Everything needed to explain why a containment assertion did not hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub subject: String,
    pub mode: ComparisonMode,
    pub quantifier: Quantifier,
    /// Failing terms only, in the order they were given.
    pub mismatches: Vec<Mismatch>,
}

/// One search term whose occurrence count violated the quantifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub term: SearchTerm,
    pub mode: ComparisonMode,
    pub quantifier: Quantifier,
    pub actual: usize,
}
