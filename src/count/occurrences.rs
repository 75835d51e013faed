use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a search term is compared against the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    #[default]
    Exact,
    IgnoringCase,
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => f.write_str("exact"),
            Self::IgnoringCase => f.write_str("ignoring_case"),
        }
    }
}

/// Count non-overlapping, left-to-right occurrences of `term` in `subject`.
///
/// After each match the scan resumes right after the matched span, so `"aaa"`
/// contains `"aa"` once. Under [`ComparisonMode::IgnoringCase`] both sides are
/// folded to lowercase one character at a time before counting.
pub fn count_occurrences(
    subject: &str,
    term: &str,
    mode: ComparisonMode,
) -> Result<usize, ValidationError> {
    if term.is_empty() {
        return Err(ValidationError::EmptyTerm { position: None });
    }

    let count = match mode {
        ComparisonMode::Exact => count_disjoint(subject, term),
        ComparisonMode::IgnoringCase => count_disjoint(&fold_case(subject), &fold_case(term)),
    };
    Ok(count)
}

fn count_disjoint(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

// `str::to_lowercase` applies the context-sensitive final sigma rule, which can
// turn an exact match into a non-match. Folding each char on its own cannot.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}
