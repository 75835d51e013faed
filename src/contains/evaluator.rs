use crate::contains::{AssertionResult, Failure, Mismatch, Quantifier, SearchTerm};
use crate::count::{ComparisonMode, count_occurrences};
use crate::validation::ValidationError;
use std::collections::HashMap;

/// Evaluate a quantified containment assertion over `subject`.
///
/// The quantifier and every term are validated before anything is counted.
/// Each distinct term is counted once; repeated terms are still checked and
/// reported individually. Mismatches keep the order of `terms`.
pub fn evaluate(
    subject: &str,
    terms: &[SearchTerm],
    mode: ComparisonMode,
    quantifier: Quantifier,
) -> Result<AssertionResult, ValidationError> {
    let quantifier = quantifier.validate()?;
    validate_terms(terms)?;

    let mut counts: HashMap<&SearchTerm, usize> = HashMap::with_capacity(terms.len());
    let mut mismatches = Vec::new();

    for term in terms {
        let actual = match counts.get(term) {
            Some(count) => *count,
            None => {
                let count = count_occurrences(subject, &term.text(), mode)?;
                counts.insert(term, count);
                count
            }
        };

        if !quantifier.is_satisfied_by(actual) {
            mismatches.push(Mismatch {
                term: term.clone(),
                mode,
                quantifier,
                actual,
            });
        }
    }

    if mismatches.is_empty() {
        return Ok(AssertionResult::Success);
    }

    Ok(AssertionResult::Failure(Failure {
        subject: subject.to_owned(),
        mode,
        quantifier,
        mismatches,
    }))
}

pub fn validate_terms(terms: &[SearchTerm]) -> Result<(), ValidationError> {
    if terms.is_empty() {
        return Err(ValidationError::NoTerms);
    }

    match terms.iter().position(SearchTerm::is_empty) {
        Some(position) => Err(ValidationError::EmptyTerm {
            position: Some(position),
        }),
        None => Ok(()),
    }
}
