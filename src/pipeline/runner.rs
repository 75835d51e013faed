use crate::contains::{AssertionResult, Quantifier, SearchTerm, evaluate};
use crate::count::{ComparisonMode, count_occurrences};
use crate::input::TextInput;
use crate::message::render_default;
use crate::suite::Check;
use crate::validation::ValidationError;
use serde::Serialize;

pub const RECORD_VERSION: &str = "occurs.v0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordOutcome {
    Passed,
    Failed,
    Skipped,
}

/// Output record for one input evaluated against a suite.
#[derive(Debug, Clone, Serialize)]
pub struct InputRecord {
    pub version: &'static str,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_hash: Option<String>,
    pub outcome: RecordOutcome,
    pub checks: Vec<CheckRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckRecord {
    pub name: String,
    pub passed: bool,
    pub mode: ComparisonMode,
    pub quantifier: Quantifier,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mismatches: Vec<MismatchRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MismatchRecord {
    pub term: SearchTerm,
    pub actual: usize,
}

/// Output record of the `count` subcommand: one per input and term.
#[derive(Debug, Clone, Serialize)]
pub struct CountRecord {
    pub version: &'static str,
    pub path: String,
    pub input_hash: String,
    pub term: String,
    pub mode: ComparisonMode,
    pub count: usize,
}

/// Evaluate every check against one input.
pub fn run_checks(input: &TextInput, checks: &[Check]) -> InputRecord {
    let check_records: Vec<CheckRecord> = checks
        .iter()
        .map(|check| run_check(input.content(), check))
        .collect();

    let outcome = if check_records.iter().all(|record| record.passed) {
        RecordOutcome::Passed
    } else {
        RecordOutcome::Failed
    };

    InputRecord {
        version: RECORD_VERSION,
        path: input.path.clone(),
        input_hash: Some(input.input_hash.clone()),
        outcome,
        checks: check_records,
        error: None,
    }
}

fn run_check(subject: &str, check: &Check) -> CheckRecord {
    let mut record = CheckRecord {
        name: check.name.clone(),
        passed: false,
        mode: check.mode,
        quantifier: check.quantifier,
        mismatches: Vec::new(),
        message: None,
    };

    match evaluate(subject, &check.terms, check.mode, check.quantifier) {
        Ok(AssertionResult::Success) => record.passed = true,
        Ok(AssertionResult::Failure(failure)) => {
            record.mismatches = failure
                .mismatches
                .iter()
                .map(|mismatch| MismatchRecord {
                    term: mismatch.term.clone(),
                    actual: mismatch.actual,
                })
                .collect();
            record.message = Some(render_default(&failure));
        }
        Err(error) => record.message = Some(error.to_string()),
    }

    record
}

/// Record for an input that could not be read.
pub fn skipped_record(path: &str, error: &str) -> InputRecord {
    InputRecord {
        version: RECORD_VERSION,
        path: path.to_owned(),
        input_hash: None,
        outcome: RecordOutcome::Skipped,
        checks: Vec::new(),
        error: Some(error.to_owned()),
    }
}

/// Count each term in one input, in term order.
pub fn count_terms(
    input: &TextInput,
    terms: &[String],
    mode: ComparisonMode,
) -> Result<Vec<CountRecord>, ValidationError> {
    terms
        .iter()
        .map(|term| {
            Ok(CountRecord {
                version: RECORD_VERSION,
                path: input.path.clone(),
                input_hash: input.input_hash.clone(),
                term: term.clone(),
                mode,
                count: count_occurrences(input.content(), term, mode)?,
            })
        })
        .collect()
}
