use crate::contains::evaluator::validate_terms;
use crate::contains::{Quantifier, SearchTerm};
use crate::count::ComparisonMode;
use crate::validation::ValidationError;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Parsed `.occurs.yaml` suite of containment checks.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteDefinition {
    #[serde(default)]
    pub suite_id: Option<String>,
    pub checks: Vec<CheckDefinition>,
}

/// One check as written in YAML. Exactly one of `at_least`, `at_most`,
/// `exactly` or `contains_not` selects the quantifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckDefinition {
    pub name: String,
    pub terms: Vec<String>,
    #[serde(default)]
    pub ignoring_case: bool,
    #[serde(default)]
    pub at_least: Option<i64>,
    #[serde(default)]
    pub at_most: Option<i64>,
    #[serde(default)]
    pub exactly: Option<i64>,
    #[serde(default)]
    pub contains_not: bool,
}

/// A validated check, ready to evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub name: String,
    pub terms: Vec<SearchTerm>,
    pub mode: ComparisonMode,
    pub quantifier: Quantifier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    NoChecks,
    DuplicateName {
        name: String,
    },
    MissingQuantifier {
        name: String,
    },
    ConflictingQuantifiers {
        name: String,
        given: Vec<&'static str>,
    },
    Invalid {
        name: String,
        error: ValidationError,
    },
}

impl CheckError {
    /// Name of the offending check, if the error concerns one.
    pub fn check_name(&self) -> Option<&str> {
        match self {
            Self::NoChecks => None,
            Self::DuplicateName { name }
            | Self::MissingQuantifier { name }
            | Self::ConflictingQuantifiers { name, .. }
            | Self::Invalid { name, .. } => Some(name),
        }
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoChecks => f.write_str("suite defines no checks"),
            Self::DuplicateName { name } => write!(f, "duplicate check name '{name}'"),
            Self::MissingQuantifier { name } => write!(
                f,
                "check '{name}' needs one of at_least, at_most, exactly or contains_not"
            ),
            Self::ConflictingQuantifiers { name, given } => write!(
                f,
                "check '{name}' sets more than one quantifier: {}",
                given.join(", ")
            ),
            Self::Invalid { name, error } => write!(f, "check '{name}': {error}"),
        }
    }
}

impl std::error::Error for CheckError {}

impl SuiteDefinition {
    /// Validate every check, in file order.
    pub fn compile(&self) -> Result<Vec<Check>, CheckError> {
        if self.checks.is_empty() {
            return Err(CheckError::NoChecks);
        }

        let mut seen = BTreeSet::new();
        let mut checks = Vec::with_capacity(self.checks.len());
        for definition in &self.checks {
            if !seen.insert(definition.name.as_str()) {
                return Err(CheckError::DuplicateName {
                    name: definition.name.clone(),
                });
            }
            checks.push(definition.compile()?);
        }
        Ok(checks)
    }
}

impl CheckDefinition {
    pub fn compile(&self) -> Result<Check, CheckError> {
        let invalid = |error| CheckError::Invalid {
            name: self.name.clone(),
            error,
        };

        let quantifier = self.quantifier()?.map_err(invalid)?;
        let terms: Vec<SearchTerm> = self.terms.iter().map(SearchTerm::from).collect();
        validate_terms(&terms).map_err(invalid)?;

        let mode = if self.ignoring_case {
            ComparisonMode::IgnoringCase
        } else {
            ComparisonMode::Exact
        };

        Ok(Check {
            name: self.name.clone(),
            terms,
            mode,
            quantifier,
        })
    }

    fn quantifier(&self) -> Result<Result<Quantifier, ValidationError>, CheckError> {
        let mut given = Vec::new();
        if self.at_least.is_some() {
            given.push("at_least");
        }
        if self.at_most.is_some() {
            given.push("at_most");
        }
        if self.exactly.is_some() {
            given.push("exactly");
        }
        if self.contains_not {
            given.push("contains_not");
        }

        if given.len() > 1 {
            return Err(CheckError::ConflictingQuantifiers {
                name: self.name.clone(),
                given,
            });
        }

        let quantifier = match (self.at_least, self.at_most, self.exactly) {
            (Some(times), _, _) => Quantifier::at_least(times),
            (_, Some(times), _) => Quantifier::at_most(times),
            (_, _, Some(times)) => Quantifier::exactly(times),
            _ if self.contains_not => Ok(Quantifier::Not),
            _ => {
                return Err(CheckError::MissingQuantifier {
                    name: self.name.clone(),
                });
            }
        };
        Ok(quantifier)
    }
}

/// Parse a suite file.
pub fn parse(path: &Path) -> Result<SuiteDefinition, String> {
    let yaml = fs::read_to_string(path)
        .map_err(|error| format!("failed to read suite '{}': {error}", path.display()))?;
    parse_str(&yaml).map_err(|error| format!("{}: {error}", path.display()))
}

pub fn parse_str(yaml: &str) -> Result<SuiteDefinition, String> {
    serde_yaml::from_str(yaml).map_err(|error| format!("invalid suite YAML: {error}"))
}
