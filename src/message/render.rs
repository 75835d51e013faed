use crate::contains::{Failure, Mismatch, Quantifier};
use crate::count::ComparisonMode;
use crate::message::{DefaultTranslator, DescriptionKey, Translator};
use serde::Serialize;
use std::fmt::Write;

const ASSERTION_BULLET: &str = "◆ ";
const DETAIL_BULLET: &str = "    ⚬ ";

/// One translatable line: a key, its optional case qualifier and a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptionEntry {
    pub key: DescriptionKey,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub ignoring_case: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl DescriptionEntry {
    fn new(key: DescriptionKey, value: impl ToString) -> Self {
        Self {
            key,
            ignoring_case: false,
            value: Some(value.to_string()),
        }
    }

    fn to_text(&self, translator: &dyn Translator) -> String {
        let mut label = translator.translate(self.key, None);
        if self.ignoring_case {
            label = translator.translate(DescriptionKey::IgnoringCase, Some(&label));
        }
        match &self.value {
            Some(value) => format!("{label}: {value}"),
            None => label,
        }
    }
}

/// Structured explanation of one failing term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MismatchDescription {
    pub assertion: DescriptionEntry,
    pub details: Vec<DescriptionEntry>,
}

/// Describe every mismatch of `failure` as keys and parameters, in order.
pub fn describe(failure: &Failure) -> Vec<MismatchDescription> {
    failure.mismatches.iter().map(describe_mismatch).collect()
}

fn describe_mismatch(mismatch: &Mismatch) -> MismatchDescription {
    let key = match mismatch.quantifier {
        Quantifier::Not => DescriptionKey::ContainsNot,
        _ => DescriptionKey::Contains,
    };
    let assertion = DescriptionEntry {
        key,
        ignoring_case: mismatch.mode == ComparisonMode::IgnoringCase,
        value: Some(mismatch.term.to_string()),
    };

    let mut details = vec![DescriptionEntry::new(
        DescriptionKey::NumberOfOccurrences,
        mismatch.actual,
    )];
    match mismatch.quantifier {
        Quantifier::AtLeast(times) => {
            details.push(DescriptionEntry::new(DescriptionKey::AtLeast, times));
        }
        Quantifier::AtMost(times) => {
            details.push(DescriptionEntry::new(DescriptionKey::AtMost, times));
        }
        Quantifier::Exactly(times) => {
            details.push(DescriptionEntry::new(DescriptionKey::Exactly, times));
        }
        Quantifier::Not => {}
    }

    MismatchDescription { assertion, details }
}

/// Render `failure` as multi-line text using `translator` for every label.
pub fn render(failure: &Failure, translator: &dyn Translator) -> String {
    let mut out = format!(
        "{}: \"{}\"",
        translator.translate(DescriptionKey::Subject, None),
        failure.subject
    );

    for description in describe(failure) {
        let _ = write!(
            out,
            "\n{ASSERTION_BULLET}{}",
            description.assertion.to_text(translator)
        );
        for detail in &description.details {
            let _ = write!(out, "\n{DETAIL_BULLET}{}", detail.to_text(translator));
        }
    }

    out
}

pub fn render_default(failure: &Failure) -> String {
    render(failure, &DefaultTranslator)
}

#[cfg(test)]
mod tests {
    use super::{describe, render, render_default};
    use crate::contains::{Failure, Mismatch, Quantifier, SearchTerm};
    use crate::count::ComparisonMode;
    use crate::message::{DescriptionKey, Translator};
    use std::borrow::Cow;

    fn failure(mode: ComparisonMode, quantifier: Quantifier, terms: &[(char, usize)]) -> Failure {
        Failure {
            subject: "Hello World".to_owned(),
            mode,
            quantifier,
            mismatches: terms
                .iter()
                .map(|(term, actual)| Mismatch {
                    term: SearchTerm::Char(*term),
                    mode,
                    quantifier,
                    actual: *actual,
                })
                .collect(),
        }
    }

    #[test]
    fn renders_single_mismatch() {
        let text = render_default(&failure(
            ComparisonMode::Exact,
            Quantifier::AtMost(2),
            &[('l', 3)],
        ));
        assert_eq!(
            text,
            "expected that subject: \"Hello World\"\n\
             ◆ contains: 'l'\n    \
             ⚬ number of occurrences: 3\n    \
             ⚬ at most: 2"
        );
    }

    #[test]
    fn renders_ignoring_case_annotation() {
        let text = render_default(&failure(
            ComparisonMode::IgnoringCase,
            Quantifier::AtMost(2),
            &[('o', 3)],
        ));
        assert!(text.contains("contains, ignoring case: 'o'"));
        assert!(text.contains("number of occurrences: 3\n"));
        assert!(text.ends_with("at most: 2"));
    }

    #[test]
    fn contains_not_has_no_bound_line() {
        let text = render_default(&failure(ComparisonMode::Exact, Quantifier::Not, &[('W', 1)]));
        assert!(text.contains("does not contain: 'W'"));
        assert!(text.ends_with("number of occurrences: 1"));
    }

    #[test]
    fn describes_mismatches_in_order_as_keys() {
        let descriptions = describe(&failure(
            ComparisonMode::Exact,
            Quantifier::AtLeast(2),
            &[('x', 0), ('H', 1)],
        ));

        assert_eq!(descriptions.len(), 2);
        assert_eq!(descriptions[0].assertion.key, DescriptionKey::Contains);
        assert_eq!(descriptions[0].assertion.value.as_deref(), Some("'x'"));
        assert_eq!(descriptions[1].assertion.value.as_deref(), Some("'H'"));
        let keys: Vec<DescriptionKey> = descriptions[1]
            .details
            .iter()
            .map(|entry| entry.key)
            .collect();
        assert_eq!(
            keys,
            vec![DescriptionKey::NumberOfOccurrences, DescriptionKey::AtLeast]
        );
    }

    #[test]
    fn uses_custom_translator() {
        struct German;

        impl Translator for German {
            fn template(&self, key: DescriptionKey) -> Cow<'_, str> {
                Cow::Borrowed(match key {
                    DescriptionKey::Subject => "erwartet, dass",
                    DescriptionKey::Contains => "enthält",
                    DescriptionKey::ContainsNot => "enthält nicht",
                    DescriptionKey::IgnoringCase => "{}, Groß-/Kleinschreibung ignorierend",
                    DescriptionKey::NumberOfOccurrences => "Anzahl Vorkommen",
                    DescriptionKey::AtLeast => "mindestens",
                    DescriptionKey::AtMost => "höchstens",
                    DescriptionKey::Exactly => "genau",
                })
            }
        }

        let text = render(
            &failure(ComparisonMode::IgnoringCase, Quantifier::Exactly(2), &[('l', 3)]),
            &German,
        );
        assert!(text.starts_with("erwartet, dass: \"Hello World\""));
        assert!(text.contains("enthält, Groß-/Kleinschreibung ignorierend: 'l'"));
        assert!(text.ends_with("genau: 2"));
    }
}
