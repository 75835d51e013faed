use crate::contains::{AssertionResult, Quantifier, SearchTerm, evaluate};
use crate::count::ComparisonMode;
use crate::fluent::AssertionError;

/// Start a chain of containment assertions about `subject`.
///
/// ```
/// use occurs::fluent::assert_that;
///
/// # fn main() -> Result<(), occurs::fluent::AssertionError> {
/// assert_that("Hello World")
///     .contains_at_most(2, ['H', 'o'])?
///     .contains_exactly(3, ['l'])?
///     .contains_not_ignoring_case(["xyz"])?;
/// # Ok(())
/// # }
/// ```
pub fn assert_that<S: AsRef<str> + ?Sized>(subject: &S) -> Subject<'_> {
    Subject {
        value: subject.as_ref(),
    }
}

/// A borrowed subject. Every call is evaluated on its own; the chain carries
/// nothing but the subject.
#[derive(Debug, Clone, Copy)]
pub struct Subject<'a> {
    value: &'a str,
}

impl<'a> Subject<'a> {
    pub fn value(&self) -> &'a str {
        self.value
    }

    /// Check each of `terms` against `quantifier` under `mode`.
    pub fn check(
        &self,
        mode: ComparisonMode,
        quantifier: Quantifier,
        terms: impl IntoIterator<Item = impl Into<SearchTerm>>,
    ) -> Result<&Self, AssertionError> {
        let terms: Vec<SearchTerm> = terms.into_iter().map(Into::into).collect();
        match evaluate(self.value, &terms, mode, quantifier)? {
            AssertionResult::Success => Ok(self),
            AssertionResult::Failure(failure) => Err(AssertionError::Failed(failure)),
        }
    }

    /// Each term occurs at least once.
    pub fn contains(
        &self,
        terms: impl IntoIterator<Item = impl Into<SearchTerm>>,
    ) -> Result<&Self, AssertionError> {
        self.check(ComparisonMode::Exact, Quantifier::AtLeast(1), terms)
    }

    pub fn contains_ignoring_case(
        &self,
        terms: impl IntoIterator<Item = impl Into<SearchTerm>>,
    ) -> Result<&Self, AssertionError> {
        self.check(ComparisonMode::IgnoringCase, Quantifier::AtLeast(1), terms)
    }

    pub fn contains_at_least(
        &self,
        times: i64,
        terms: impl IntoIterator<Item = impl Into<SearchTerm>>,
    ) -> Result<&Self, AssertionError> {
        self.check(ComparisonMode::Exact, Quantifier::at_least(times)?, terms)
    }

    pub fn contains_at_least_ignoring_case(
        &self,
        times: i64,
        terms: impl IntoIterator<Item = impl Into<SearchTerm>>,
    ) -> Result<&Self, AssertionError> {
        self.check(
            ComparisonMode::IgnoringCase,
            Quantifier::at_least(times)?,
            terms,
        )
    }

    /// Each term occurs no more than `times` times.
    ///
    /// `times` of 0 or 1 is rejected in favour of `contains_not` and
    /// `contains_exactly(1)`.
    pub fn contains_at_most(
        &self,
        times: i64,
        terms: impl IntoIterator<Item = impl Into<SearchTerm>>,
    ) -> Result<&Self, AssertionError> {
        self.check(ComparisonMode::Exact, Quantifier::at_most(times)?, terms)
    }

    pub fn contains_at_most_ignoring_case(
        &self,
        times: i64,
        terms: impl IntoIterator<Item = impl Into<SearchTerm>>,
    ) -> Result<&Self, AssertionError> {
        self.check(
            ComparisonMode::IgnoringCase,
            Quantifier::at_most(times)?,
            terms,
        )
    }

    pub fn contains_exactly(
        &self,
        times: i64,
        terms: impl IntoIterator<Item = impl Into<SearchTerm>>,
    ) -> Result<&Self, AssertionError> {
        self.check(ComparisonMode::Exact, Quantifier::exactly(times)?, terms)
    }

    pub fn contains_exactly_ignoring_case(
        &self,
        times: i64,
        terms: impl IntoIterator<Item = impl Into<SearchTerm>>,
    ) -> Result<&Self, AssertionError> {
        self.check(
            ComparisonMode::IgnoringCase,
            Quantifier::exactly(times)?,
            terms,
        )
    }

    pub fn contains_not(
        &self,
        terms: impl IntoIterator<Item = impl Into<SearchTerm>>,
    ) -> Result<&Self, AssertionError> {
        self.check(ComparisonMode::Exact, Quantifier::Not, terms)
    }

    pub fn contains_not_ignoring_case(
        &self,
        terms: impl IntoIterator<Item = impl Into<SearchTerm>>,
    ) -> Result<&Self, AssertionError> {
        self.check(ComparisonMode::IgnoringCase, Quantifier::Not, terms)
    }
}
