use serde::Serialize;
use std::borrow::Cow;

/// Symbolic name of a piece of failure text.
///
/// Templates may contain one `{}` placeholder. `IgnoringCase` wraps the
/// description it qualifies, e.g. `"{}, ignoring case"` around `"contains"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DescriptionKey {
    Subject,
    Contains,
    ContainsNot,
    IgnoringCase,
    NumberOfOccurrences,
    AtLeast,
    AtMost,
    Exactly,
}

impl DescriptionKey {
    pub fn default_template(self) -> &'static str {
        match self {
            Self::Subject => "expected that subject",
            Self::Contains => "contains",
            Self::ContainsNot => "does not contain",
            Self::IgnoringCase => "{}, ignoring case",
            Self::NumberOfOccurrences => "number of occurrences",
            Self::AtLeast => "at least",
            Self::AtMost => "at most",
            Self::Exactly => "exactly",
        }
    }
}

/// Resolves description keys to templates in some locale.
pub trait Translator {
    fn template(&self, key: DescriptionKey) -> Cow<'_, str>;

    /// Resolve `key` and substitute `arg` into its placeholder, if it has one.
    fn translate(&self, key: DescriptionKey, arg: Option<&str>) -> String {
        let template = self.template(key);
        match arg {
            Some(arg) => template.replacen("{}", arg, 1),
            None => template.into_owned(),
        }
    }
}

/// English templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTranslator;

impl Translator for DefaultTranslator {
    fn template(&self, key: DescriptionKey) -> Cow<'_, str> {
        Cow::Borrowed(key.default_template())
    }
}
