use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// A literal value to search for in a subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum SearchTerm {
    Char(char),
    Text(String),
}

impl SearchTerm {
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Char(c) => Cow::Owned(c.to_string()),
            Self::Text(text) => Cow::Borrowed(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

/// Characters are quoted with single quotes, strings with double quotes.
impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "'{c}'"),
            Self::Text(text) => write!(f, "\"{text}\""),
        }
    }
}

impl From<char> for SearchTerm {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<&str> for SearchTerm {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SearchTerm {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for SearchTerm {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}
