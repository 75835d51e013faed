pub mod keys;
pub mod render;

pub use keys::{DefaultTranslator, DescriptionKey, Translator};
pub use render::{DescriptionEntry, MismatchDescription, describe, render, render_default};
