pub mod occurrences;

pub use occurrences::{ComparisonMode, count_occurrences};
