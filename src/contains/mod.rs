pub mod evaluator;
pub mod quantifier;
pub mod result;
pub mod term;

pub use evaluator::evaluate;
pub use quantifier::Quantifier;
pub use result::{AssertionResult, Failure, Mismatch};
pub use term::SearchTerm;
