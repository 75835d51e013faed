pub mod error;
pub mod subject;

pub use error::AssertionError;
pub use subject::{Subject, assert_that};
