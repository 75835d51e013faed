pub mod parser;

pub use parser::{Check, CheckDefinition, CheckError, SuiteDefinition, parse, parse_str};
