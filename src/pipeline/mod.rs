pub mod parallel;
pub mod runner;

pub use parallel::process_parallel;
pub use runner::{CheckRecord, InputRecord, RecordOutcome, run_checks, skipped_record};
