pub mod reporter;

pub use reporter::{ProgressEvent, report_progress, report_warning, report_warning_code};
