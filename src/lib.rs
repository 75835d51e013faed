#![forbid(unsafe_code)]

//! Fluent occurrence-counting assertions for text.
//!
//! The engine lives in [`count`] (how often does a term occur) and
//! [`contains`] (does every term satisfy a quantifier). [`fluent`] wraps it in
//! chainable calls and [`message`] turns failures into readable text. The
//! remaining modules make up the `occurs` command-line tool.

pub mod cli;
pub mod contains;
pub mod count;
pub mod fluent;
pub mod input;
pub mod message;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod refusal;
pub mod suite;
pub mod validation;

pub use contains::{AssertionResult, Failure, Mismatch, Quantifier, SearchTerm, evaluate};
pub use count::{ComparisonMode, count_occurrences};
pub use fluent::{AssertionError, assert_that};
pub use validation::ValidationError;

use input::{InputSource, TextInput};
use refusal::RefusalEnvelope;

/// Run the occurs CLI. Returns an exit code (0, 1, or 2).
pub fn run() -> u8 {
    use clap::Parser;
    use cli::{Cli, Command};

    let cli = Cli::parse();

    if cli.describe {
        return handle_describe();
    }

    let jobs = cli.jobs.unwrap_or_else(pipeline::parallel::default_jobs);

    match cli.command {
        Some(Command::Count {
            terms,
            ignore_case,
            inputs,
        }) => handle_count_command(&terms, ignore_case, &inputs, jobs, cli.progress),
        None => handle_check_mode(&cli, jobs),
    }
}

/// Handle --describe flag: print operator.json and exit.
fn handle_describe() -> u8 {
    let operator = serde_json::json!({
        "name": "occurs",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Check substring occurrence counts in text inputs against a suite",
        "author": "CMD+RVL",
        "repository": "https://github.com/cmdrvl/occurs",
        "pipeline_role": "checker",
        "input_format": "text",
        "output_format": "JSONL",
        "stdin_support": true,
        "file_support": true
    });

    if let Ok(json) = serde_json::to_string_pretty(&operator) {
        println!("{}", json);
        0
    } else {
        eprintln!("Error: Failed to serialize operator metadata");
        2
    }
}

/// Handle default mode: evaluate a suite against every input.
fn handle_check_mode(cli: &cli::Cli, jobs: usize) -> u8 {
    use cli::Outcome;
    use output::write_jsonl;
    use pipeline::{RecordOutcome, run_checks, skipped_record};

    let checks = match load_checks(cli.suite.as_deref()) {
        Ok(checks) => checks,
        Err(refusal) => {
            output_refusal_envelope(&refusal);
            return Outcome::Refusal.exit_code();
        }
    };

    let sources = InputSource::from_paths(&cli.inputs);
    let records = process_inputs(sources, jobs, cli.progress, |source| {
        match TextInput::load(&source) {
            Ok(input) => run_checks(&input, &checks),
            Err(error) => {
                let label = source.label();
                progress::report_warning_code(
                    &label,
                    Some("W_SKIPPED"),
                    &format!("skipped: {error}"),
                );
                skipped_record(&label, &error)
            }
        }
    });

    let outcome = if records
        .iter()
        .all(|record| record.outcome == RecordOutcome::Passed)
    {
        Outcome::AllPassed
    } else {
        Outcome::Failed
    };

    let mut stdout = std::io::stdout();
    if let Err(error) = write_jsonl(&mut stdout, &records) {
        eprintln!("Error writing output: {}", error);
        return Outcome::Refusal.exit_code();
    }

    outcome.exit_code()
}

/// Handle the count subcommand.
fn handle_count_command(
    terms: &[String],
    ignore_case: bool,
    inputs: &[std::path::PathBuf],
    jobs: usize,
    show_progress: bool,
) -> u8 {
    use cli::Outcome;
    use contains::evaluator::validate_terms;
    use output::write_jsonl;
    use pipeline::runner::count_terms;

    let search_terms: Vec<SearchTerm> = terms.iter().map(SearchTerm::from).collect();
    if let Err(error) = validate_terms(&search_terms) {
        output_refusal_envelope(&build_invalid_check_refusal(None, &error.to_string()));
        return Outcome::Refusal.exit_code();
    }

    let mode = if ignore_case {
        ComparisonMode::IgnoringCase
    } else {
        ComparisonMode::Exact
    };

    let results = process_inputs(InputSource::from_paths(inputs), jobs, show_progress, |source| {
        let label = source.label();
        let counted = TextInput::load(&source).and_then(|input| {
            count_terms(&input, terms, mode).map_err(|error| error.to_string())
        });
        if let Err(error) = &counted {
            progress::report_warning_code(&label, Some("W_SKIPPED"), &format!("skipped: {error}"));
        }
        counted
    });

    let mut outcome = Outcome::AllPassed;
    let mut records = Vec::new();
    for result in results {
        match result {
            Ok(counted) => records.extend(counted),
            Err(_) => outcome = Outcome::Failed,
        }
    }

    let mut stdout = std::io::stdout();
    if let Err(error) = write_jsonl(&mut stdout, &records) {
        eprintln!("Error writing output: {}", error);
        return Outcome::Refusal.exit_code();
    }

    outcome.exit_code()
}

/// Evaluate `process` over every source in parallel, reporting progress if asked.
fn process_inputs<R, F>(
    sources: Vec<InputSource>,
    jobs: usize,
    show_progress: bool,
    process: F,
) -> Vec<R>
where
    R: Send,
    F: Fn(InputSource) -> R + Sync,
{
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Instant;

    let total = sources.len() as u64;
    let started = Instant::now();
    let processed = AtomicU64::new(0);

    pipeline::process_parallel(sources, jobs, |source| {
        let result = process(source);
        let done = processed.fetch_add(1, Ordering::SeqCst) + 1;
        if show_progress {
            let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            progress::report_progress(&progress::ProgressEvent::new(
                done,
                Some(total),
                elapsed_ms,
            ));
        }
        result
    })
}

/// Parse and validate the suite, or explain why the run is refused.
#[allow(clippy::result_large_err)]
fn load_checks(
    suite_path: Option<&std::path::Path>,
) -> Result<Vec<suite::Check>, RefusalEnvelope> {
    use refusal::{BadInputDetail, RefusalCode, RefusalDetail, build_envelope};

    let Some(suite_path) = suite_path else {
        return Err(build_envelope(
            RefusalCode::BadInput,
            "A suite file is required",
            RefusalDetail::BadInput(BadInputDetail {
                path: None,
                error: "missing --suite".to_owned(),
            }),
            Some("occurs --suite <FILE> [INPUT]...".to_owned()),
        ));
    };

    let definition = suite::parse(suite_path).map_err(|error| {
        build_envelope(
            RefusalCode::BadInput,
            "Failed to parse suite definition",
            RefusalDetail::BadInput(BadInputDetail {
                path: Some(suite_path.display().to_string()),
                error,
            }),
            Some("Check YAML syntax and field names".to_owned()),
        )
    })?;

    definition
        .compile()
        .map_err(|error| build_invalid_check_refusal(error.check_name(), &error.to_string()))
}

fn build_invalid_check_refusal(check: Option<&str>, error: &str) -> RefusalEnvelope {
    use refusal::{InvalidCheckDetail, RefusalCode, RefusalDetail, build_envelope};

    build_envelope(
        RefusalCode::InvalidCheck,
        "Invalid containment check",
        RefusalDetail::InvalidCheck(InvalidCheckDetail {
            check: check.map(str::to_owned),
            error: error.to_owned(),
        }),
        None,
    )
}

fn output_refusal_envelope(refusal: &RefusalEnvelope) {
    if let Ok(json) = serde_json::to_string(refusal) {
        println!("{}", json);
    }
}
