use serde_json::Value;
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

const SUITE: &str = r#"
suite_id: greetings.v1
checks:
  - name: greets
    terms: ["Hello"]
    at_least: 1
  - name: few-ls
    terms: ["l"]
    at_most: 3
  - name: no-shouting
    terms: ["HELLO WORLD"]
    contains_not: true
"#;

fn run_occurs(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_occurs"))
        .args(args)
        .output()
        .expect("run occurs binary")
}

fn run_occurs_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_occurs"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn occurs binary");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for occurs binary")
}

fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let file = NamedTempFile::with_suffix(suffix).expect("create temp file");
    fs::write(file.path(), content).expect("write temp file");
    file
}

fn stdout_lines(output: &Output) -> Vec<Value> {
    String::from_utf8(output.stdout.clone())
        .expect("stdout utf8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("stdout line should be JSON"))
        .collect()
}

#[test]
fn smoke_describe_exits_zero() {
    let describe = run_occurs(&["--describe"]);
    assert_eq!(describe.status.code(), Some(0));
    let describe_json: Value =
        serde_json::from_slice(&describe.stdout).expect("describe should be valid JSON");
    assert_eq!(describe_json["name"], "occurs");
    assert_eq!(describe_json["output_format"], "JSONL");
}

#[test]
fn smoke_passing_suite_exits_zero() {
    let suite = temp_file(".occurs.yaml", SUITE);
    let input = temp_file(".txt", "Hello World");

    let output = run_occurs(&[
        "--suite",
        suite.path().to_str().expect("suite path"),
        input.path().to_str().expect("input path"),
    ]);

    assert_eq!(output.status.code(), Some(0));
    let records = stdout_lines(&output);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["version"], "occurs.v0");
    assert_eq!(records[0]["outcome"], "PASSED");
    assert!(
        records[0]["input_hash"]
            .as_str()
            .expect("input hash")
            .starts_with("blake3:")
    );

    let names: Vec<&str> = records[0]["checks"]
        .as_array()
        .expect("checks array")
        .iter()
        .map(|check| check["name"].as_str().expect("check name"))
        .collect();
    assert_eq!(names, vec!["greets", "few-ls", "no-shouting"]);
}

#[test]
fn smoke_failing_suite_exits_one_with_message() {
    let suite = temp_file(".occurs.yaml", SUITE);
    let input = temp_file(".txt", "Hello World, hello");

    let output = run_occurs(&[
        "--suite",
        suite.path().to_str().expect("suite path"),
        input.path().to_str().expect("input path"),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let records = stdout_lines(&output);
    assert_eq!(records[0]["outcome"], "FAILED");

    let few_ls = &records[0]["checks"][1];
    assert_eq!(few_ls["name"], "few-ls");
    assert_eq!(few_ls["passed"], false);
    assert_eq!(few_ls["quantifier"]["at_most"], 3);
    assert_eq!(few_ls["mismatches"][0]["term"], "l");
    assert_eq!(few_ls["mismatches"][0]["actual"], 5);
    let message = few_ls["message"].as_str().expect("failure message");
    assert!(message.contains("number of occurrences: 5"));
    assert!(message.ends_with("at most: 3"));
}

#[test]
fn smoke_suite_reads_stdin_without_inputs() {
    let suite = temp_file(".occurs.yaml", SUITE);

    let output = run_occurs_with_stdin(
        &["--suite", suite.path().to_str().expect("suite path")],
        "Hello World",
    );

    assert_eq!(output.status.code(), Some(0));
    let records = stdout_lines(&output);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["path"], "stdin");
}

#[test]
fn smoke_count_subcommand_reports_terms_in_order() {
    let input = temp_file(".txt", "Hello World, I am Oskar");

    let output = run_occurs(&[
        "count",
        "--term",
        "o",
        "--term",
        "l",
        "--ignore-case",
        input.path().to_str().expect("input path"),
    ]);

    assert_eq!(output.status.code(), Some(0));
    let records = stdout_lines(&output);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["term"], "o");
    assert_eq!(records[0]["count"], 3);
    assert_eq!(records[0]["mode"], "ignoring_case");
    assert_eq!(records[1]["term"], "l");
    assert_eq!(records[1]["count"], 3);
}

#[test]
fn smoke_progress_events_go_to_stderr() {
    let suite = temp_file(".occurs.yaml", SUITE);
    let input = temp_file(".txt", "Hello World");

    let output = run_occurs(&[
        "--progress",
        "--suite",
        suite.path().to_str().expect("suite path"),
        input.path().to_str().expect("input path"),
    ]);

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8(output.stderr).expect("stderr utf8");
    let event: Value = serde_json::from_str(stderr.lines().last().expect("progress line"))
        .expect("progress event JSON");
    assert_eq!(event["type"], "progress");
    assert_eq!(event["tool"], "occurs");
    assert_eq!(event["processed"], 1);
    assert_eq!(event["total"], 1);
}
