use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

fn bisect(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bisect"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("binary should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn default_run_converges_and_writes_report() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = bisect(dir.path(), &[]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("converged after 14 iterations: root = 4.0002"));

    let report = fs::read_to_string(dir.path().join("bisection_report.txt")).expect("report");
    assert!(report.contains("First author, Second author"));
    assert!(report.contains("The root is 4.0002"));
}

#[test]
fn flags_set_authors_and_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = bisect(
        dir.path(),
        &["--author", "Ada", "--author", "Grace", "--output", "out/report.txt"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let report = fs::read_to_string(dir.path().join("out/report.txt")).expect("report");
    assert!(report.contains("Ada, Grace"));
}

#[test]
fn iteration_limit_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = bisect(dir.path(), &["--max-iterations", "5"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("reached the iteration limit after 5 iterations: root = 4.0313"));
}

#[test]
fn json_holds_the_solution() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = bisect(dir.path(), &["--json", "run.json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json = fs::read_to_string(dir.path().join("run.json")).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["status"], "converged");
    assert_eq!(value["records"].as_array().map(Vec::len), Some(14));
    assert_eq!(value["records"][0]["value_at_lower"], -3.0);
}

#[test]
fn config_file_is_overridden_by_flags() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join("run.toml"),
        "max_iterations = 3\nauthors = [\"File\", \"Config\"]\n",
    )
    .expect("should write");

    let output = bisect(dir.path(), &["--config", "run.toml", "--max-iterations", "5"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("after 5 iterations"));

    let report = fs::read_to_string(dir.path().join("bisection_report.txt")).expect("report");
    assert!(report.contains("File, Config"));
}

#[test]
fn verbose_logs_each_pass_to_stderr() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = bisect(dir.path(), &["--verbose", "--max-iterations", "2"]);

    assert!(output.status.success());
    let log = stderr(&output);
    assert_eq!(log.lines().filter(|l| l.starts_with("[bisect] iter=")).count(), 2);
    assert!(log.contains("[bisect] iter=1 lower=3 upper=6 midpoint=4.5 "));
}

#[test]
fn report_failure_does_not_fail_the_run() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("blocker"), "").expect("should write");

    let output = bisect(dir.path(), &["--output", "blocker/report.txt"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("converged"));
    assert!(stderr(&output).contains("failed to write report"));
}

#[test]
fn invalid_inputs_fail() {
    let dir = tempfile::tempdir().expect("temp dir");

    let misordered = bisect(dir.path(), &["--lower", "6", "--upper", "3"]);
    assert!(!misordered.status.success());

    let strict = bisect(dir.path(), &["--lower", "5", "--require-sign-change"]);
    assert!(!strict.status.success());

    let tolerance = bisect(dir.path(), &["--tolerance", "0"]);
    assert!(!tolerance.status.success());
}
