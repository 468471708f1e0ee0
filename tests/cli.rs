use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .display()
        .to_string()
}

fn trimaze(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trimaze"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run trimaze")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help() {
    let output = trimaze(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("--rpath"));
}

#[test]
fn test_no_arguments_is_usage_error() {
    let output = trimaze(&[]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let output = trimaze(&["--walk", "1", "1", "maze.txt"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_valid_and_invalid() {
    let output = trimaze(&["--test", &fixture("scenario_a.txt")]);
    assert_eq!(stdout(&output), "Valid\n");
    assert_eq!(output.status.code(), Some(0));

    let output = trimaze(&["--test", &fixture("scenario_c.txt")]);
    assert_eq!(stdout(&output), "Invalid\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_missing_file() {
    let output = trimaze(&["--test", &fixture("nope.txt")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_rpath_prints_one_cell_per_line() {
    let output = trimaze(&["--rpath", "1", "1", &fixture("scenario_a.txt")]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "1,1\n1,2\n2,2\n");
}

#[test]
fn test_lpath_stalls_in_dead_end() {
    let output = trimaze(&["--lpath", "1", "1", &fixture("serpentine_3x3.txt")]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "1,1\n1,2\n1,3\n");
}

#[test]
fn test_interior_start_prints_no_path() {
    let output = trimaze(&["--rpath", "2", "2", &fixture("closed_4x4.txt")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Not possible to enter maze"));
}

#[test]
fn test_json_report() {
    let output = trimaze(&["--json", "--rpath", "1", "1", &fixture("scenario_a.txt")]);
    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["hand"], "right");
    assert_eq!(report["path"].as_array().map(|p| p.len()), Some(3));
    assert_eq!(report["outcome"]["kind"], "exited");
}

#[test]
fn test_step_limit() {
    let output = trimaze(&["--max-steps", "1", "--rpath", "1", "1", &fixture("scenario_a.txt")]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "1,1\n1,2\n");
}
