//! End-to-end tests driving the `tb` binary through stdin.
//!
//! Every run starts from a fresh in-memory board, so each test is a small
//! script: build some tasks, change filters, and inspect the JSON output.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;

/// Runs `tb` with `args`, feeding `script` on stdin.
fn run_tb(config_dir: &Path, args: &[&str], script: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tb"))
        .args(args)
        .env("TB_CONFIG", config_dir.join("config.toml"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start tb");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(script.as_bytes())
        .expect("failed to write script");

    child.wait_with_output().expect("failed to wait for tb")
}

/// Splits pretty-printed JSON documents written one after another.
fn json_documents(stdout: &[u8]) -> Vec<Value> {
    serde_json::Deserializer::from_slice(stdout)
        .into_iter::<Value>()
        .collect::<Result<_, _>>()
        .expect("stdout should be a stream of JSON documents")
}

#[test]
fn test_demo_board_lists_three_tasks() {
    let dir = TempDir::new().unwrap();
    let output = run_tb(dir.path(), &["--json"], "list\n");

    assert!(output.status.success());
    let docs = json_documents(&output.stdout);
    let list = docs.last().unwrap();
    assert_eq!(list["total"], 3);
    assert_eq!(list["tasks"][0]["task_name"], "Design login screen");
    assert_eq!(list["tasks"][1]["due_bucket"], "overdue");
    assert_eq!(list["tasks"][2]["completed"], true);
}

#[test]
fn test_filter_workflow_on_empty_board() {
    let dir = TempDir::new().unwrap();
    let script = "\
add 'Write docs' -c Docs -u Alice -P high
add 'Fix bug' -c Backend -u Bob
add \"Plan sprint\" -c Meeting -u Alice -P low
filter --assignee Alice
filter --priority high
list
clear
list
";
    let output = run_tb(dir.path(), &["--empty", "--json"], script);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let docs = json_documents(&output.stdout);
    assert_eq!(docs.len(), 8);

    let filtered = &docs[5];
    assert_eq!(filtered["shown"], 1);
    assert_eq!(filtered["tasks"][0]["task_name"], "Write docs");
    assert_eq!(filtered["filters"]["assigned_user"], "Alice");
    assert_eq!(filtered["filters"]["priority"], "High");

    let cleared = &docs[7];
    let names: Vec<&str> = cleared["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["task_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Plan sprint", "Fix bug", "Write docs"]);
}

#[test]
fn test_errors_are_reported_and_session_continues() {
    let dir = TempDir::new().unwrap();
    let script = "\
add '   ' -c Docs -u Alice
toggle nope
filter --status maybe
add Real -c Docs -u Alice
list
";
    let output = run_tb(dir.path(), &["--empty", "--no-color"], script);

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: invalid task: task_name must not be empty"));
    assert!(stderr.contains("Error: task 'nope' not found"));
    assert!(stderr.contains("invalid status: maybe"));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Added: Real"));
    assert!(stdout.lines().last().unwrap().ends_with("Real"));
}

#[test]
fn test_each_failed_command_writes_one_stderr_line() {
    let dir = TempDir::new().unwrap();
    let script = "\
toggle nope
filter --status maybe
frobnicate
filter --category Nowhere
";
    let output = run_tb(dir.path(), &["--empty", "--no-color"], script);

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 3, "stderr: {stderr}");
    assert!(lines.iter().all(|l| l.starts_with("Error: ")));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Warning: No task has category 'Nowhere'."));
}

#[test]
fn test_exit_stops_processing() {
    let dir = TempDir::new().unwrap();
    let output = run_tb(
        dir.path(),
        &["--empty", "--quiet"],
        "add A -c C -u U\nexit\nlist\n",
    );

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_config_disables_demo_tasks() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[tasks]\nseed_demo = false\ndefault_priority = \"high\"\n",
    )
    .unwrap();

    let output = run_tb(dir.path(), &["--json"], "add X -c C -u U\nlist\n");

    assert!(output.status.success());
    let docs = json_documents(&output.stdout);
    let list = docs.last().unwrap();
    assert_eq!(list["total"], 1);
    assert_eq!(list["tasks"][0]["priority"], "High");
}

#[test]
fn test_invalid_config_exits_with_config_status() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[output]\ndate_format = \"sometimes\"\n",
    )
    .unwrap();

    let output = run_tb(dir.path(), &["--json"], "list\n");

    assert_eq!(output.status.code(), Some(5));
    let err: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["code"], "CONFIG_ERROR");
}

#[test]
fn test_config_path_honors_override() {
    let dir = TempDir::new().unwrap();
    let output = run_tb(dir.path(), &["config", "path"], "");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.trim_end(),
        dir.path().join("config.toml").display().to_string()
    );
}

#[test]
fn test_completions_generate_script() {
    let dir = TempDir::new().unwrap();
    let output = run_tb(dir.path(), &["completions", "bash"], "");

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("_tb"));
}
