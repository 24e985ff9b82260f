use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn bin() -> String {
    // Cargo sets this for bin targets in integration tests
    env!("CARGO_BIN_EXE_quadratic").to_string()
}

/// Runs with a missing config file so the user's own settings never leak in.
fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .arg("--no-color")
        .arg("--config")
        .arg(dir.join("absent.toml"))
        .args(args)
        .output()
        .expect("run")
}

fn stdout(o: &Output) -> String {
    String::from_utf8_lossy(&o.stdout).to_string()
}

fn stderr(o: &Output) -> String {
    String::from_utf8_lossy(&o.stderr).to_string()
}

#[test]
fn cli_solves_two_real_roots() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(dir.path(), &["1", "-3", "2"]);
    assert!(out.status.success(), "stderr:\n{}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("Two real solutions"));
    assert!(text.contains("x1 = 1\n"));
    assert!(text.contains("x2 = 2\n"));
    assert!(text.contains("Vertex = (1.5, -0.25)"));
}

#[test]
fn cli_zero_a_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(dir.path(), &["0", "5", "1"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Variable 'a' can't be zero"), "{}", stderr(&out));
    assert!(stdout(&out).is_empty());
}

#[test]
fn cli_rejects_non_numeric() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(dir.path(), &["1", "x", "2"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Invalid number for 'b'"), "{}", stderr(&out));
}

#[test]
fn cli_partial_coefficients_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(dir.path(), &["1", "2"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn cli_prompts_when_no_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(bin())
        .arg("--no-color")
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    child.stdin.take().unwrap().write_all(b"1\n2\n1\n").unwrap();
    let out = child.wait_with_output().expect("wait");
    assert!(out.status.success(), "stderr:\n{}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("a = b = c = "));
    assert!(text.contains("One real solution"));
    assert!(text.contains("x = -1\n"));
}

#[test]
fn cli_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(dir.path(), &["1", "0", "1", "--json"]);
    assert!(out.status.success(), "stderr:\n{}", stderr(&out));
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("valid json");
    assert_eq!(v["discriminant"].as_f64(), Some(-4.0));
    assert_eq!(v["roots"]["kind"], "complex_pair");
    assert_eq!(v["roots"]["x1"][1].as_f64(), Some(1.0));
    assert_eq!(v["roots"]["x2"][1].as_f64(), Some(-1.0));
    assert_eq!(v["vertex"]["y"].as_f64(), Some(1.0));
    assert_eq!(v["coefficients"]["c"].as_f64(), Some(1.0));
}

#[test]
fn cli_reads_precision_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    std::fs::write(&cfg, "precision = 3\ncolor = false\n").unwrap();
    let out = Command::new(bin())
        .arg("--config")
        .arg(&cfg)
        .args(["1", "1", "-1"])
        .output()
        .expect("run");
    assert!(out.status.success(), "stderr:\n{}", stderr(&out));
    assert!(stdout(&out).contains("x1 = -1.618"));

    // flag beats file
    let out = Command::new(bin())
        .arg("--config")
        .arg(&cfg)
        .args(["--precision", "1", "1", "1", "-1"])
        .output()
        .expect("run");
    assert!(stdout(&out).contains("x1 = -1.6\n"));
}

#[test]
fn cli_debug_flag_logs_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(dir.path(), &["--debug", "2", "4", "2"]);
    assert!(out.status.success());
    assert!(stderr(&out).contains("[debug] solve"), "{}", stderr(&out));
}
