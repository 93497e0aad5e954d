//! End-to-end runs of the `inistore` binary.

mod common;

use common::{DB_INI, assert_success, ini_fixture, run_inistore, snapshot, stdout};

#[test]
fn test_cli_get_and_set() {
    let (_dir, path) = ini_fixture(DB_INI);
    let file = path.to_str().unwrap();

    let output = run_inistore(&["get", file, "DB", "port"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "5432\n");

    let output = run_inistore(&["set", file, "DB", "port", "5433", "--line-ending", "lf"]);
    assert_success(&output);
    assert!(stdout(&output).is_empty());
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[DB]\nhost=localhost\nport=5433\n"
    );

    let output = run_inistore(&["get", file, "DB", "port"]);
    assert_eq!(stdout(&output), "5433\n");
}

#[test]
fn test_cli_missing_key_exit_code() {
    let (_dir, path) = ini_fixture(DB_INI);
    let file = path.to_str().unwrap();
    let before = snapshot(&path);

    let output = run_inistore(&["get", file, "DB", "missing"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());

    let output = run_inistore(&["set", file, "Ghost", "x", "y"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Ghost"), "stderr: {stderr}");

    assert_eq!(snapshot(&path), before);
}

#[test]
fn test_cli_missing_file_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.ini");

    let output = run_inistore(&["get", path.to_str().unwrap(), "DB", "port"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!path.exists());
}

#[test]
fn test_cli_dump_normalizes() {
    let (_dir, path) = ini_fixture("stray\n[ A ]\n  k =  v  \n\n[B]\nnope\nx=1\n");

    let output = run_inistore(&["dump", path.to_str().unwrap(), "--line-ending", "lf"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "[A]\nk=v\n[B]\nx=1\n");
}

#[test]
fn test_cli_line_ending_from_env() {
    let (_dir, path) = ini_fixture("[s]\nk=v\n");

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_inistore"))
        .args(["dump", path.to_str().unwrap()])
        .env("INISTORE_LINE_ENDING", "crlf")
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "[s]\r\nk=v\r\n");
}
