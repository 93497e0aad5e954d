#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::SystemTime;

use tempfile::TempDir;

pub const DB_INI: &str = "[DB]\nhost=localhost\nport=5432\n";

/// A temp dir holding a single `config.ini` with `content`.
pub fn ini_fixture(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.ini");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

pub fn snapshot(path: &Path) -> (Vec<u8>, SystemTime) {
    let data = std::fs::read(path).unwrap();
    let modified = std::fs::metadata(path).unwrap().modified().unwrap();
    (data, modified)
}

pub fn run_inistore(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_inistore"))
        .args(args)
        .env_remove("INISTORE_LINE_ENDING")
        .output()
        .unwrap()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("inistore failed: {stderr}");
    }
}
