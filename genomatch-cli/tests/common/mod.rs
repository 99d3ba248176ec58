#![allow(dead_code)]

use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

/// Writes `(name, sequence)` records to a temporary FASTA file
pub fn write_fasta(records: &[(&str, &str)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for (name, sequence) in records {
        writeln!(file, ">{}", name).unwrap();
        writeln!(file, "{}", sequence).unwrap();
    }
    file.flush().unwrap();
    file
}

/// Path of a temporary file as a CLI argument
pub fn path_arg(file: &NamedTempFile) -> &str {
    file.path().to_str().unwrap()
}

/// The genomatch binary with logging silenced
pub fn genomatch() -> Command {
    let mut cmd = Command::cargo_bin("genomatch").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Runs genomatch and returns its stdout, asserting success
pub fn run_genomatch(args: &[&str]) -> String {
    let output = genomatch().args(args).arg("-q").assert().success();
    String::from_utf8(output.get_output().stdout.clone()).unwrap()
}

/// Runs genomatch, asserting failure with `needle` on stderr
pub fn assert_fails_with(args: &[&str], needle: &str) {
    let assert = genomatch().args(args).assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(
        stderr.contains(needle),
        "expected {:?} in stderr, got: {}",
        needle,
        stderr
    );
}
