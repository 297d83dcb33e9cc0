// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::exit_error::EXIT_USAGE;
use bulkrun_adapters::FakeEnvironment;

fn batch_file() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jobs.txt");
    std::fs::write(&path, "true\n").unwrap();
    (dir, path)
}

#[test]
fn service_account_needs_request() {
    let (_dir, path) = batch_file();
    let env = FakeEnvironment::new().production_user(true);
    let err = validate(&path, None, &env).unwrap_err();
    assert_eq!(err.code, EXIT_USAGE);
    assert!(err.message.contains("request id is required"));
}

#[test]
fn blank_request_counts_as_missing() {
    let (_dir, path) = batch_file();
    let env = FakeEnvironment::new().production_user(true);
    assert!(validate(&path, Some("  "), &env).is_err());
}

#[test]
fn service_account_with_request_passes() {
    let (_dir, path) = batch_file();
    let env = FakeEnvironment::new().production_user(true);
    let inv = validate(&path, Some("RESQ-195"), &env).unwrap();
    assert_eq!(inv.request.as_deref(), Some("RESQ-195"));
    assert_eq!(inv.input, path);
}

#[test]
fn personal_account_may_omit_request() {
    let (_dir, path) = batch_file();
    let inv = validate(&path, None, &FakeEnvironment::new()).unwrap();
    assert_eq!(inv.request, None);
}

#[yare::parameterized(
    bare_name     = { "jobs.txt" },
    missing_dir   = { "/definitely/not/here/jobs.txt" },
)]
fn input_without_valid_directory_is_rejected(input: &str) {
    let err = validate(Path::new(input), None, &FakeEnvironment::new()).unwrap_err();
    assert_eq!(err.code, EXIT_USAGE);
    assert!(err.message.contains("full, valid path"));
}

#[test]
fn read_lines_splits_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jobs.txt");
    std::fs::write(&path, "1234\n# note\n\nfalse\n").unwrap();
    assert_eq!(read_lines(&path).unwrap(), vec!["1234", "# note", "", "false"]);
}

#[test]
fn read_lines_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_lines(&dir.path().join("absent.txt")).unwrap_err();
    assert_eq!(err.code, EXIT_USAGE);
    assert!(err.message.contains("absent.txt"));
}
