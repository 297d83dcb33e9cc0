// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation specs
//!
//! Verify argument and environment checks stop a batch before any job runs.

use crate::prelude::*;

#[test]
fn missing_input_argument_fails() {
    let temp = Project::empty();
    temp.bulkrun().fails();
}

#[test]
fn input_in_missing_directory_fails() {
    let temp = Project::empty();
    let run = temp
        .bulkrun()
        .args(["/no/such/place/jobs.txt"])
        .fails()
        .stderr_has("full, valid path");
    assert_eq!(run.code(), Some(1));
}

#[test]
fn service_account_without_request_runs_nothing() {
    let temp = Project::empty();
    let marker = temp.path().join("ran");
    let input = temp.file("jobs.txt", &format!("touch {}\n", marker.display()));

    let run = temp
        .bulkrun()
        .env("BULKRUN_SERVICE_ACCOUNTS", "svc_batch,spec_user")
        .args([&input])
        .fails()
        .stderr_has("request id is required");

    assert_eq!(run.code(), Some(1));
    assert!(!marker.exists(), "no job may run before validation passes");
    assert!(!run.stdout().contains("Execution begins"));
}

#[test]
fn service_account_with_request_exports_it() {
    let temp = Project::empty();
    let out = temp.path().join("request.txt");
    let input = temp.file("jobs.txt", &format!("echo \"$WORKING_JIRA_ID\" > {}\n", out.display()));

    temp.bulkrun()
        .env("BULKRUN_SERVICE_ACCOUNTS", "spec_user")
        .args([input.as_os_str(), std::ffi::OsStr::new("RESQ-195")])
        .passes();

    assert_eq!(std::fs::read_to_string(out).unwrap().trim(), "RESQ-195");
}

#[test]
fn unreadable_config_fails() {
    let temp = Project::empty();
    let input = temp.file("jobs.txt", "true\n");
    temp.config("[run\n");
    temp.bulkrun().args([&input]).fails().stderr_has("invalid config");
}
