// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Report specs
//!
//! Verify statuses, the overview, and log locations for real shell jobs.

use crate::prelude::*;

#[test]
fn comments_and_blank_lines_are_ignored() {
    let temp = Project::empty();
    let input = temp.file("jobs.txt", "true\n# false\n\n// false\nfalse\n");

    temp.bulkrun()
        .args([&input])
        .passes()
        .stdout_has("(#1/2) true completed!")
        .stdout_has("(#2/2) false failed")
        .stdout_has("Experienced 1 failures. Listed below:")
        .stdout_has("(#2) Job false failed");
}

#[test]
fn job_codes_run_descriptor_scripts() {
    let temp = Project::empty();
    temp.script("scripts/praa1234.ctl", "exit 0");
    temp.script("scripts/praa5678.ctl", "exit 3");
    let input = temp.file("jobs.txt", "1234\n# comment\n\n./praa5678.ctl\n");
    let scripts = temp.path().join("scripts");

    temp.bulkrun()
        .args([&input])
        .passes()
        .stdout_has(&format!("{}/praa1234.ctl completed!", scripts.display()))
        .stdout_has(&format!("{}/praa5678.ctl failed", scripts.display()));
}

#[test]
fn duplicate_lines_run_once() {
    let temp = Project::empty();
    let counter = temp.path().join("count");
    let line = format!("echo x >> {}", counter.display());
    let input = temp.file("jobs.txt", &format!("{line}\n{line}\n"));

    temp.bulkrun()
        .args([&input])
        .passes()
        .stdout_has("(#2/2) echo x")
        .stdout_has("skipped")
        .stdout_has("No failures detected!");

    assert_eq!(std::fs::read_to_string(counter).unwrap().lines().count(), 1);
}

#[test]
fn unresolved_secondary_job_is_skipped() {
    let temp = Project::empty();
    let input = temp.file("jobs.txt", "ai01\n");

    temp.bulkrun()
        .args([&input])
        .passes()
        .stdout_has("Total amount of jobs skipped: 1")
        .stdout_has("Check that associated SRG exists and retry")
        .stdout_has("No failures detected!");
}

#[test]
fn secondary_job_resolves_through_lookup() {
    let temp = Project::empty();
    let seen = temp.path().join("srg.txt");
    temp.script("bin/runjob", &format!("echo \"$*\" > {}", seen.display()));
    temp.config("\n[lookup]\ncommand = \"echo Daily Extract\"\n");
    let input = temp.file("jobs.txt", "ai01\n");
    let path = format!("{}:{}", temp.path().join("bin").display(), std::env::var("PATH").unwrap());

    temp.bulkrun()
        .env("PATH", path)
        .args([&input])
        .passes()
        .stdout_has("runjob srg Daily Extract completed!");

    assert_eq!(std::fs::read_to_string(seen).unwrap().trim(), "srg Daily Extract");
}

#[test]
fn failing_runjob_points_at_newest_log() {
    let temp = Project::empty();
    temp.file("tmp/_jobs/fin_daily/rpt01_20260101.log", "old");
    let log = temp.file("tmp/_jobs/fin_daily/rpt01_20260102.log", "new");
    let old = temp.path().join("tmp/_jobs/fin_daily/rpt01_20260101.log");
    let past = std::time::SystemTime::now() - std::time::Duration::from_secs(600);
    std::fs::File::options().write(true).open(&old).unwrap().set_modified(past).unwrap();
    temp.script("bin/runjob", "exit 1");
    let input = temp.file("jobs.txt", "runjob fin_daily rpt01\n");
    let path = format!("{}:{}", temp.path().join("bin").display(), std::env::var("PATH").unwrap());

    temp.bulkrun()
        .env("PATH", path)
        .args([&input])
        .passes()
        .stdout_has("(#1) Job runjob fin_daily rpt01 failed")
        .stdout_has(&format!("Logfile available at: {}", log.display()));
}

#[test]
fn failing_runjob_without_log_prints_sentinel() {
    let temp = Project::empty();
    temp.script("bin/runjob", "exit 1");
    let input = temp.file("jobs.txt", "runjob fin_daily rpt01\n");
    let path = format!("{}:{}", temp.path().join("bin").display(), std::env::var("PATH").unwrap());

    temp.bulkrun()
        .env("PATH", path)
        .args([&input])
        .passes()
        .stdout_has("Logfile available at: <LOGFILE RETRIEVAL ERROR>");
}

#[test]
fn deadline_reports_longrun() {
    let temp = Project::empty();
    let input = temp.file("jobs.txt", "sleep 30\ntrue\n");

    temp.bulkrun()
        .args(["--deadline", "1"])
        .args([&input])
        .passes()
        .stdout_has("(#1/2) sleep 30 ran long and did not reach end state")
        .stdout_has("(#2/2) true completed!")
        .stdout_has("(#1) Job sleep 30 ran long or did not reach end state");
}

#[test]
fn strict_mode_exits_two_on_failure() {
    let temp = Project::empty();
    let input = temp.file("jobs.txt", "false\n");
    let run = temp.bulkrun().args(["--strict"]).args([&input]).fails();
    assert_eq!(run.code(), Some(2));
}

#[test]
fn strict_mode_passes_clean_batch() {
    let temp = Project::empty();
    let input = temp.file("jobs.txt", "true\n");
    temp.bulkrun().args(["--strict"]).args([&input]).passes();
}

#[test]
fn json_output_is_machine_readable() {
    let temp = Project::empty();
    let input = temp.file("jobs.txt", "true\nfalse\n");

    let run = temp.bulkrun().args(["-o", "json"]).args([&input]).passes();
    let value: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();

    assert_eq!(value["results"]["true"], "SUCCESS");
    assert_eq!(value["results"]["false"], "FAILURE");
    assert_eq!(value["counts"]["success"], 1);
    assert_eq!(value["lines"].as_array().unwrap().len(), 2);
}
