// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering.

use crate::color;
use bulkrun_core::{BatchReport, FailedJob, LineResult, ResultStatus, SkippedJob};
use clap::ValueEnum;
use std::fmt::Write;

const WIDTH: usize = 96;
const OVERVIEW_TITLE: &str = "  RESULTS OVERVIEW  ";

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print the report to stdout in the requested format.
pub fn print_report(report: &BatchReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

/// Per-line results followed by the overview.
pub fn render_text(report: &BatchReport) -> String {
    let mut out = String::new();
    let rule = "#".repeat(WIDTH);

    let _ = writeln!(out, "{}", color::header("Execution begins"));
    let _ = writeln!(out, "{}", "-".repeat(WIDTH));
    let total = report.lines.len();
    for line in &report.lines {
        let _ = writeln!(out, "{}", line_summary(line, total));
        let _ = writeln!(out, "{rule}");
    }
    out.push('\n');

    let side = "#".repeat((WIDTH - OVERVIEW_TITLE.len()) / 2);
    let _ = writeln!(out, "{}", color::header(&format!("{side}{OVERVIEW_TITLE}{side}")));
    out.push('\n');
    let _ = writeln!(out, "{rule}");

    if report.counts.skipped > 0 {
        let msg = format!("Total amount of jobs skipped: {}", report.counts.skipped);
        let _ = writeln!(out, "{}\n", color::warn(&msg));
    }

    let failed = report.counts.failed();
    if failed > 0 {
        let msg = format!("Experienced {failed} failures. Listed below:");
        let _ = writeln!(out, "{}", color::error(&msg));
    }
    for entry in overview_entries(report) {
        match entry {
            Entry::Failed(job) => {
                let _ = writeln!(out, "{}", failure_summary(job));
                if let Some(log) = &job.log {
                    let note = format!("    Logfile available at: {log}");
                    let _ = writeln!(out, "{}", color::context(&note));
                }
            }
            Entry::Skipped(job) => {
                let _ = writeln!(
                    out,
                    "(#{}) Job {} skipped. Check that associated SRG exists and retry",
                    job.position, job.command
                );
            }
        }
    }
    if failed == 0 {
        let _ = writeln!(out, "{}", color::success("No failures detected!"));
    }
    let _ = writeln!(out, "Execution ends");
    out
}

fn line_summary(line: &LineResult, total: usize) -> String {
    let prefix = format!("(#{}/{total}) {}", line.index, line.command);
    match line.status {
        ResultStatus::Success => color::success(&format!("{prefix} completed!")),
        ResultStatus::Failure => color::error(&format!("{prefix} failed")),
        ResultStatus::Skipped => color::warn(&format!("{prefix} skipped")),
        ResultStatus::LongRun => {
            color::error(&format!("{prefix} ran long and did not reach end state"))
        }
    }
}

fn failure_summary(job: &FailedJob) -> String {
    match job.status {
        ResultStatus::LongRun => {
            format!("(#{}) Job {} ran long or did not reach end state", job.position, job.command)
        }
        _ => format!("(#{}) Job {} failed", job.position, job.command),
    }
}

enum Entry<'a> {
    Failed(&'a FailedJob),
    Skipped(&'a SkippedJob),
}

impl Entry<'_> {
    fn position(&self) -> usize {
        match self {
            Entry::Failed(job) => job.position,
            Entry::Skipped(job) => job.position,
        }
    }
}

/// Failures and skips interleaved in results order.
fn overview_entries(report: &BatchReport) -> Vec<Entry<'_>> {
    let mut entries: Vec<Entry<'_>> = report
        .failures
        .iter()
        .map(Entry::Failed)
        .chain(report.skipped.iter().map(Entry::Skipped))
        .collect();
    entries.sort_by_key(|e| e.position());
    entries
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
