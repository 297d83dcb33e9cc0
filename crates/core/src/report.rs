// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Final, read-only view of a batch run.

use crate::command::CanonicalCommand;
use crate::results::ResultsMap;
use crate::status::ResultStatus;
use serde::{Serialize, Serializer};
use std::path::PathBuf;

/// Where a failed job's log can be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLocation {
    Path(PathBuf),
    /// Resolution failed; details were logged when it happened
    RetrievalError,
}

impl LogLocation {
    pub const ERROR_SENTINEL: &'static str = "<LOGFILE RETRIEVAL ERROR>";
}

impl std::fmt::Display for LogLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLocation::Path(path) => write!(f, "{}", path.display()),
            LogLocation::RetrievalError => f.write_str(Self::ERROR_SENTINEL),
        }
    }
}

impl Serialize for LogLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Status of one input line, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineResult {
    /// 1-based position among the valid input lines
    pub index: usize,
    pub command: CanonicalCommand,
    pub status: ResultStatus,
}

/// A `FAILURE` or `LONGRUN` entry of the results map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedJob {
    /// 1-based position in the results map
    pub position: usize,
    pub command: CanonicalCommand,
    pub status: ResultStatus,
    /// Set for trackable jobs only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<LogLocation>,
}

/// A command excluded during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedJob {
    pub position: usize,
    pub command: CanonicalCommand,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub success: usize,
    pub failure: usize,
    pub skipped: usize,
    pub longrun: usize,
}

impl StatusCounts {
    pub fn add(&mut self, status: ResultStatus) {
        match status {
            ResultStatus::Success => self.success += 1,
            ResultStatus::Failure => self.failure += 1,
            ResultStatus::Skipped => self.skipped += 1,
            ResultStatus::LongRun => self.longrun += 1,
        }
    }

    /// Failures plus long runs.
    pub fn failed(&self) -> usize {
        self.failure + self.longrun
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub lines: Vec<LineResult>,
    pub counts: StatusCounts,
    pub failures: Vec<FailedJob>,
    pub skipped: Vec<SkippedJob>,
    pub results: ResultsMap,
}

impl BatchReport {
    /// Assemble a report from per-line statuses and the final results map.
    ///
    /// `locate` is asked for a log location of every failed or long-running
    /// entry and may return `None` for untracked commands.
    pub fn build(
        lines: Vec<LineResult>,
        results: ResultsMap,
        mut locate: impl FnMut(&CanonicalCommand) -> Option<LogLocation>,
    ) -> Self {
        let mut counts = StatusCounts::default();
        for line in &lines {
            counts.add(line.status);
        }

        let mut failures = Vec::new();
        let mut skipped = Vec::new();
        for (i, (command, status)) in results.iter().enumerate() {
            if status.is_failure() {
                failures.push(FailedJob {
                    position: i + 1,
                    command: command.clone(),
                    status,
                    log: locate(command),
                });
            } else if status == ResultStatus::Skipped {
                skipped.push(SkippedJob { position: i + 1, command: command.clone() });
            }
        }

        Self { lines, counts, failures, skipped, results }
    }

    pub fn has_failures(&self) -> bool {
        self.counts.failed() > 0
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
