// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-command result states.

use serde::{Deserialize, Serialize};

/// Terminal status of one command in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResultStatus {
    /// Exited 0
    Success,
    /// Exited non-zero or could not be spawned
    Failure,
    /// Excluded during normalization, or a duplicate
    Skipped,
    /// No terminal signal before the batch deadline
    LongRun,
}

impl ResultStatus {
    /// Failures and long runs both count against the batch.
    pub fn is_failure(self) -> bool {
        matches!(self, ResultStatus::Failure | ResultStatus::LongRun)
    }
}

crate::simple_display! {
    ResultStatus {
        Success => "SUCCESS",
        Failure => "FAILURE",
        Skipped => "SKIPPED",
        LongRun => "LONGRUN",
    }
}

/// What the executor observed for one dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failure,
    /// Already resolved earlier; no process was spawned
    Skipped,
}

impl From<Outcome> for ResultStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ResultStatus::Success,
            Outcome::Failure => ResultStatus::Failure,
            Outcome::Skipped => ResultStatus::Skipped,
        }
    }
}

impl ResultStatus {
    /// Status for an executor slot; no outcome means the command never
    /// reached an end state.
    pub fn from_outcome(outcome: Option<Outcome>) -> Self {
        outcome.map_or(ResultStatus::LongRun, ResultStatus::from)
    }
}

crate::simple_display! {
    Outcome {
        Success => "success",
        Failure => "failure",
        Skipped => "skipped",
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
