// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! The run path returns `ExitError` instead of calling `std::process::exit()`
//! so that `main()` owns process termination.

use std::fmt;

/// Invocation problems: bad arguments, bad input path, bad config.
pub const EXIT_USAGE: i32 = 1;
/// The batch ran but some job failed or ran long (`--strict` only).
pub const EXIT_JOB_FAILURES: i32 = 2;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, message)
    }

    pub fn job_failures(failed: usize) -> Self {
        Self::new(EXIT_JOB_FAILURES, format!("{failed} job(s) failed or ran long"))
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}
