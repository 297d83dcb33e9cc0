// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Checks that run before any job is touched.

use crate::exit_error::ExitError;
use bulkrun_adapters::EnvironmentAdapter;
use std::path::{Path, PathBuf};

/// A validated request to run one batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub input: PathBuf,
    pub request: Option<String>,
}

/// Validate arguments against the caller's environment.
///
/// Service accounts must name a request id. The input must be given with a
/// path whose directory exists.
pub fn validate<E: EnvironmentAdapter>(
    input: &Path,
    request: Option<&str>,
    env: &E,
) -> Result<Invocation, ExitError> {
    let request = request.map(str::trim).filter(|r| !r.is_empty());
    if request.is_none() && env.is_production_user() {
        return Err(ExitError::usage(
            "a request id is required when running as a service account\n\
             usage: bulkrun <FILE_OF_COMMANDS> [REQUEST]",
        ));
    }

    let has_dir = input.parent().is_some_and(|dir| !dir.as_os_str().is_empty() && dir.is_dir());
    if !has_dir {
        return Err(ExitError::usage(format!(
            "{} must be passed with a full, valid path (e.g. /NAS/mis/tmp/jobs_to_run.txt)",
            input.display()
        )));
    }

    Ok(Invocation { input: input.to_path_buf(), request: request.map(String::from) })
}

/// Read the batch file into lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ExitError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ExitError::usage(format!("cannot read {}: {e}", path.display())))?;
    Ok(text.lines().map(String::from).collect())
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
