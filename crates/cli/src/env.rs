// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;
use std::time::Duration;

/// Version string shown by `--version`
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BULKRUN_GIT_HASH"));

/// Variable exported to every spawned job when a request id is given
pub const REQUEST_ID_VAR: &str = "WORKING_JIRA_ID";

/// Resolve the config file: BULKRUN_CONFIG > XDG config dir
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = explicit_config_path() {
        return Some(path);
    }
    dirs::config_dir().map(|d| d.join("bulkrun").join("config.toml"))
}

/// Config file named through `BULKRUN_CONFIG`
pub fn explicit_config_path() -> Option<PathBuf> {
    std::env::var("BULKRUN_CONFIG").ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Maximum number of jobs running at once
pub fn concurrency() -> Option<usize> {
    std::env::var("BULKRUN_CONCURRENCY").ok().and_then(|s| s.parse::<usize>().ok())
}

/// Whole-batch deadline
pub fn deadline() -> Option<Duration> {
    std::env::var("BULKRUN_DEADLINE_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Secondary-job catalog query, with `{job}` standing for the job name
pub fn lookup_command() -> Option<String> {
    std::env::var("BULKRUN_LOOKUP_CMD").ok().filter(|s| !s.trim().is_empty())
}

/// Comma-separated list of service accounts
pub fn service_accounts() -> Option<Vec<String>> {
    let raw = std::env::var("BULKRUN_SERVICE_ACCOUNTS").ok()?;
    Some(raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect())
}

/// Tracing filter directives (`BULKRUN_LOG`)
pub fn log_filter() -> Option<String> {
    std::env::var("BULKRUN_LOG").ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
