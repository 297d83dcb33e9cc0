// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Run a file of job commands concurrently and report what failed.
///
/// Each line is a shell command, a descriptor name (`praa1234.ctl`), or a
/// bare four-character job code (`1234`). Blank lines and lines starting
/// with `#` or `//` are ignored.
#[derive(Debug, Parser)]
#[command(name = "bulkrun", version = crate::env::VERSION, styles = crate::color::styles())]
pub struct Cli {
    /// File of commands, given with its full path
    pub input: PathBuf,

    /// Change request id, exported to jobs as WORKING_JIRA_ID (required for service accounts)
    pub request: Option<String>,

    /// Maximum number of jobs running at once
    #[arg(short = 'j', long)]
    pub concurrency: Option<usize>,

    /// Seconds the whole batch may run before remaining jobs are reported LONGRUN
    #[arg(long, value_name = "SECS")]
    pub deadline: Option<u64>,

    #[arg(short = 'o', long, value_enum, default_value_t)]
    pub output: OutputFormat,

    /// Config file (default: $BULKRUN_CONFIG or ~/.config/bulkrun/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Exit with status 2 when any job fails or runs long
    #[arg(long)]
    pub strict: bool,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
