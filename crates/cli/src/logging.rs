// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr. The report itself goes to stdout.

use crate::env;
use tracing_subscriber::EnvFilter;

/// Filter used when `BULKRUN_LOG` is unset.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Build the filter: `BULKRUN_LOG` if it parses, else the verbosity default.
pub fn filter(verbose: u8) -> EnvFilter {
    env::log_filter()
        .and_then(|directives| match EnvFilter::try_new(&directives) {
            Ok(f) => Some(f),
            Err(e) => {
                eprintln!("warning: ignoring BULKRUN_LOG={directives:?}: {e}");
                None
            }
        })
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
