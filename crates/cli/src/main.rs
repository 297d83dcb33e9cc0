// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bulkrun: run a file of job commands concurrently

mod args;
mod color;
mod config;
mod env;
mod exit_error;
mod invocation;
mod logging;
mod output;
mod run;

use clap::Parser;
use exit_error::ExitError;

#[tokio::main]
async fn main() {
    let cli = args::Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run::execute(cli).await {
        let code = match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                eprintln!("{} {}", color::error("error:"), exit.message);
                exit.code
            }
            None => {
                eprintln!("{} {e:#}", color::error("error:"));
                1
            }
        };
        std::process::exit(code);
    }
}
