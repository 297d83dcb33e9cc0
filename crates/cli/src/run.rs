// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wires config, adapters, and the engine together for one batch.

use crate::args::Cli;
use crate::config::Config;
use crate::env::REQUEST_ID_VAR;
use crate::exit_error::ExitError;
use crate::invocation;
use crate::output;
use bulkrun_adapters::{CommandLookup, HostEnvironment, ShellProcessAdapter};
use bulkrun_engine::{BatchRunner, ConcurrentExecutor, LogResolver, Normalizer};
use std::time::Duration;

pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref()).map_err(|e| ExitError::usage(e.to_string()))?;
    let env = HostEnvironment::new(config.environment.service_accounts.clone());
    let invocation = invocation::validate(&cli.input, cli.request.as_deref(), &env)?;
    let lines = invocation::read_lines(&invocation.input)?;

    let mut process = ShellProcessAdapter::new();
    if let Some(request) = &invocation.request {
        tracing::info!(request = %request, "exporting request id to jobs");
        process = process.env(REQUEST_ID_VAR, request.as_str());
    }

    let limit = cli.concurrency.or(config.run.concurrency);
    let deadline = cli.deadline.map(Duration::from_secs).or_else(|| config.deadline());
    tracing::debug!(?limit, ?deadline, input = %invocation.input.display(), "starting batch");

    let runner = BatchRunner::new(
        Normalizer::new(config.layout.clone(), CommandLookup::from_config(config.lookup.command.clone())),
        ConcurrentExecutor::new(process).limit(limit).deadline(deadline),
        LogResolver::new(config.layout, env),
    );
    let report = runner.run(&lines).await;
    output::print_report(&report, cli.output)?;

    if cli.strict && report.has_failures() {
        return Err(ExitError::job_failures(report.counts.failed()).into());
    }
    Ok(())
}
