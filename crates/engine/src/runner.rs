// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch orchestration.
//!
//! Each valid input line ends in exactly one terminal status:
//!
//! ```text
//! PENDING ──excluded──────────────────────────────→ SKIPPED
//!    │
//!    └──→ DISPATCHED ──exit 0─────────────────────→ SUCCESS
//!             ├───────exit ≠ 0 / spawn error──────→ FAILURE
//!             ├───────already seen────────────────→ SKIPPED
//!             └───────no end state by deadline────→ LONGRUN
//! ```

use crate::classify::has_logfile;
use crate::executor::ConcurrentExecutor;
use crate::log_resolver::LogResolver;
use crate::normalize::{Normalized, Normalizer};
use bulkrun_adapters::{ArtifactLookup, EnvironmentAdapter, ProcessAdapter};
use bulkrun_core::{
    is_valid_line, BatchReport, CanonicalCommand, LineResult, LogLocation, ResultStatus,
    ResultsMap,
};
use std::collections::HashMap;

/// Runs one batch end to end: normalize, execute, classify, report.
pub struct BatchRunner<P, E, L> {
    normalizer: Normalizer<L>,
    executor: ConcurrentExecutor<P>,
    resolver: LogResolver<E>,
}

impl<P, E, L> BatchRunner<P, E, L>
where
    P: ProcessAdapter,
    E: EnvironmentAdapter,
    L: ArtifactLookup,
{
    pub fn new(
        normalizer: Normalizer<L>,
        executor: ConcurrentExecutor<P>,
        resolver: LogResolver<E>,
    ) -> Self {
        Self { normalizer, executor, resolver }
    }

    /// Run every valid line of a batch. Blank and comment lines are dropped
    /// before numbering.
    pub async fn run<I, S>(&self, lines: I) -> BatchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .filter(|l| is_valid_line(l.as_ref()))
            .map(|l| l.as_ref().trim().to_string())
            .collect();
        let total = lines.len();
        tracing::info!(total, "execution begins");

        // Excluded commands are seeded first so the executor treats them as resolved
        let mut seen = ResultsMap::new();
        let mut normalized: Vec<Normalized> = Vec::with_capacity(total);
        for line in &lines {
            let n = self.normalizer.normalize(line).await;
            if n.exclude {
                seen.record(n.command.clone(), ResultStatus::Skipped);
            }
            normalized.push(n);
        }

        let to_run: Vec<CanonicalCommand> =
            normalized.iter().filter(|n| !n.exclude).map(|n| n.command.clone()).collect();
        let mut dispatches = self.executor.run_all(&to_run, &seen).await.into_iter();

        let mut results = ResultsMap::new();
        let mut line_results = Vec::with_capacity(total);
        for (i, n) in normalized.into_iter().enumerate() {
            let status = if n.exclude {
                ResultStatus::Skipped
            } else {
                ResultStatus::from_outcome(dispatches.next().and_then(|d| d.outcome))
            };
            let duplicate = status == ResultStatus::Skipped && !n.exclude;
            if !duplicate {
                results.record(n.command.clone(), status);
            }
            log_line(i + 1, total, &n.command, status);
            line_results.push(LineResult { index: i + 1, command: n.command, status });
        }

        let located = self.locate_logs(&results).await;
        let report = BatchReport::build(line_results, results, |command| {
            has_logfile(command).then(|| {
                located.get(command).cloned().unwrap_or(LogLocation::RetrievalError)
            })
        });
        tracing::info!(
            success = report.counts.success,
            failure = report.counts.failure,
            skipped = report.counts.skipped,
            longrun = report.counts.longrun,
            "execution ends"
        );
        report
    }
}

impl<P, E, L> BatchRunner<P, E, L>
where
    E: EnvironmentAdapter,
{
    /// Resolve logs for failed trackable commands on the blocking pool;
    /// the lookups walk shared network directories.
    async fn locate_logs(&self, results: &ResultsMap) -> HashMap<CanonicalCommand, LogLocation> {
        let tracked: Vec<CanonicalCommand> = results
            .iter()
            .filter(|(command, status)| status.is_failure() && has_logfile(command))
            .map(|(command, _)| command.clone())
            .collect();
        if tracked.is_empty() {
            return HashMap::new();
        }

        let resolver = self.resolver.clone();
        let task = tokio::task::spawn_blocking(move || {
            tracked
                .into_iter()
                .map(|command| {
                    let location = resolver.locate(&command);
                    (command, location)
                })
                .collect()
        });
        match task.await {
            Ok(located) => located,
            Err(e) => {
                tracing::error!(error = %e, "log resolution task failed");
                HashMap::new()
            }
        }
    }
}

fn log_line(index: usize, total: usize, command: &CanonicalCommand, status: ResultStatus) {
    match status {
        ResultStatus::Success => tracing::info!("(#{index}/{total}) {command} completed"),
        ResultStatus::Failure => tracing::error!("(#{index}/{total}) {command} failed"),
        ResultStatus::Skipped => tracing::warn!("(#{index}/{total}) {command} skipped"),
        ResultStatus::LongRun => {
            tracing::error!("(#{index}/{total}) {command} ran long and did not reach an end state")
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
