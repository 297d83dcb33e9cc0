// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Concurrent command executor

use bulkrun_adapters::ProcessAdapter;
use bulkrun_core::{CanonicalCommand, Outcome, ResultsMap};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

/// One input command and what became of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub command: CanonicalCommand,
    /// `None` when the command never reached an end state
    pub outcome: Option<Outcome>,
}

/// Runs a batch of commands concurrently, one task per command.
///
/// All tasks are spawned before any is awaited, and results are only
/// returned once every task has finished (or the batch deadline passed).
pub struct ConcurrentExecutor<P> {
    process: P,
    limit: Option<usize>,
    deadline: Option<Duration>,
}

impl<P: ProcessAdapter> ConcurrentExecutor<P> {
    pub fn new(process: P) -> Self {
        Self { process, limit: None, deadline: None }
    }

    /// Cap on processes running at once (at least 1).
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit.map(|n| n.max(1));
        self
    }

    /// Time allowed for the whole batch. Commands still running when it
    /// expires are killed and reported without an outcome.
    pub fn deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Execute `commands` and return one [`Dispatch`] per command, in input
    /// order regardless of completion order.
    ///
    /// A command already present in `seen`, or repeated earlier in the same
    /// batch, is reported as [`Outcome::Skipped`] without spawning.
    pub async fn run_all(&self, commands: &[CanonicalCommand], seen: &ResultsMap) -> Vec<Dispatch> {
        let slots: Arc<Mutex<Vec<Option<Outcome>>>> = Arc::new(Mutex::new(vec![None; commands.len()]));
        let semaphore = self.limit.map(|n| Arc::new(Semaphore::new(n)));
        let mut dispatched: HashSet<&str> = HashSet::new();
        let mut handles = Vec::new();

        for (index, command) in commands.iter().enumerate() {
            if seen.contains(command) || !dispatched.insert(command.as_str()) {
                tracing::debug!(%command, "already seen, not spawning");
                slots.lock()[index] = Some(Outcome::Skipped);
                continue;
            }

            let process = self.process.clone();
            let slots = Arc::clone(&slots);
            let semaphore = semaphore.clone();
            let command = command.clone();
            handles.push(tokio::spawn(async move {
                let _permit = match semaphore {
                    Some(s) => s.acquire_owned().await.ok(),
                    None => None,
                };
                let outcome = execute_one(&process, &command).await;
                if let Some(slot) = slots.lock().get_mut(index) {
                    *slot = Some(outcome);
                }
            }));
        }

        tracing::info!(spawned = handles.len(), total = commands.len(), "awaiting commands");
        self.join(handles).await;

        let outcomes = std::mem::take(&mut *slots.lock());
        commands
            .iter()
            .cloned()
            .zip(outcomes)
            .map(|(command, outcome)| Dispatch { command, outcome })
            .collect()
    }

    /// Wait for every task, aborting the stragglers if the deadline passes.
    ///
    /// Aborted tasks are still awaited, so no task touches the slots once
    /// this returns. A task caught mid-poll by the abort finishes normally
    /// and keeps its outcome.
    async fn join(&self, mut handles: Vec<JoinHandle<()>>) {
        let mut finished = 0;
        let all = async {
            for handle in handles.iter_mut() {
                if let Err(e) = handle.await {
                    tracing::warn!(error = %e, "command task did not finish");
                }
                finished += 1;
            }
        };

        let Some(deadline) = self.deadline else {
            all.await;
            return;
        };
        if tokio::time::timeout(deadline, all).await.is_ok() {
            return;
        }

        tracing::warn!(?deadline, "batch deadline reached, aborting running commands");
        let stragglers = handles.split_off(finished);
        for handle in &stragglers {
            handle.abort();
        }
        for handle in stragglers {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    tracing::warn!(error = %e, "command task did not finish");
                }
            }
        }
    }
}

async fn execute_one<P: ProcessAdapter>(process: &P, command: &CanonicalCommand) -> Outcome {
    match process.run(command).await {
        Ok(0) => Outcome::Success,
        Ok(code) => {
            tracing::info!(%command, exit_code = code, "command failed");
            Outcome::Failure
        }
        Err(e) => {
            tracing::warn!(%command, error = %e, "command could not be started");
            Outcome::Failure
        }
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
