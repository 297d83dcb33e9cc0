// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Running a single shell command to completion.

use async_trait::async_trait;
use std::process::Stdio;
use thiserror::Error;

/// Errors from process operations
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to spawn `{command}`: {source}")]
    SpawnFailed {
        command: String,
        source: std::io::Error,
    },
}

/// Adapter that runs one shell command and reports its exit code.
///
/// Output is not captured. A process killed by a signal reports `-1`.
#[async_trait]
pub trait ProcessAdapter: Clone + Send + Sync + 'static {
    async fn run(&self, command: &str) -> Result<i32, ProcessError>;
}

/// Runs commands through `sh -c` with stdio discarded.
///
/// Children are killed when the future driving them is dropped, so aborting
/// a batch does not leave processes behind.
#[derive(Clone, Debug, Default)]
pub struct ShellProcessAdapter {
    env: Vec<(String, String)>,
}

impl ShellProcessAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export an extra environment variable to every spawned command.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }
}

#[async_trait]
impl ProcessAdapter for ShellProcessAdapter {
    async fn run(&self, command: &str) -> Result<i32, ProcessError> {
        tracing::info!(%command, "executing command");
        let mut cmd = tokio::process::Command::new("sh");
        cmd.arg("-c")
            .arg(command)
            .envs(self.env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let status = cmd.status().await.map_err(|source| ProcessError::SpawnFailed {
            command: command.to_string(),
            source,
        })?;
        Ok(status.code().unwrap_or(-1))
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{ProcessAdapter, ProcessError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Default)]
    struct FakeProcessState {
        exit_codes: HashMap<String, i32>,
        delays: HashMap<String, Duration>,
        hangs: HashSet<String>,
        spawn_failures: HashSet<String>,
        calls: Vec<String>,
        completed: Vec<String>,
        in_flight: usize,
        max_in_flight: usize,
    }

    /// Fake process adapter for testing.
    ///
    /// Commands exit 0 unless configured otherwise. Every call is recorded
    /// in spawn order; completions are recorded separately.
    #[derive(Clone, Default)]
    pub struct FakeProcessAdapter {
        inner: Arc<Mutex<FakeProcessState>>,
    }

    /// Decrements the in-flight count even when the task is aborted.
    struct InFlight(Arc<Mutex<FakeProcessState>>);

    impl Drop for InFlight {
        fn drop(&mut self) {
            self.0.lock().in_flight -= 1;
        }
    }

    impl FakeProcessAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_exit_code(&self, command: &str, code: i32) {
            self.inner.lock().exit_codes.insert(command.to_string(), code);
        }

        pub fn set_delay(&self, command: &str, delay: Duration) {
            self.inner.lock().delays.insert(command.to_string(), delay);
        }

        /// Make a command run forever.
        pub fn set_hang(&self, command: &str) {
            self.inner.lock().hangs.insert(command.to_string());
        }

        pub fn fail_spawn(&self, command: &str) {
            self.inner.lock().spawn_failures.insert(command.to_string());
        }

        /// Commands passed to `run`, in call order
        pub fn calls(&self) -> Vec<String> {
            self.inner.lock().calls.clone()
        }

        /// Commands that ran to completion, in completion order
        pub fn completed(&self) -> Vec<String> {
            self.inner.lock().completed.clone()
        }

        /// Highest number of commands observed running at once
        pub fn max_in_flight(&self) -> usize {
            self.inner.lock().max_in_flight
        }
    }

    #[async_trait]
    impl ProcessAdapter for FakeProcessAdapter {
        async fn run(&self, command: &str) -> Result<i32, ProcessError> {
            let (delay, hang, code) = {
                let mut state = self.inner.lock();
                state.calls.push(command.to_string());
                if state.spawn_failures.contains(command) {
                    return Err(ProcessError::SpawnFailed {
                        command: command.to_string(),
                        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                    });
                }
                state.in_flight += 1;
                state.max_in_flight = state.max_in_flight.max(state.in_flight);
                (
                    state.delays.get(command).copied(),
                    state.hangs.contains(command),
                    state.exit_codes.get(command).copied().unwrap_or(0),
                )
            };
            let _guard = InFlight(Arc::clone(&self.inner));

            if hang {
                std::future::pending::<()>().await;
            }
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            self.inner.lock().completed.push(command.to_string());
            Ok(code)
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeProcessAdapter;

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
