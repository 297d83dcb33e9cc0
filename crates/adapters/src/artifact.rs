// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Artifact catalog lookups for secondary jobs.
//!
//! Secondary jobs have no descriptor file. Their run command is stored in
//! the artifact catalog keyed by job name (`mis_ai01_00_c`); each catalog
//! value `V` becomes the command `runjob srg V`.

use async_trait::async_trait;
use std::process::Stdio;
use thiserror::Error;

/// Errors from artifact lookups
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no artifact lookup configured")]
    NotConfigured,
    #[error("failed to run lookup for {job}: {source}")]
    SpawnFailed {
        job: String,
        source: std::io::Error,
    },
    #[error("lookup for {job} exited with code {code}: {stderr}")]
    QueryFailed { job: String, code: i32, stderr: String },
}

/// Adapter resolving a catalog job name to candidate run commands.
///
/// Zero, one, or many candidates may come back; choosing among them is up
/// to the caller.
#[async_trait]
pub trait ArtifactLookup: Clone + Send + Sync + 'static {
    async fn runjob_candidates(&self, job_name: &str) -> Result<Vec<String>, LookupError>;
}

/// Prefix applied to every catalog value.
pub const SRG_RUNJOB_PREFIX: &str = "runjob srg ";

/// Looks up candidates by running a configured query command.
///
/// `{job}` in the template is replaced with the job name (also exported as
/// `BULKRUN_JOB`). Every non-empty stdout line is one catalog value.
#[derive(Clone, Debug, Default)]
pub struct CommandLookup {
    template: Option<String>,
}

impl CommandLookup {
    pub fn new(template: impl Into<String>) -> Self {
        Self { template: Some(template.into()) }
    }

    /// A lookup that always fails with [`LookupError::NotConfigured`].
    pub fn disabled() -> Self {
        Self { template: None }
    }

    pub fn from_config(template: Option<String>) -> Self {
        Self { template: template.filter(|t| !t.trim().is_empty()) }
    }
}

#[async_trait]
impl ArtifactLookup for CommandLookup {
    async fn runjob_candidates(&self, job_name: &str) -> Result<Vec<String>, LookupError> {
        let Some(template) = &self.template else {
            return Err(LookupError::NotConfigured);
        };
        let query = template.replace("{job}", job_name);
        tracing::info!(job = job_name, "querying artifact catalog");

        let output = tokio::process::Command::new("sh")
            .arg("-c")
            .arg(&query)
            .env("BULKRUN_JOB", job_name)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| LookupError::SpawnFailed { job: job_name.to_string(), source })?;

        if !output.status.success() {
            return Err(LookupError::QueryFailed {
                job: job_name.to_string(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|value| format!("{SRG_RUNJOB_PREFIX}{value}"))
            .collect())
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{ArtifactLookup, LookupError, SRG_RUNJOB_PREFIX};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;

    #[derive(Default)]
    struct FakeLookupState {
        values: HashMap<String, Vec<String>>,
        errors: HashSet<String>,
        queries: Vec<String>,
    }

    /// In-memory artifact catalog for testing.
    #[derive(Clone, Default)]
    pub struct FakeArtifactLookup {
        inner: Arc<Mutex<FakeLookupState>>,
    }

    impl FakeArtifactLookup {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a catalog value for a job name (`runjob srg ` is prepended on lookup).
        pub fn insert(&self, job_name: &str, value: &str) {
            self.inner
                .lock()
                .values
                .entry(job_name.to_string())
                .or_default()
                .push(value.to_string());
        }

        /// Make lookups for a job name fail.
        pub fn fail(&self, job_name: &str) {
            self.inner.lock().errors.insert(job_name.to_string());
        }

        /// Job names queried so far
        pub fn queries(&self) -> Vec<String> {
            self.inner.lock().queries.clone()
        }
    }

    #[async_trait]
    impl ArtifactLookup for FakeArtifactLookup {
        async fn runjob_candidates(&self, job_name: &str) -> Result<Vec<String>, LookupError> {
            let mut state = self.inner.lock();
            state.queries.push(job_name.to_string());
            if state.errors.contains(job_name) {
                return Err(LookupError::QueryFailed {
                    job: job_name.to_string(),
                    code: 1,
                    stderr: "fake failure".to_string(),
                });
            }
            Ok(state
                .values
                .get(job_name)
                .map(|v| v.iter().map(|value| format!("{SRG_RUNJOB_PREFIX}{value}")).collect())
                .unwrap_or_default())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeArtifactLookup;

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
