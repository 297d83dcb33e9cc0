// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log file discovery for failed trackable jobs.
//!
//! The log directory depends on the host and the job kind:
//!
//! ```text
//!                 standard (runjob a_b id)        secondary (runjob srg id)
//! production      {prod}/jobs/a/b/log/id*         {prod}/srg/*id*/logs/logfile.txt
//! non-production  {nonprod}/_jobs/a_b/id*         {nonprod}/_srg/id*
//! ```
//!
//! `publish NAME-ID` is first translated to `runjob all_publish ...` by
//! finding its publish config. Globbed candidates resolve to the most
//! recently modified file.

use crate::classify::TrackedCommand;
use bulkrun_adapters::EnvironmentAdapter;
use bulkrun_core::{Layout, LogLocation};
use glob::Pattern;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

const PUBLISH_GROUP: &str = "all_publish";
const SECONDARY_GROUP: &str = "srg";

/// Errors while resolving a log path
#[derive(Debug, Error)]
pub enum LogError {
    #[error("not a trackable command: {0}")]
    Malformed(String),
    #[error("job group `{0}` is not of the form <area>_<name>")]
    MalformedGroup(String),
    #[error("no publish config matching {name} found in {}", .dir.display())]
    NoPublishConfig { name: String, dir: PathBuf },
    #[error("WORKING_JOBS_DIR is not set")]
    NoWorkingJobsDir,
    #[error("no secondary job directory matching {identifier} in {}", .dir.display())]
    NoSecondaryDir { identifier: String, dir: PathBuf },
    #[error("no log file matches {0}")]
    NoLogFile(String),
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
    #[error("invalid log pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolves log paths using the host environment and filesystem layout.
#[derive(Clone)]
pub struct LogResolver<E> {
    layout: Layout,
    env: E,
}

impl<E: EnvironmentAdapter> LogResolver<E> {
    pub fn new(layout: Layout, env: E) -> Self {
        Self { layout, env }
    }

    /// Best-effort log location; failures are logged and reported as the
    /// retrieval error sentinel.
    pub fn locate(&self, command: &str) -> LogLocation {
        match self.resolve(command) {
            Ok(path) => LogLocation::Path(path),
            Err(e) => {
                tracing::error!(command, error = %e, "log file resolution failed");
                LogLocation::RetrievalError
            }
        }
    }

    pub fn resolve(&self, command: &str) -> Result<PathBuf, LogError> {
        let (group, identifier) = match TrackedCommand::parse(command) {
            Some(TrackedCommand::RunJob { group, identifier }) => (group, identifier),
            Some(TrackedCommand::Publish { name, id }) => {
                (PUBLISH_GROUP.to_string(), self.publish_identifier(&name, &id)?)
            }
            None => return Err(LogError::Malformed(command.to_string())),
        };
        let secondary = group == SECONDARY_GROUP;

        let dir = if self.env.is_production_host() {
            if secondary {
                return self.prod_secondary_log(&identifier);
            }
            let mut pieces = group.split('_');
            match (pieces.next(), pieces.next()) {
                (Some(area), Some(name)) if !area.is_empty() && !name.is_empty() => {
                    self.layout.prod_jobs_dir().join(area).join(name).join("log")
                }
                _ => return Err(LogError::MalformedGroup(group)),
            }
        } else if secondary {
            self.layout.nonprod_srg_dir()
        } else {
            self.layout.nonprod_jobs_dir(&group)
        };

        latest_log(&dir, &identifier)
    }

    /// Find the publish config for `NAME-ID`, trying the hyphenated file
    /// name before the joined one. Returns the runjob identifier.
    fn publish_identifier(&self, name: &str, id: &str) -> Result<String, LogError> {
        let jobs_dir = if self.env.is_production_user() {
            self.layout.prod_jobs_dir()
        } else {
            self.env.working_jobs_dir().ok_or(LogError::NoWorkingJobsDir)?
        };
        let dir = Layout::publish_dir(&jobs_dir);

        for stem in [format!("{name}-{id}_publish"), format!("{name}{id}_publish")] {
            if dir.join(format!("{stem}.cfg")).is_file() {
                tracing::debug!(%stem, "publish config found");
                return Ok(stem);
            }
        }
        Err(LogError::NoPublishConfig { name: format!("{name}-{id}"), dir })
    }

    /// Secondary jobs on production keep a fixed log file inside a
    /// directory whose name contains the identifier.
    fn prod_secondary_log(&self, identifier: &str) -> Result<PathBuf, LogError> {
        let dir = self.layout.prod_srg_dir();
        let mut matches = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() && entry.file_name().to_string_lossy().contains(identifier)
            {
                matches.push(entry.path());
            }
        }
        matches.sort();
        let job_dir = matches.into_iter().next().ok_or_else(|| LogError::NoSecondaryDir {
            identifier: identifier.to_string(),
            dir: dir.clone(),
        })?;
        Ok(job_dir.join("logs").join("logfile.txt"))
    }
}

/// Most recently modified file in `dir` whose name starts with `identifier`.
fn latest_log(dir: &Path, identifier: &str) -> Result<PathBuf, LogError> {
    let dir_str = dir.to_str().ok_or_else(|| LogError::NonUtf8Path(dir.to_path_buf()))?;
    let pattern = format!("{}/{}*", Pattern::escape(dir_str), Pattern::escape(identifier));

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for path in glob::glob(&pattern)?.flatten() {
        let meta = std::fs::metadata(&path)?;
        if !meta.is_file() {
            continue;
        }
        let modified = meta.modified()?;
        let is_newer = match &newest {
            Some((time, best)) => (modified, &path) > (*time, best),
            None => true,
        };
        if is_newer {
            newest = Some((modified, path));
        }
    }
    newest.map(|(_, path)| path).ok_or(LogError::NoLogFile(pattern))
}

#[cfg(test)]
#[path = "log_resolver_tests.rs"]
mod tests;
