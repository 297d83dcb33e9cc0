// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Input line normalization.
//!
//! Accepted spellings of the same job all normalize to one command:
//!
//! ```text
//! 1234                              ─┐
//! praa1234                           │
//! praa1234.ctl                       ├─→ /NAS/mis/esp/scripts/praa1234.ctl
//! ./praa1234.ctl                     │
//! /NAS/mis/esp/scripts/praa1234.ctl ─┘
//! ```
//!
//! Secondary jobs (`praa?i??`) have no descriptor on disk and are replaced
//! with their catalog run command, or excluded when none can be found.

use bulkrun_adapters::{ArtifactLookup, LookupError};
use bulkrun_core::{CanonicalCommand, DescriptorRef, Layout};
use thiserror::Error;

/// Why a secondary job could not be resolved to a run command.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("no command found for {job}; either the job name is invalid or catalog data is missing")]
    NotFound { job: String },
    #[error("{count} commands returned for {job}; check catalog data and retry")]
    Ambiguous { job: String, count: usize },
}

/// A normalized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub command: CanonicalCommand,
    /// Must not be executed; reported as skipped
    pub exclude: bool,
}

impl Normalized {
    fn keep(command: impl Into<CanonicalCommand>) -> Self {
        Self { command: command.into(), exclude: false }
    }

    fn excluded(raw: &str) -> Self {
        Self { command: CanonicalCommand::new(raw), exclude: true }
    }
}

fn is_job_code(line: &str) -> bool {
    line.len() == 4 && line.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Rewrite a raw line into canonical form without consulting the catalog.
///
/// Leading `./` markers are removed first, so applying `scrub` to its own
/// output never changes it.
pub fn scrub(raw: &str, layout: &Layout) -> String {
    let mut line = raw.trim();
    while let Some(rest) = line.strip_prefix("./") {
        line = rest.trim_start();
    }

    let line = if is_job_code(line) { layout.descriptor_file(line) } else { line.to_string() };

    if !layout.descriptor_prefix.is_empty() && line.starts_with(&layout.descriptor_prefix) {
        layout.descriptor_path(&line)
    } else {
        line
    }
}

/// Turns raw lines into canonical commands.
pub struct Normalizer<L> {
    layout: Layout,
    lookup: L,
}

impl<L: ArtifactLookup> Normalizer<L> {
    pub fn new(layout: Layout, lookup: L) -> Self {
        Self { layout, lookup }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Normalize one line. Never fails: lines that cannot be resolved come
    /// back as the original text with `exclude` set.
    pub async fn normalize(&self, raw: &str) -> Normalized {
        let raw = raw.trim();
        let line = scrub(raw, &self.layout);

        let line = match DescriptorRef::parse(&line, &self.layout) {
            Some(desc) if desc.is_secondary() => {
                tracing::warn!(raw, descriptor = %line, "secondary job; descriptor will not exist");
                match self.resolve_secondary(&desc).await {
                    Ok(command) => command,
                    Err(e) => {
                        tracing::warn!(raw, error = %e, "excluding unresolved secondary job");
                        return Normalized::excluded(raw);
                    }
                }
            }
            _ => line,
        };

        if line != raw {
            tracing::info!(raw, command = %line, "scrubbed input line");
        }
        Normalized::keep(line)
    }

    /// Exactly one catalog candidate is accepted.
    async fn resolve_secondary(&self, desc: &DescriptorRef) -> Result<String, NormalizeError> {
        let job = desc.job_name();
        let mut candidates = self.lookup.runjob_candidates(&job).await?;
        match candidates.len() {
            0 => Err(NormalizeError::NotFound { job }),
            1 => Ok(candidates.remove(0)),
            count => Err(NormalizeError::Ambiguous { job, count }),
        }
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
