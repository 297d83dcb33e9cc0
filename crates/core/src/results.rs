// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered command → status accumulator for one batch run.

use crate::command::CanonicalCommand;
use crate::status::ResultStatus;
use indexmap::IndexMap;
use serde::Serialize;

/// Insertion-ordered map of command to terminal status.
///
/// A fresh map is created for each batch. Keys are written once: the first
/// status recorded for a command is kept. The map doubles as the executor's
/// dedup oracle, so anything already present is never spawned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultsMap {
    entries: IndexMap<CanonicalCommand, ResultStatus>,
}

impl ResultsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a status for a command that has none yet.
    ///
    /// Returns `false` (leaving the map untouched) when the command already
    /// has a status.
    pub fn record(&mut self, command: CanonicalCommand, status: ResultStatus) -> bool {
        if self.entries.contains_key(&command) {
            return false;
        }
        self.entries.insert(command, status);
        true
    }

    pub fn contains(&self, command: &str) -> bool {
        self.entries.contains_key(command)
    }

    pub fn get(&self, command: &str) -> Option<ResultStatus> {
        self.entries.get(command).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalCommand, ResultStatus)> {
        self.entries.iter().map(|(k, v)| (k, *v))
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod tests;
